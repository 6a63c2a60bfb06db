//! Form controller: count check on load, submission flow and the open/closed
//! state machine.

use std::{future::Future, sync::Arc, time::Duration};

use chrono::Utc;
use shared::{
    domain::{OpenPhase, Status, UiState},
    error::RequiredField,
    validate::validate_form,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    backend::{build_backend, RsvpBackend},
    config::Settings,
    controls::{FormControls, FormFields, StatusSink},
    ClientError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Closed, setup error or still loading. Nothing was sent.
    Refused,
    /// Another submission is already in flight.
    Ignored,
    Invalid(Vec<RequiredField>),
    Accepted { closed_after: bool },
    Closed,
    Failed(String),
}

pub struct FormController {
    settings: Arc<Settings>,
    backend: Arc<dyn RsvpBackend>,
    controls: FormControls,
    fields: Arc<dyn FormFields>,
    status: Arc<dyn StatusSink>,
    request_timeout: Duration,
    state: Mutex<UiState>,
}

impl FormController {
    pub fn new(
        settings: Arc<Settings>,
        backend: Arc<dyn RsvpBackend>,
        controls: FormControls,
        fields: Arc<dyn FormFields>,
        status: Arc<dyn StatusSink>,
    ) -> Self {
        let request_timeout = settings.request_timeout();
        Self {
            settings,
            backend,
            controls,
            fields,
            status,
            request_timeout,
            state: Mutex::new(UiState::Loading),
        }
    }

    pub fn from_settings(
        settings: Arc<Settings>,
        controls: FormControls,
        fields: Arc<dyn FormFields>,
        status: Arc<dyn StatusSink>,
    ) -> Result<Self, ClientError> {
        let backend = build_backend(&settings)?;
        Ok(Self::new(settings, backend, controls, fields, status))
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub async fn state(&self) -> UiState {
        *self.state.lock().await
    }

    /// `Loading -> {Open, Closed, SetupError}`.
    pub async fn load(&self) -> UiState {
        self.set_state(UiState::Loading).await;
        self.controls.set_closed(true);

        let next = match self.bounded(self.backend.fetch_count()).await {
            Ok(count) if count.is_at_or_over(self.settings.limit) => {
                self.apply_closed(true);
                UiState::Closed
            }
            Ok(_) => {
                self.apply_closed(false);
                UiState::Open(OpenPhase::Idle)
            }
            Err(ClientError::NotConfigured) => {
                self.status.show(Status::setup_needed());
                UiState::SetupError
            }
            Err(err) => {
                warn!("initial count check failed: {err}");
                self.status.show(Status::backend_unreachable());
                UiState::SetupError
            }
        };

        info!(state = ?next, "rsvp form loaded");
        self.set_state(next).await;
        next
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let submission = {
            let mut state = self.state.lock().await;
            match *state {
                UiState::Open(OpenPhase::Submitting) => {
                    debug!("submission already in flight; ignoring");
                    return SubmitOutcome::Ignored;
                }
                UiState::Open(_) => {}
                other => {
                    debug!(state = ?other, "submit refused");
                    return SubmitOutcome::Refused;
                }
            }

            let submission = match validate_form(&self.fields.read(), Utc::now()) {
                Ok(submission) => submission,
                Err(err) => {
                    self.status.show(Status::missing_info());
                    return SubmitOutcome::Invalid(err.missing_fields().to_vec());
                }
            };

            *state = UiState::Open(OpenPhase::Submitting);
            self.controls.set_submit_enabled(false);
            self.status.show(Status::sending());
            submission
        };

        match self.bounded(self.backend.submit(&submission)).await {
            Ok(()) => self.finish_accepted().await,
            Err(err) if err.is_capacity_rejection() => {
                info!("submission rejected: list is full");
                self.apply_closed(true);
                self.set_state(UiState::Closed).await;
                SubmitOutcome::Closed
            }
            Err(err) => {
                warn!("submission failed: {err}");
                self.set_state(UiState::Open(OpenPhase::Error)).await;
                self.controls.set_submit_enabled(true);
                self.status.show(Status::retry_later());
                SubmitOutcome::Failed(err.to_string())
            }
        }
    }

    async fn finish_accepted(&self) -> SubmitOutcome {
        self.status.show(Status::received());
        self.fields.reset();

        // An unknown count after a good submission means "still open".
        let closed = match self.bounded(self.backend.fetch_count()).await {
            Ok(count) => count.is_at_or_over(self.settings.limit),
            Err(err) => {
                warn!("post-submit count check failed: {err}");
                false
            }
        };

        if closed {
            self.apply_closed(true);
            self.set_state(UiState::Closed).await;
        } else {
            self.apply_closed(false);
            self.set_state(UiState::Open(OpenPhase::Confirmed)).await;
        }
        info!(closed, "submission accepted");
        SubmitOutcome::Accepted {
            closed_after: closed,
        }
    }

    fn apply_closed(&self, closed: bool) {
        self.controls.set_closed(closed);
        if closed {
            self.status
                .show(Status::closed(&self.settings.follow_handle));
        }
    }

    async fn set_state(&self, next: UiState) {
        *self.state.lock().await = next;
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, ClientError>>,
    ) -> Result<T, ClientError> {
        tokio::time::timeout(self.request_timeout, call)
            .await
            .unwrap_or(Err(ClientError::Timeout))
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
