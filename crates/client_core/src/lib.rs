use shared::protocol::RejectReason;
use thiserror::Error;

pub mod backend;
pub mod config;
pub mod controller;
pub mod controls;

pub use backend::{build_backend, HttpBackend, RsvpBackend, UnconfiguredBackend};
pub use config::{load_settings, load_settings_from, Settings};
pub use controller::{FormController, SubmitOutcome};
pub use controls::{
    ControlHandle, FieldHandles, FormControl, FormControls, FormFields, SharedForm, StatusBoard,
    StatusSink,
};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("RSVP endpoint is not configured")]
    NotConfigured,
    #[error("request to RSVP endpoint timed out")]
    Timeout,
    #[error("RSVP endpoint returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("RSVP endpoint rejected the submission: {0}")]
    Rejected(RejectReason),
    #[error("invalid response from RSVP endpoint: {0}")]
    InvalidResponse(String),
    #[error("failed to reach RSVP endpoint: {0}")]
    Transport(#[source] reqwest::Error),
}

impl ClientError {
    /// The endpoint said the list is full. Terminal for the session, not retryable.
    pub fn is_capacity_rejection(&self) -> bool {
        matches!(self, ClientError::Rejected(reason) if reason.is_capacity())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Transport(value)
        }
    }
}

#[cfg(test)]
#[path = "tests/mock_endpoint.rs"]
mod mock_endpoint;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
