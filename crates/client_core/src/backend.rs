//! Network seam: the count fetcher and the submission dispatcher.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{RemoteCount, RsvpSubmission},
    protocol::{ClientRequest, CountQuery, CountResponse, SubmitResponse},
};
use tracing::{debug, warn};
use url::Url;

use crate::{config::Settings, ClientError};

#[async_trait]
pub trait RsvpBackend: Send + Sync {
    async fn fetch_count(&self) -> Result<RemoteCount, ClientError>;
    async fn submit(&self, submission: &RsvpSubmission) -> Result<(), ClientError>;
}

/// Stand-in used while no endpoint is configured. Never touches the network.
pub struct UnconfiguredBackend;

#[async_trait]
impl RsvpBackend for UnconfiguredBackend {
    async fn fetch_count(&self) -> Result<RemoteCount, ClientError> {
        Err(ClientError::NotConfigured)
    }

    async fn submit(&self, _submission: &RsvpSubmission) -> Result<(), ClientError> {
        Err(ClientError::NotConfigured)
    }
}

pub struct HttpBackend {
    http: Client,
    endpoint: Url,
}

impl HttpBackend {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RsvpBackend for HttpBackend {
    async fn fetch_count(&self) -> Result<RemoteCount, ClientError> {
        debug!("fetching signup count");
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&CountQuery::default())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "count fetch returned non-success status");
            return Err(ClientError::Status(status));
        }

        let body = response.bytes().await?;
        let parsed: CountResponse = serde_json::from_slice(&body)
            .map_err(|err| ClientError::InvalidResponse(format!("count body: {err}")))?;
        Ok(parsed.into())
    }

    async fn submit(&self, submission: &RsvpSubmission) -> Result<(), ClientError> {
        debug!(qty = submission.qty, "posting rsvp");
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&ClientRequest::Rsvp(submission.clone()))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let parsed = SubmitResponse::from_body(&body);

        if status.is_success() && !parsed.is_explicit_failure() {
            return Ok(());
        }

        let reason = parsed.reject_reason();
        warn!(%status, %reason, "rsvp submission rejected");
        if status.is_success() || reason.is_capacity() {
            Err(ClientError::Rejected(reason))
        } else {
            Err(ClientError::Status(status))
        }
    }
}

/// Picks the HTTP backend when an endpoint is configured, otherwise the inert one.
pub fn build_backend(settings: &Settings) -> Result<Arc<dyn RsvpBackend>, ClientError> {
    match settings.endpoint() {
        Ok(endpoint) => Ok(Arc::new(HttpBackend::new(
            endpoint,
            settings.request_timeout(),
        )?)),
        Err(ClientError::NotConfigured) => {
            warn!("RSVP endpoint not configured; network calls disabled");
            Ok(Arc::new(UnconfiguredBackend))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
#[path = "tests/backend_tests.rs"]
mod tests;
