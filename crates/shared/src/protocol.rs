use serde::{Deserialize, Serialize};

use crate::domain::{RemoteCount, RsvpSubmission};

pub const COUNT_ACTION: &str = "count";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountQuery {
    pub action: String,
}

impl Default for CountQuery {
    fn default() -> Self {
        Self {
            action: COUNT_ACTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountResponse {
    #[serde(default)]
    pub count: u64,
}

impl From<CountResponse> for RemoteCount {
    fn from(value: CountResponse) -> Self {
        RemoteCount(value.count)
    }
}

/// POST body: `{"action": "<tag>", "payload": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "snake_case")]
pub enum ClientRequest {
    Rsvp(RsvpSubmission),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SubmitResponse {
    /// Lenient body parse: an empty or non-JSON body reads as `{}`.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    pub fn accepted() -> Self {
        Self {
            ok: Some(true),
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            ok: Some(false),
            reason: Some(reason.into()),
        }
    }

    pub fn is_explicit_failure(&self) -> bool {
        self.ok == Some(false)
    }

    pub fn reject_reason(&self) -> RejectReason {
        match self.reason.as_deref() {
            None => RejectReason::Unspecified,
            Some("closed") => RejectReason::Closed,
            Some("over_cap") => RejectReason::OverCap,
            Some(other) => RejectReason::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    Closed,
    OverCap,
    Other(String),
    Unspecified,
}

impl RejectReason {
    pub fn is_capacity(&self) -> bool {
        matches!(self, RejectReason::Closed | RejectReason::OverCap)
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::Closed => f.write_str("closed"),
            RejectReason::OverCap => f.write_str("over_cap"),
            RejectReason::Other(reason) => f.write_str(reason),
            RejectReason::Unspecified => f.write_str("unspecified"),
        }
    }
}
