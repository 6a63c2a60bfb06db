use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PARENT_NAME_MAX_CHARS: usize = 120;
pub const PHONE_MAX_CHARS: usize = 32;
pub const CHILD_NAME_MAX_CHARS: usize = 80;
pub const NOTES_MAX_CHARS: usize = 500;
pub const DEFAULT_QTY: u32 = 1;

/// One attendee signup as sent to the endpoint. Built fresh per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpSubmission {
    pub created_at: DateTime<Utc>,
    pub parent_name: String,
    pub phone: String,
    pub child_name: String,
    pub age: String,
    pub qty: u32,
    pub notes: String,
}

/// Unsanitized values as currently typed into the form.
///
/// `Default` is the reset state of the form: everything blank except the
/// quantity, which goes back to `"1"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRsvpForm {
    pub parent_name: String,
    pub phone: String,
    pub child_name: String,
    pub age: String,
    pub qty: String,
    pub notes: String,
}

impl Default for RawRsvpForm {
    fn default() -> Self {
        Self {
            parent_name: String::new(),
            phone: String::new(),
            child_name: String::new(),
            age: String::new(),
            qty: DEFAULT_QTY.to_string(),
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RemoteCount(pub u64);

impl RemoteCount {
    pub fn is_at_or_over(self, limit: u64) -> bool {
        self.0 >= limit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenPhase {
    Idle,
    Submitting,
    Error,
    Confirmed,
}

/// Per-session form state. Always derived from the last server answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Loading,
    Open(OpenPhase),
    Closed,
    SetupError,
}

impl UiState {
    pub fn is_open(self) -> bool {
        matches!(self, UiState::Open(_))
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, UiState::Closed | UiState::SetupError)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Neutral,
    Warn,
    Ok,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub headline: String,
    pub detail: String,
}

impl Status {
    pub fn new(kind: StatusKind, headline: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            headline: headline.into(),
            detail: detail.into(),
        }
    }

    pub fn sending() -> Self {
        Self::new(StatusKind::Neutral, "Sending…", "Locking in your RSVP.")
    }

    pub fn missing_info() -> Self {
        Self::new(
            StatusKind::Warn,
            "Missing info.",
            "Please fill out all required fields.",
        )
    }

    pub fn received() -> Self {
        Self::new(
            StatusKind::Ok,
            "RSVP received.",
            "You're on the list. We'll share finalized updates soon.",
        )
    }

    pub fn retry_later() -> Self {
        Self::new(StatusKind::Bad, "Error.", "Please try again in a moment.")
    }

    pub fn closed(follow_handle: &str) -> Self {
        Self::new(
            StatusKind::Bad,
            "RSVP is closed.",
            format!(
                "The list is no longer accepting signups. Follow {follow_handle} for future events."
            ),
        )
    }

    pub fn setup_needed() -> Self {
        Self::new(
            StatusKind::Warn,
            "Setup needed:",
            "RSVP backend isn't connected yet. Set webhook_url in rsvp.toml or RSVP_WEBHOOK_URL.",
        )
    }

    pub fn backend_unreachable() -> Self {
        Self::new(
            StatusKind::Warn,
            "RSVP unavailable:",
            "The signup service can't be reached right now. Please reload later.",
        )
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.headline, self.detail)
    }
}
