//! Events flowing from the backend worker to the UI.

use client_core::StatusSink;
use crossbeam_channel::{Sender, TrySendError};
use shared::domain::{Status, UiState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Status(Status),
    StateChanged(UiState),
    /// The worker could not start or died; the form stays disabled.
    WorkerFailed(String),
}

/// Forwards controller status updates onto the UI event queue.
#[derive(Clone)]
pub struct ChannelStatusSink {
    ui_tx: Sender<UiEvent>,
}

impl ChannelStatusSink {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }
}

impl StatusSink for ChannelStatusSink {
    fn show(&self, status: Status) {
        match self.ui_tx.try_send(UiEvent::Status(status)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => tracing::warn!("ui event queue full; dropping status"),
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!("ui event queue closed; dropping status")
            }
        }
    }
}
