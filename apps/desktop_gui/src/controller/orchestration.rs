//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use shared::domain::{Status, StatusKind};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut Option<Status>,
) {
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd.name(), "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd.name(), "ui->backend command queue is full");
            *status = Some(Status::new(
                StatusKind::Warn,
                "Busy.",
                "Still working on the last request; please retry.",
            ));
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd.name(), "backend worker disconnected");
            *status = Some(Status::new(
                StatusKind::Bad,
                "Error.",
                "The background worker stopped. Restart the app and try again.",
            ));
        }
    }
}
