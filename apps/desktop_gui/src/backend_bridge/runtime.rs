//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{FieldHandles, FormController, Settings, SharedForm};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{ChannelStatusSink, UiEvent};

/// Everything the worker shares with the UI thread.
pub struct WorkerContext {
    pub settings: Arc<Settings>,
    pub handles: FieldHandles,
    pub form: SharedForm,
}

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    context: WorkerContext,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let status = Arc::new(ChannelStatusSink::new(ui_tx.clone()));
            let controller = match FormController::from_settings(
                context.settings,
                context.handles.form_controls(),
                Arc::new(context.form),
                status,
            ) {
                Ok(controller) => Arc::new(controller),
                Err(err) => {
                    tracing::error!("failed to build form controller: {err}");
                    let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                        "backend worker startup failure: {err}"
                    )));
                    return;
                }
            };

            while let Ok(cmd) = cmd_rx.recv() {
                let controller = Arc::clone(&controller);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    match cmd {
                        BackendCommand::Load => {
                            controller.load().await;
                        }
                        BackendCommand::Submit => {
                            let outcome = controller.submit().await;
                            tracing::debug!(?outcome, "submit finished");
                        }
                    }
                    let _ = ui_tx.try_send(UiEvent::StateChanged(controller.state().await));
                });
            }
            tracing::debug!("ui command queue closed; backend worker exiting");
        });
    })
}
