use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::{commands::BackendCommand, runtime::WorkerContext};
use client_core::{load_settings, FieldHandles, SharedForm};
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use ui::RsvpApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = Arc::new(load_settings());
    let handles = FieldHandles::default();
    let form = SharedForm::default();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(
        cmd_rx,
        ui_tx,
        WorkerContext {
            settings: Arc::clone(&settings),
            handles: handles.clone(),
            form: form.clone(),
        },
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Kids Giveaway RSVP")
            .with_inner_size([520.0, 680.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    let age_options = settings.age_options.clone();
    eframe::run_native(
        "Kids Giveaway RSVP",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(RsvpApp::new(
                cmd_tx,
                ui_rx,
                handles,
                form,
                age_options,
            )))
        }),
    )
}
