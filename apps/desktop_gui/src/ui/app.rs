use std::time::Duration;

use client_core::{FieldHandles, FormControl, SharedForm};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{
    Status, StatusKind, UiState, CHILD_NAME_MAX_CHARS, NOTES_MAX_CHARS, PARENT_NAME_MAX_CHARS,
    PHONE_MAX_CHARS,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration::dispatch_backend_command};

const QTY_MAX_CHARS: usize = 3;

pub struct RsvpApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    handles: FieldHandles,
    form: SharedForm,
    age_options: Vec<String>,
    status: Option<Status>,
    ui_state: UiState,
}

pub fn status_color(kind: StatusKind) -> Option<egui::Color32> {
    match kind {
        StatusKind::Neutral => None,
        StatusKind::Warn => Some(egui::Color32::from_rgb(230, 170, 40)),
        StatusKind::Ok => Some(egui::Color32::from_rgb(70, 170, 90)),
        StatusKind::Bad => Some(egui::Color32::from_rgb(210, 80, 80)),
    }
}

impl RsvpApp {
    /// Queues the count check before the first frame; controls stay disabled
    /// until it resolves.
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        handles: FieldHandles,
        form: SharedForm,
        age_options: Vec<String>,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            handles,
            form,
            age_options,
            status: None,
            ui_state: UiState::Loading,
        };
        app.dispatch(BackendCommand::Load);
        app
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Status(status) => self.status = Some(status),
                UiEvent::StateChanged(state) => self.ui_state = state,
                UiEvent::WorkerFailed(message) => {
                    self.ui_state = UiState::SetupError;
                    self.status = Some(Status::new(StatusKind::Bad, "Error.", message));
                }
            }
        }
    }

    fn try_submit(&mut self) {
        if !self.handles.submit.is_enabled() {
            return;
        }
        self.dispatch(BackendCommand::Submit);
    }

    fn show_form(&self, ui: &mut egui::Ui) {
        let handles = &self.handles;
        let age_options = &self.age_options;

        self.form.update(|values| {
            text_row(
                ui,
                "Parent / guardian name *",
                "Full name",
                &mut values.parent_name,
                PARENT_NAME_MAX_CHARS,
                handles.parent_name.is_enabled(),
            );
            text_row(
                ui,
                "Phone *",
                "(555) 010-0100",
                &mut values.phone,
                PHONE_MAX_CHARS,
                handles.phone.is_enabled(),
            );
            text_row(
                ui,
                "Child's name *",
                "First name",
                &mut values.child_name,
                CHILD_NAME_MAX_CHARS,
                handles.child_name.is_enabled(),
            );

            ui.label(egui::RichText::new("Age group *").strong());
            let selected = if values.age.is_empty() {
                "Select…".to_string()
            } else {
                values.age.clone()
            };
            ui.add_enabled_ui(handles.age.is_enabled(), |ui| {
                egui::ComboBox::from_id_salt("rsvp_age")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for option in age_options {
                            ui.selectable_value(&mut values.age, option.clone(), option.as_str());
                        }
                    });
            });

            text_row(
                ui,
                "How many kids *",
                "1",
                &mut values.qty,
                QTY_MAX_CHARS,
                handles.qty.is_enabled(),
            );

            ui.label(egui::RichText::new("Notes").strong());
            ui.add_enabled(
                handles.notes.is_enabled(),
                egui::TextEdit::multiline(&mut values.notes)
                    .char_limit(NOTES_MAX_CHARS)
                    .hint_text("Anything we should know?")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
        });
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        if self.ui_state == UiState::Loading && self.status.is_none() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.weak("Checking availability…");
            });
            return;
        }

        let Some(status) = &self.status else {
            return;
        };
        let mut headline = egui::RichText::new(status.headline.as_str()).strong();
        if let Some(color) = status_color(status.kind) {
            headline = headline.color(color);
        }
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(headline);
                ui.label(status.detail.as_str());
            });
        });
    }
}

fn text_row(
    ui: &mut egui::Ui,
    label: &str,
    hint: &str,
    value: &mut String,
    max_chars: usize,
    enabled: bool,
) {
    ui.label(egui::RichText::new(label).strong());
    ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(value)
            .char_limit(max_chars)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);
}

impl eframe::App for RsvpApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Kids Giveaway RSVP");
            ui.weak("One RSVP per family. Fields marked * are required.");
            ui.add_space(10.0);

            self.show_form(ui);
            ui.add_space(10.0);

            let button = egui::Button::new(egui::RichText::new("Send RSVP").strong())
                .min_size(egui::vec2(ui.available_width(), 36.0));
            if ui
                .add_enabled(self.handles.submit.is_enabled(), button)
                .clicked()
            {
                self.try_submit();
            }

            ui.add_space(10.0);
            self.show_status(ui);
        });

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
