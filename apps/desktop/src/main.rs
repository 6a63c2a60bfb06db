use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use client_core::{
    load_settings, load_settings_from, FieldHandles, FormController, SharedForm, SubmitOutcome,
};
use shared::domain::{RawRsvpForm, UiState};
use tracing_subscriber::EnvFilter;

mod console;

use console::ConsoleStatus;

#[derive(Parser, Debug)]
#[command(name = "rsvp", about = "Sign up for the event list")]
struct Cli {
    /// Settings file (defaults to ./rsvp.toml).
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether signups are open.
    Status,
    /// Send one RSVP.
    Submit(SubmitArgs),
}

#[derive(Args, Debug)]
struct SubmitArgs {
    #[arg(long, default_value = "")]
    parent_name: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    child_name: String,
    #[arg(long, default_value = "")]
    age: String,
    #[arg(long, default_value = "1")]
    qty: String,
    #[arg(long, default_value = "")]
    notes: String,
}

impl From<SubmitArgs> for RawRsvpForm {
    fn from(value: SubmitArgs) -> Self {
        Self {
            parent_name: value.parent_name,
            phone: value.phone,
            child_name: value.child_name,
            age: value.age,
            qty: value.qty,
            notes: value.notes,
        }
    }
}

fn exit_code_for_state(state: UiState) -> u8 {
    match state {
        UiState::Open(_) => 0,
        UiState::Closed => 2,
        UiState::SetupError | UiState::Loading => 3,
    }
}

fn exit_code_for_outcome(outcome: &SubmitOutcome) -> u8 {
    match outcome {
        SubmitOutcome::Accepted { .. } => 0,
        SubmitOutcome::Invalid(_) | SubmitOutcome::Failed(_) | SubmitOutcome::Ignored => 1,
        SubmitOutcome::Closed => 2,
        SubmitOutcome::Refused => 3,
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let settings = Arc::new(match &cli.config {
        Some(path) => load_settings_from(path),
        None => load_settings(),
    });

    let status_only = matches!(cli.command, Command::Status);
    let form = match cli.command {
        Command::Status => SharedForm::default(),
        Command::Submit(args) => SharedForm::new(args.into()),
    };
    let handles = FieldHandles::default();
    let controller = FormController::from_settings(
        settings,
        handles.form_controls(),
        Arc::new(form.clone()),
        Arc::new(ConsoleStatus),
    )
    .context("failed to set up RSVP client")?;

    let state = controller.load().await;
    if status_only {
        if state.is_open() {
            println!("RSVP is open.");
        }
        return Ok(ExitCode::from(exit_code_for_state(state)));
    }

    if !state.is_open() {
        return Ok(ExitCode::from(exit_code_for_state(state)));
    }

    let outcome = controller.submit().await;
    if let SubmitOutcome::Invalid(fields) = &outcome {
        let names: Vec<_> = fields.iter().map(|f| f.label()).collect();
        eprintln!("missing: {}", names.join(", "));
    }
    Ok(ExitCode::from(exit_code_for_outcome(&outcome)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_args_map_onto_raw_form() {
        let cli = Cli::try_parse_from([
            "rsvp",
            "submit",
            "--parent-name",
            "Dana",
            "--phone",
            "555 0100",
            "--child-name",
            "Kit",
            "--age",
            "6-8",
        ])
        .expect("parse");

        let Command::Submit(args) = cli.command else {
            panic!("expected submit");
        };
        let form = RawRsvpForm::from(args);
        assert_eq!(form.parent_name, "Dana");
        assert_eq!(form.qty, "1");
        assert!(form.notes.is_empty());
    }

    #[test]
    fn closed_and_setup_error_have_distinct_exit_codes() {
        assert_eq!(exit_code_for_state(UiState::Closed), 2);
        assert_eq!(exit_code_for_state(UiState::SetupError), 3);
        assert_eq!(
            exit_code_for_outcome(&SubmitOutcome::Failed("boom".into())),
            1
        );
        assert_eq!(
            exit_code_for_outcome(&SubmitOutcome::Accepted { closed_after: true }),
            0
        );
    }
}
