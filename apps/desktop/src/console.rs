//! Terminal rendering of the status region.

use client_core::StatusSink;
use shared::domain::{Status, StatusKind};

pub struct ConsoleStatus;

pub fn prefix(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Neutral => "[info]",
        StatusKind::Warn => "[warn]",
        StatusKind::Ok => "[ok]",
        StatusKind::Bad => "[error]",
    }
}

impl StatusSink for ConsoleStatus {
    fn show(&self, status: Status) {
        let line = format!("{} {status}", prefix(status.kind));
        if matches!(status.kind, StatusKind::Bad | StatusKind::Warn) {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}
