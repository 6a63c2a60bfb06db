//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    /// Query the remote count and derive the open/closed state.
    Load,
    Submit,
}

impl BackendCommand {
    pub fn name(self) -> &'static str {
        match self {
            BackendCommand::Load => "load",
            BackendCommand::Submit => "submit",
        }
    }
}
