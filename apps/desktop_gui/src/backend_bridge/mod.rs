//! Bridge between the egui thread and the async worker that owns the form controller.

pub mod commands;
pub mod runtime;
