//! UI layer: the RSVP form window.

pub mod app;

pub use app::RsvpApp;
