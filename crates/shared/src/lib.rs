//! Wire contract, domain types and pure field handling for the RSVP client.

pub mod domain;
pub mod error;
pub mod protocol;
pub mod sanitize;
pub mod validate;
