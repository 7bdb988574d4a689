//! Error types for the Roster client.
//!
//! Every fallible runtime operation returns [`Error`]; start-up configuration has its own
//! [`config::ConfigError`]. Components sit at the UI boundary: they log the error with
//! `tracing::error!` and abort the action, so nothing here is ever rendered to the user.

pub mod config;

use thiserror::Error;

/// Main error type for the Roster client.
///
/// Aggregates form, board, and HTTP failures. `thiserror`'s `#[from]` lets the `?` operator
/// convert library errors at the call site.
#[derive(Error, Debug)]
pub enum Error {
    /// The create form was submitted with a field left unselected or empty.
    #[error("Create form is missing a value for field: {0}")]
    MissingFormField(&'static str),
    /// A card control referenced a list position that is not rendered.
    #[error("No character card is rendered at position {0}")]
    CardNotFound(usize),
    /// Transport failure or a response body that could not be decoded.
    #[error(transparent)]
    Http(#[from] reqwasm::Error),
    /// Failed to encode a request body.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    /// The characters API answered with a non-success status.
    #[error("Request failed with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}
