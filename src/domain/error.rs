//! Domain error types for the Subdeck state core.
//!
//! The reducer is total and never returns these; they name the conditions
//! under which an action is ignored, and surface to callers through parsing
//! helpers.

use thiserror::Error;

use super::deck::DeckId;

/// Domain errors related to deck targeting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("Deck not found: {0}")]
    NotFound(DeckId),

    #[error("No deck is currently active")]
    NoActiveDeck,
}

/// Error returned when a sort name is not one of the known modes.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown sort type: {0}")]
pub struct ParseSortTypeError(pub String);
