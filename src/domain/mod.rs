//! Domain types for the Subdeck state core.
//! Defines the deck data model shared between the store and the hosting application.

pub mod deck;
pub mod error;

pub use deck::*;
pub use error::*;
