//! Lotto domain types.
//!
//! Pure value objects and the classification rule. Nothing here touches
//! I/O or randomness; the engine injects a random source and hands drawn
//! numbers to these types.

pub mod error;
pub mod value_objects;

pub use error::DomainError;

pub use value_objects::{DrawRange, DrawResult, Outcome, OutcomeMessages, WINNING_DIGIT};
