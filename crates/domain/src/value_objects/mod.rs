//! Value objects - Immutable objects defined by their attributes

mod draw;

pub use draw::{DrawRange, DrawResult, Outcome, OutcomeMessages, WINNING_DIGIT};
