//! Draw value objects
//!
//! A draw takes one integer from a half-open range `[min, max)` and
//! classifies it. Numbers ending in 9 win, everything else loses.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Digit that wins when it is the last digit of the drawn number.
pub const WINNING_DIGIT: i32 = 9;

/// Half-open range `[min, max)` a draw is taken from.
///
/// Deserialization goes through [`DrawRange::new`], so `min < max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDrawRange")]
pub struct DrawRange {
    min: i32,
    max: i32,
}

impl DrawRange {
    /// Lower bound of the fixed range used when the caller supplies none.
    pub const DEFAULT_MIN: i32 = 0;
    /// Upper bound (exclusive) of the fixed range used when the caller supplies none.
    pub const DEFAULT_MAX: i32 = 10;

    /// Create a range, rejecting empty or inverted bounds.
    pub fn new(min: i32, max: i32) -> Result<Self, DomainError> {
        if min >= max {
            return Err(DomainError::invalid_range(min, max));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Whether `value` lies within `[min, max)`
    pub fn contains(&self, value: i32) -> bool {
        self.min <= value && value < self.max
    }
}

/// Unvalidated wire form of [`DrawRange`]
#[derive(Deserialize)]
struct RawDrawRange {
    min: i32,
    max: i32,
}

impl TryFrom<RawDrawRange> for DrawRange {
    type Error = DomainError;

    fn try_from(raw: RawDrawRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl Default for DrawRange {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

impl fmt::Display for DrawRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}

/// Classification of a drawn number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// Classify a drawn value: `Win` iff `value mod 10 == 9`.
    ///
    /// Uses the mathematical modulo, so `-1` (which is `9 mod 10`) wins.
    pub fn classify(value: i32) -> Self {
        if value.rem_euclid(10) == WINNING_DIGIT {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable text shown for each outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeMessages {
    pub win: String,
    pub lose: String,
}

impl OutcomeMessages {
    /// Create messages, rejecting blank text.
    pub fn new(win: impl Into<String>, lose: impl Into<String>) -> Result<Self, DomainError> {
        let win = win.into();
        let lose = lose.into();
        if win.trim().is_empty() {
            return Err(DomainError::validation("Win message cannot be empty"));
        }
        if lose.trim().is_empty() {
            return Err(DomainError::validation("Lose message cannot be empty"));
        }
        Ok(Self { win, lose })
    }

    pub fn message_for(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::Win => &self.win,
            Outcome::Lose => &self.lose,
        }
    }
}

impl Default for OutcomeMessages {
    fn default() -> Self {
        Self {
            win: Outcome::Win.as_str().to_string(),
            lose: Outcome::Lose.as_str().to_string(),
        }
    }
}

/// Result of a single draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawResult {
    value: i32,
    outcome: Outcome,
    message: String,
}

impl DrawResult {
    /// Classify `value` and attach the matching message.
    pub fn from_draw(value: i32, messages: &OutcomeMessages) -> Self {
        let outcome = Outcome::classify(value);
        Self {
            value,
            outcome,
            message: messages.message_for(outcome).to_string(),
        }
    }

    /// The number exactly as drawn
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_rejects_empty_and_inverted_bounds() {
        assert_eq!(
            DrawRange::new(5, 5),
            Err(DomainError::InvalidRange { min: 5, max: 5 })
        );
        assert_eq!(
            DrawRange::new(10, 0),
            Err(DomainError::InvalidRange { min: 10, max: 0 })
        );
    }

    #[test]
    fn range_is_half_open() {
        let range = DrawRange::new(0, 10).expect("valid range");
        assert!(range.contains(0));
        assert!(range.contains(9));
        assert!(!range.contains(10));
        assert!(!range.contains(-1));
        assert_eq!(range.to_string(), "[0, 10)");
    }

    #[test]
    fn deserializing_a_range_enforces_min_below_max() {
        let err = serde_json::from_str::<DrawRange>(r#"{"min":10,"max":0}"#)
            .expect_err("inverted range must not deserialize");
        assert!(err.to_string().contains("Invalid range"), "error {err}");
        assert!(serde_json::from_str::<DrawRange>(r#"{"min":5,"max":5}"#).is_err());

        let range: DrawRange =
            serde_json::from_str(r#"{"min":0,"max":20}"#).expect("valid range");
        assert_eq!(range, DrawRange::new(0, 20).expect("valid range"));
    }

    #[test]
    fn default_range_is_zero_to_ten() {
        let range = DrawRange::default();
        assert_eq!((range.min(), range.max()), (0, 10));
    }

    #[test]
    fn classify_wins_on_trailing_nine() {
        for value in [9, 19, 29, 99, 1_000_009, i32::MAX - 8] {
            assert_eq!(Outcome::classify(value), Outcome::Win, "value {value}");
        }
    }

    #[test]
    fn classify_loses_otherwise() {
        for value in [0, 1, 8, 10, 18, 90, i32::MAX] {
            assert_eq!(Outcome::classify(value), Outcome::Lose, "value {value}");
        }
    }

    #[test]
    fn classify_negative_uses_mathematical_modulo() {
        assert_eq!(Outcome::classify(-1), Outcome::Win);
        assert_eq!(Outcome::classify(-11), Outcome::Win);
        assert_eq!(Outcome::classify(-9), Outcome::Lose);
        assert_eq!(Outcome::classify(i32::MIN), Outcome::Lose);
    }

    #[test]
    fn draw_result_keeps_value_untouched() {
        let result = DrawResult::from_draw(19, &OutcomeMessages::default());
        assert_eq!(result.value(), 19);
        assert_eq!(result.outcome(), Outcome::Win);
        assert_eq!(result.message(), "win");
    }

    #[test]
    fn custom_messages_are_used() {
        let messages = OutcomeMessages::new("Jackpot!", "Try again").expect("valid messages");
        assert_eq!(DrawResult::from_draw(9, &messages).message(), "Jackpot!");
        assert_eq!(DrawResult::from_draw(3, &messages).message(), "Try again");
    }

    #[test]
    fn blank_messages_are_rejected() {
        assert!(OutcomeMessages::new("  ", "lose").is_err());
        assert!(OutcomeMessages::new("win", "").is_err());
    }

    #[test]
    fn draw_result_serializes_lowercase_outcome() {
        let result = DrawResult::from_draw(9, &OutcomeMessages::default());
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "value": 9, "outcome": "win", "message": "win" })
        );
    }
}
