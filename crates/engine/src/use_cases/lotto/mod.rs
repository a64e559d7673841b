//! Lotto use cases.
//!
//! Draws one number from an injected random source and classifies it.

mod error;

use std::sync::Arc;

use lotto_domain::{DrawRange, DrawResult, OutcomeMessages};

use crate::infrastructure::ports::RandomPort;

pub use error::LottoError;

/// Container for lotto use cases.
pub struct LottoUseCases {
    pub draw: Arc<LottoService>,
}

impl LottoUseCases {
    pub fn new(draw: Arc<LottoService>) -> Self {
        Self { draw }
    }
}

/// Draws a number and decides whether it wins.
pub struct LottoService {
    random: Arc<dyn RandomPort>,
    messages: OutcomeMessages,
}

impl LottoService {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self::with_messages(random, OutcomeMessages::default())
    }

    pub fn with_messages(random: Arc<dyn RandomPort>, messages: OutcomeMessages) -> Self {
        Self { random, messages }
    }

    /// Draw from `[min, max)` and classify the result.
    ///
    /// # Returns
    /// * `Ok(DrawResult)` - the drawn value, its outcome, and the outcome message
    /// * `Err(LottoError::InvalidRange)` - `min >= max`; the random source is not consulted
    pub fn classify(&self, min: i32, max: i32) -> Result<DrawResult, LottoError> {
        let range =
            DrawRange::new(min, max).map_err(|_| LottoError::InvalidRange { min, max })?;
        Ok(self.classify_range(range))
    }

    /// Draw from an already validated range.
    pub fn classify_range(&self, range: DrawRange) -> DrawResult {
        let drawn = self.random.next_in_range(range.min(), range.max());
        let result = DrawResult::from_draw(drawn, &self.messages);

        tracing::debug!(
            min = range.min(),
            max = range.max(),
            value = result.value(),
            outcome = %result.outcome(),
            "Draw classified"
        );

        result
    }

    /// Draw from the fixed `[0, 10)` range.
    pub fn draw_default(&self) -> DrawResult {
        self.classify_range(DrawRange::default())
    }
}
