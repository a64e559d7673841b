//! Application state and composition.

use std::sync::Arc;

use lotto_domain::DrawRange;

use crate::infrastructure::{
    config::LottoConfig,
    ports::RandomPort,
    random::{SeededRandom, SystemRandom},
};
use crate::use_cases::{LottoService, LottoUseCases};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    /// Range applied to any bound a request leaves out
    pub default_range: DrawRange,
}

/// Container for all use cases.
pub struct UseCases {
    pub lotto: LottoUseCases,
}

impl App {
    /// Build the application around an explicit random source.
    pub fn new(random: Arc<dyn RandomPort>, config: &LottoConfig) -> Self {
        let draw = Arc::new(LottoService::with_messages(
            random,
            config.messages.clone(),
        ));

        Self {
            use_cases: UseCases {
                lotto: LottoUseCases::new(draw),
            },
            default_range: config.default_range,
        }
    }

    /// Build the application with the random source the config asks for.
    pub fn from_config(config: &LottoConfig) -> Self {
        let random: Arc<dyn RandomPort> = match config.rng_seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded random source");
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(SystemRandom::new()),
        };
        Self::new(random, config)
    }
}
