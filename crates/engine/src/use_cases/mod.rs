//! Use cases - user story orchestration.

pub mod lotto;

pub use lotto::{LottoError, LottoService, LottoUseCases};
