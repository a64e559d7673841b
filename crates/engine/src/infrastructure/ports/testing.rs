//! Testability ports for injecting randomness.

// =============================================================================
// Testability Ports
// =============================================================================

/// Source of uniformly distributed random numbers.
///
/// Use cases never call a global generator directly; they take this port so
/// tests can substitute deterministic values.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform integer with `min <= result < max`.
    ///
    /// Callers must guarantee `min < max`.
    fn next_in_range(&self, min: i32, max: i32) -> i32;

    /// Uniform integer in `[0, i32::MAX)`.
    fn next_unbounded(&self) -> i32;

    /// Uniform integer in `[0, bound)`. Returns `0` when `bound <= 0`.
    fn next_below(&self, bound: i32) -> i32;

    /// Uniform float in `[0.0, 1.0)`.
    fn next_fraction(&self) -> f64;
}
