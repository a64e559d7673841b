//! Port traits for infrastructure boundaries.
//!
//! The engine has a single outbound dependency: a random number source.

mod testing;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::RandomPort;

#[cfg(test)]
pub use testing::MockRandomPort;
