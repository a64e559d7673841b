//! Lotto Engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Draw orchestration over the random source port
//! - `infrastructure/` - Port definitions, random adapters, configuration
//! - `api/` - HTTP entry points and HTML views
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
