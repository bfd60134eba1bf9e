//! Test utilities for recipe-cost
//!
//! Helpers shared by unit tests and the integration suite: logging setup and
//! small fixtures for hand-assembling sites without going through the
//! builder.
//!
//! # Example
//!
//! ```rust,no_run
//! use recipe_cost::models::Site;
//! use recipe_cost::test_utils::fixtures::{grocery_ingredient, recipe};
//!
//! let mut soup = recipe("Soup", "soup");
//! soup.scales[0].ingredients = vec![grocery_ingredient(2.0, 1.5)];
//! let site = Site::new(vec![soup]).unwrap();
//! ```

pub mod fixtures;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. Uses `level` if given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=recipe_cost=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
