//! Shared test utilities.
//!
//! Available to unit tests and, behind the `test-utils` feature, to the
//! integration suites. Provides:
//!
//! - [`init_test_logging`] - opt-in tracing output for test debugging
//! - [`fixtures`] - canned news-item data
//! - [`mock_map`] - recording doubles for the mapping-library seam

pub mod fixtures;
pub mod mock_map;

pub use fixtures::{sample_newsitems, sample_newsitems_json};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Call at the top of a test to see `tracing` output while debugging it.
/// Pass a level to force verbosity, or `None` to defer to `RUST_LOG` (and
/// stay silent when neither is set).
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
            .try_init();
    });
}
