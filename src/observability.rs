//! Opt-in logging setup for hosts and tests.
//!
//! The core never requires logging for correctness; column lifecycle events
//! (creation, widening) go through `log::debug!` and stay silent unless a
//! logger is installed.

use log::LevelFilter;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger`-backed logger at debug level, printing just the
/// level and message. Safe to call more than once; later calls are no-ops,
/// as is calling it when the host already installed a logger.
pub fn enable_verbose_logging() {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(LevelFilter::Debug);
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });
        let _ = builder.try_init();
    });
}
