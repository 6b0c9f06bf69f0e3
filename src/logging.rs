//! Logger setup for the demo binary.

use env_logger::{Builder, Env};

/// Install an env_logger honoring `RUST_LOG`, defaulting to `wavesim=info`
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("wavesim=info"));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}
