//! Tracing/logging setup shared by test harnesses and any future fetch/CLI
//! layer.
//!
//! The accessor crates only *emit* via `tracing` (classification warnings,
//! unavailable-amount diagnostics); wiring a subscriber is kept here so
//! libraries never install one behind the caller's back.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing/logging.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`; output is JSON lines
/// with timestamps. Safe to call multiple times — subsequent calls become
/// no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
