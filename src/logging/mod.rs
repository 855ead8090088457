//! Tracing setup for the argoform CLI.

use anyhow::{anyhow, Context};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::filter::EnvFilter;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

const DEFAULT_LEVEL: &str = "warn";

/// Initialize the tracing subscriber for this process.
///
/// Diagnostics go to stderr so the manifest stream on stdout stays clean.
/// The level comes from `RUST_LOG` when set. Errors when invoked more than
/// once per process invocation.
pub fn init() -> crate::Result<()> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LEVEL))
        .context("failed to configure tracing level")?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    Ok(())
}
