// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logging setup for the demo.

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

/// Failed to install the global subscriber.
#[derive(Debug, thiserror::Error)]
#[error("failed to install global tracing subscriber: {0}")]
pub(crate) struct LoggingError(tracing::subscriber::SetGlobalDefaultError);

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
pub(crate) fn init(verbose: bool) -> Result<(), LoggingError> {
    let default = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber).map_err(LoggingError)
}
