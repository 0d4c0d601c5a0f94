use thiserror::Error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the process-wide subscriber. `level` is the fallback directive
/// when RUST_LOG is unset.
pub fn tracing_init(level: &str) -> Result<(), TracingInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|source| TracingInitError::InvalidFilter { source })?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| TracingInitError::SetGlobalDefault { source })?;

    Ok(())
}

#[derive(Debug, Error)]
pub enum TracingInitError {
    #[error("InvalidFilter: {source}")]
    InvalidFilter {
        #[from]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("SetGlobalDefault: {source}")]
    SetGlobalDefault {
        #[from]
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}
