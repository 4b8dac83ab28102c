//! Tracing setup for the rdbaccess binary.
//!
//! Diagnostics go to stderr so stdout stays a clean JSON envelope.
//!
//!   rdbaccess --debug select "..."      # every statement at debug level
//!   RUST_LOG=rdbaccess=trace rdbaccess  # fine-grained control

use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

pub fn init_tracing(debug: bool) -> AppResult<()> {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| AppError::Other(format!("tracing init failed: {}", e)))
}
