//! `tracing-subscriber` setup.

use serde::{Deserialize, Serialize};
use std::error::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Subscriber configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingConfig {
    /// An `EnvFilter` directive string, e.g. `fieldtype=debug`.
    pub filter: String,
    /// Emit JSON lines instead of human readable output.
    pub json: bool,
    /// Include event targets.
    pub with_target: bool,
}

impl TracingConfig {
    /// Creates a configuration with an explicit filter.
    #[must_use]
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            json: false,
            with_target: true,
        }
    }

    /// Switches JSON output on or off.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Shows or hides event targets.
    #[must_use]
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    /// Builds the filter, falling back to `info` when the directive string
    /// does not parse.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

impl Default for TracingConfig {
    /// Reads `RUST_LOG`, defaulting to `info`.
    fn default() -> Self {
        Self::new(std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string()))
    }
}

/// Installs a global fmt subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &TracingConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(config.with_target);

    if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
