//! Dispatch configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Tuning knobs for the dispatch server.
///
/// Configuration is immutable after loading and validation; the embedding
/// service deserializes it from whatever source it uses for the rest of
/// its settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Ceiling on concurrently executing handler tasks.
    ///
    /// `None` places no bound, preserving launch-everything fan-out.
    /// Launched handlers above the ceiling stay queued on the limiter and
    /// still count as outstanding work.
    #[serde(default)]
    pub max_in_flight: Option<usize>,

    /// Default budget, in seconds, a shutdown sequence grants the
    /// outstanding-work drain.
    #[serde(default = "DispatchConfig::default_drain_timeout_secs")]
    pub drain_timeout_secs: u64,
}

impl DispatchConfig {
    fn default_drain_timeout_secs() -> u64 {
        30
    }

    /// Get the drain budget as a [`Duration`].
    pub fn drain_timeout(&self) -> Duration {
        Duration::from_secs(self.drain_timeout_secs)
    }

    /// Validate configuration constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCeiling`] when `max_in_flight` is
    /// set to zero, which would leave every handler queued forever.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_in_flight == Some(0) {
            return Err(ConfigError::InvalidCeiling);
        }
        Ok(())
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_in_flight: None,
            drain_timeout_secs: Self::default_drain_timeout_secs(),
        }
    }
}

/// Errors raised by configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `max_in_flight` must be at least 1 when set.
    #[error("max_in_flight must be at least 1 when set")]
    InvalidCeiling,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
