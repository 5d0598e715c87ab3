//! Channel Configuration

use crate::error::ChannelError;
use sensor_record::RecorderConfig;
use serde::{Deserialize, Serialize};
use smoothing::FilterConfig;
use std::path::Path;

/// Prefix for environment overrides, e.g. `SENSOR_RECORDER__INTERVAL_SECS=300`
pub const ENV_PREFIX: &str = "SENSOR";

/// Configuration for one sensor channel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Name used in log output
    pub name: String,
    /// Smoothing filter settings
    pub filter: FilterConfig,
    /// History recorder settings
    pub recorder: RecorderConfig,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            name: "temperature".to_string(),
            filter: FilterConfig::default(),
            recorder: RecorderConfig::default(),
        }
    }
}

impl ChannelConfig {
    /// Load defaults, then an optional file, then `SENSOR_*` environment
    /// overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ChannelError> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    fn load_with_prefix(path: Option<&Path>, prefix: &str) -> Result<Self, ChannelError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the individual components do not check themselves
    pub fn validate(&self) -> Result<(), ChannelError> {
        if self.name.trim().is_empty() {
            return Err(ChannelError::InvalidConfig(
                "channel name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
