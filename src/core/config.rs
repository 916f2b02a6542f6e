use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::utils::{ConverterError, ConverterResult, TargetFormat};

pub const DEFAULT_QUALITY: u8 = 80;
pub const DEFAULT_AVIF_SPEED: u8 = 6;

/// Converter settings that stay fixed across jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConverterConfig {
    /// Format every job encodes to
    pub format: TargetFormat,
    /// AVIF encoder speed, 1 (slowest, smallest) to 10 (fastest)
    pub avif_speed: u8,
    /// Quality used when the caller does not pick one
    pub default_quality: u8,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            format: TargetFormat::Avif,
            avif_speed: DEFAULT_AVIF_SPEED,
            default_quality: DEFAULT_QUALITY,
        }
    }
}

impl ConverterConfig {
    /// Reads a JSON config file. Missing keys take their defaults.
    pub async fn load(path: impl AsRef<Path>) -> ConverterResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            ConverterError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_json(&raw)?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn from_json(raw: &str) -> ConverterResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| ConverterError::config(format!("Invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConverterResult<()> {
        if !(1..=10).contains(&self.avif_speed) {
            return Err(ConverterError::config(format!(
                "Invalid AVIF speed: {}. Must be between 1 and 10", self.avif_speed
            )));
        }
        if self.default_quality > 100 {
            return Err(ConverterError::config(format!(
                "Invalid quality value: {}. Must be between 0 and 100", self.default_quality
            )));
        }
        Ok(())
    }
}
