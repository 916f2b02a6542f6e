use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use crate::utils::ConverterError;

/// Extensions accepted as conversion input.
pub const INPUT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Encoded format written by the converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    #[default]
    Avif,
    Jpeg,
    Png,
    WebP,
}

impl TargetFormat {
    /// Canonical (lowercase) extension used for output file names
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Avif => "avif",
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::WebP => "webp",
        }
    }

    /// Whether the encoder honours the quality setting
    pub fn is_lossy(&self) -> bool {
        matches!(self, Self::Avif | Self::Jpeg)
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Avif => "AVIF",
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::WebP => "WebP",
        };
        f.write_str(name)
    }
}

impl FromStr for TargetFormat {
    type Err = ConverterError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        let ext = ext.trim_start_matches('.').to_lowercase();
        match ext.as_str() {
            "avif" => Ok(Self::Avif),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "webp" => Ok(Self::WebP),
            _ => Err(ConverterError::format(format!(
                "Unsupported target format: {}", ext
            ))),
        }
    }
}

/// Whether `path` carries one of the recognised input extensions (any case).
pub fn is_supported_input(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| INPUT_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
