//! Decode/encode boundary the batch worker depends on.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use image::{DynamicImage, ImageReader};
use tracing::{debug, warn};
use crate::core::ConverterConfig;
use crate::utils::{ConverterError, ConverterResult, TargetFormat, display_name};
use super::formats::write_image_as;

/// Image decode/encode capability used by the worker.
///
/// Both calls are blocking and run on the worker thread.
pub trait ImageCodec: Send + Sync {
    /// Format `encode` writes; decides the output extension.
    fn target_format(&self) -> TargetFormat;

    /// Reads and decodes the image at `path`.
    fn decode(&self, path: &Path) -> ConverterResult<DynamicImage>;

    /// Encodes `image` at `quality` (0-100) into `path`, replacing any existing file.
    fn encode(&self, image: &DynamicImage, path: &Path, quality: u8) -> ConverterResult<()>;
}

/// Production codec backed by the `image` crate.
#[derive(Debug, Clone)]
pub struct ImageRsCodec {
    format: TargetFormat,
    avif_speed: u8,
}

impl ImageRsCodec {
    pub fn new(format: TargetFormat, avif_speed: u8) -> Self {
        Self { format, avif_speed }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(config.format, config.avif_speed)
    }

    fn write_file(&self, image: &DynamicImage, path: &Path, quality: u8) -> ConverterResult<()> {
        let file = File::create(path)
            .map_err(|e| ConverterError::encode(format!("Cannot create output file: {e}")))?;
        let mut writer = BufWriter::new(file);

        write_image_as(image, &mut writer, self.format, quality, self.avif_speed)?;
        writer
            .flush()
            .map_err(|e| ConverterError::encode(format!("Cannot write output file: {e}")))
    }
}

impl Default for ImageRsCodec {
    fn default() -> Self {
        Self::from_config(&ConverterConfig::default())
    }
}

impl ImageCodec for ImageRsCodec {
    fn target_format(&self) -> TargetFormat {
        self.format
    }

    fn decode(&self, path: &Path) -> ConverterResult<DynamicImage> {
        // Sniff the header rather than trusting the extension
        let reader = ImageReader::open(path)
            .map_err(|e| ConverterError::decode(format!("Cannot open input file: {e}")))?
            .with_guessed_format()
            .map_err(|e| ConverterError::decode(format!("Cannot read input file: {e}")))?;

        let image = reader
            .decode()
            .map_err(|e| ConverterError::decode(e.to_string()))?;

        debug!("Decoded '{}': {}x{}", display_name(path), image.width(), image.height());
        Ok(image)
    }

    fn encode(&self, image: &DynamicImage, path: &Path, quality: u8) -> ConverterResult<()> {
        let existed = path.exists();
        if let Err(e) = self.write_file(image, path, quality) {
            // Leave no partial output behind for a file this call created
            if !existed {
                discard_partial(path);
            }
            return Err(e);
        }

        debug!("Encoded '{}' as {} (quality {})", display_name(path), self.format, quality);
        Ok(())
    }
}

fn discard_partial(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => debug!("Removed partial output {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove partial output {}: {}", path.display(), e),
    }
}
