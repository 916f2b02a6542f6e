//! Maps the job quality to format-specific `image` encoder settings.
//!
//! PNG and WebP encoders in the `image` crate are lossless only, so quality
//! has no effect on them.

use std::io::Write;
use image::DynamicImage;
use image::codecs::avif::AvifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use crate::utils::{ConverterError, TargetFormat};

type Result<T> = std::result::Result<T, ConverterError>;

/// Clamps a 0-100 quality to the 1-100 range the lossy encoders accept.
pub fn encoder_quality(quality: u8) -> u8 {
    quality.clamp(1, 100)
}

/// 8-bit RGB or RGBA copy of `image`, whichever keeps its alpha.
///
/// The encoders below only take 8-bit layouts.
fn to_8bit(image: &DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => image.clone(),
        _ if image.color().has_alpha() => DynamicImage::ImageRgba8(image.to_rgba8()),
        _ => DynamicImage::ImageRgb8(image.to_rgb8()),
    }
}

/// Encodes `image` as AVIF at `speed` (1-10).
pub fn write_avif<W: Write>(image: &DynamicImage, writer: W, quality: u8, speed: u8) -> Result<()> {
    let encoder = AvifEncoder::new_with_speed_quality(writer, speed.clamp(1, 10), encoder_quality(quality));
    to_8bit(image)
        .write_with_encoder(encoder)
        .map_err(|e| ConverterError::encode(format!("AVIF encode failed: {e}")))
}

/// Encodes `image` as baseline JPEG. Alpha is dropped.
pub fn write_jpeg<W: Write>(image: &DynamicImage, writer: W, quality: u8) -> Result<()> {
    let encoder = JpegEncoder::new_with_quality(writer, encoder_quality(quality));
    DynamicImage::ImageRgb8(image.to_rgb8())
        .write_with_encoder(encoder)
        .map_err(|e| ConverterError::encode(format!("JPEG encode failed: {e}")))
}

/// Encodes `image` as PNG with default compression.
pub fn write_png<W: Write>(image: &DynamicImage, writer: W) -> Result<()> {
    to_8bit(image)
        .write_with_encoder(PngEncoder::new(writer))
        .map_err(|e| ConverterError::encode(format!("PNG encode failed: {e}")))
}

/// Encodes `image` as lossless WebP.
pub fn write_webp<W: Write>(image: &DynamicImage, writer: W) -> Result<()> {
    to_8bit(image)
        .write_with_encoder(WebPEncoder::new_lossless(writer))
        .map_err(|e| ConverterError::encode(format!("WebP encode failed: {e}")))
}

/// Dispatches to the encoder for `format`.
pub fn write_image_as<W: Write>(
    image: &DynamicImage,
    writer: W,
    format: TargetFormat,
    quality: u8,
    avif_speed: u8,
) -> Result<()> {
    match format {
        TargetFormat::Avif => write_avif(image, writer, quality, avif_speed),
        TargetFormat::Jpeg => write_jpeg(image, writer, quality),
        TargetFormat::Png => write_png(image, writer),
        TargetFormat::WebP => write_webp(image, writer),
    }
}
