//! Image decoding and encoding via the `image` crate.
//!
//! - [`ImageCodec`]: The decode/encode boundary the worker calls into.
//! - [`ImageRsCodec`]: Production codec; sniffs input formats, encodes the configured target.
//! - [`formats`]: Maps quality to format-specific encoder settings.

mod codec;
pub mod formats;

pub use codec::{ImageCodec, ImageRsCodec};
