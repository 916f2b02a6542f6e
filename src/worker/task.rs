use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use crate::processing::ImageCodec;
use crate::utils::{ConverterResult, output_path_for};

/// Converts one input file into `output_dir`, returning the written path.
pub fn convert_file(
    codec: &dyn ImageCodec,
    input: &Path,
    output_dir: &Path,
    quality: u8,
) -> ConverterResult<PathBuf> {
    let output = output_path_for(input, output_dir, codec.target_format())?;
    let image = codec.decode(input)?;
    codec.encode(&image, &output, quality)?;
    Ok(output)
}

/// [`convert_file`] with every failure, panics included, turned into the
/// message reported for the file.
pub fn convert_isolated(
    codec: &dyn ImageCodec,
    input: &Path,
    output_dir: &Path,
    quality: u8,
) -> Result<PathBuf, String> {
    match panic::catch_unwind(AssertUnwindSafe(|| convert_file(codec, input, output_dir, quality))) {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(e.to_string()),
        Err(payload) => Err(format!("codec panicked: {}", panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};
    use crate::utils::{ConverterError, TargetFormat};

    struct StubCodec {
        panic_on_encode: bool,
    }

    impl ImageCodec for StubCodec {
        fn target_format(&self) -> TargetFormat {
            TargetFormat::Avif
        }

        fn decode(&self, path: &Path) -> ConverterResult<DynamicImage> {
            if path.to_string_lossy().contains("corrupt") {
                return Err(ConverterError::decode("bad header"));
            }
            Ok(DynamicImage::ImageRgb8(RgbImage::new(1, 1)))
        }

        fn encode(&self, _image: &DynamicImage, path: &Path, _quality: u8) -> ConverterResult<()> {
            if self.panic_on_encode {
                panic!("encoder exploded");
            }
            std::fs::write(path, b"stub").map_err(|e| ConverterError::encode(e.to_string()))?;
            Ok(())
        }
    }

    #[test]
    fn test_convert_file_writes_renamed_output() {
        let tmp = tempfile::tempdir().unwrap();
        let codec = StubCodec { panic_on_encode: false };
        let out = convert_file(&codec, Path::new("/in/photo.JPG"), tmp.path(), 80).unwrap();
        assert_eq!(out, tmp.path().join("photo.avif"));
        assert!(out.exists());
    }

    #[test]
    fn test_decode_failure_becomes_message() {
        let tmp = tempfile::tempdir().unwrap();
        let codec = StubCodec { panic_on_encode: false };
        let err = convert_isolated(&codec, Path::new("corrupt.png"), tmp.path(), 80).unwrap_err();
        assert_eq!(err, "Decode error: bad header");
    }

    #[test]
    fn test_panic_is_contained() {
        let tmp = tempfile::tempdir().unwrap();
        let codec = StubCodec { panic_on_encode: true };
        let err = convert_isolated(&codec, Path::new("a.png"), tmp.path(), 80).unwrap_err();
        assert_eq!(err, "codec panicked: encoder exploded");
    }

    #[test]
    fn test_path_without_file_name_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let codec = StubCodec { panic_on_encode: false };
        let err = convert_isolated(&codec, Path::new(".."), tmp.path(), 80).unwrap_err();
        assert!(err.contains("No file name in path"));
    }
}
