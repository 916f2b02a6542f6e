use std::path::PathBuf;
use tracing::warn;
use crate::core::ConversionJob;
use crate::utils::{ConverterResult, ValidationError, is_supported_input};

/// Checks the caller-side preconditions and builds the job.
///
/// The worker itself never validates; front ends call this before starting.
/// Inputs with unrecognised extensions are only logged, the codec gets the
/// final say on whether a file decodes.
pub fn validate_request(
    files: Vec<PathBuf>,
    output_dir: PathBuf,
    quality: u32,
) -> ConverterResult<ConversionJob> {
    if files.is_empty() {
        return Err(ValidationError::NoFiles.into());
    }

    if output_dir.as_os_str().is_empty() {
        return Err(ValidationError::NoOutputDir.into());
    }

    let quality = validate_quality(quality)?;

    for file in files.iter().filter(|f| !is_supported_input(f)) {
        warn!("Input does not look like a PNG or JPEG: {}", file.display());
    }

    Ok(ConversionJob::new(files, output_dir, quality))
}

/// Validates a quality value (0-100 inclusive)
pub fn validate_quality(quality: u32) -> ConverterResult<u8> {
    if quality > 100 {
        return Err(ValidationError::settings(format!(
            "Invalid quality value: {}. Must be between 0 and 100", quality
        ))
        .into());
    }
    Ok(quality as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ConverterError;

    #[test]
    fn test_rejects_empty_file_list() {
        let err = validate_request(vec![], "/out".into(), 80).unwrap_err();
        assert!(matches!(err, ConverterError::Validation(ValidationError::NoFiles)));
    }

    #[test]
    fn test_rejects_empty_output_dir() {
        let err = validate_request(vec!["a.png".into()], PathBuf::new(), 80).unwrap_err();
        assert!(matches!(err, ConverterError::Validation(ValidationError::NoOutputDir)));
    }

    #[test]
    fn test_quality_bounds() {
        assert_eq!(validate_quality(0).unwrap(), 0);
        assert_eq!(validate_quality(100).unwrap(), 100);
        assert!(validate_quality(101).is_err());
    }

    #[test]
    fn test_builds_job_preserving_order() {
        let job = validate_request(
            vec!["b.jpg".into(), "a.png".into(), "notes.txt".into()],
            "/out".into(),
            75,
        )
        .unwrap();
        assert_eq!(job.files, vec![PathBuf::from("b.jpg"), "a.png".into(), "notes.txt".into()]);
        assert_eq!(job.quality, 75);
        assert_eq!(job.output_dir, PathBuf::from("/out"));
    }
}
