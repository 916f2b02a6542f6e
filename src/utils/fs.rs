use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use crate::utils::{ConverterResult, TargetFormat, ValidationError};

/// Creates `dir` (and any missing parents) unless it already exists.
///
/// Blocking; called from the worker thread before the first file. The raw io
/// error is returned so the job-fatal status carries the OS description.
pub fn ensure_output_dir(dir: impl AsRef<Path>) -> io::Result<()> {
    std::fs::create_dir_all(dir)
}

/// Base name of `path` for status messages.
///
/// Falls back to the whole path when there is no final component.
pub fn display_name(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Output location for `input`: its base name with the extension swapped for
/// the target format's, joined onto `output_dir`.
///
/// The input extension is replaced whatever its case; only the last extension
/// goes (`a.tar.png` becomes `a.tar.avif`).
pub fn output_path_for(
    input: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    format: TargetFormat,
) -> ConverterResult<PathBuf> {
    let input = input.as_ref();
    if input.file_name().is_none() {
        return Err(ValidationError::no_file_name(input).into());
    }
    let stem = input
        .file_stem()
        .ok_or_else(|| ValidationError::no_file_name(input))?;

    let mut name = OsString::from(stem);
    name.push(".");
    name.push(format.extension());
    Ok(output_dir.as_ref().join(name))
}
