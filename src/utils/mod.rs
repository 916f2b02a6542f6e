pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{ConverterError, ConverterResult, PathError, ValidationError};
pub use validation::{validate_quality, validate_request};
pub use formats::{INPUT_EXTENSIONS, TargetFormat, is_supported_input};
pub use fs::{display_name, ensure_output_dir, output_path_for};
