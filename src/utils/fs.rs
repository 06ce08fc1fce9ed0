use std::path::{Path, PathBuf};
use tracing::debug;
use crate::utils::{ConvertError, ConvertResult, ValidationError};

/// Validates that the input path exists and is a regular file
pub fn validate_input_path(path: impl AsRef<Path>) -> ConvertResult<()> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ValidationError::path_not_found(path).into());
    }

    if !path.is_file() {
        return Err(ValidationError::not_a_file(path).into());
    }

    Ok(())
}

/// Creates the output directory (and any missing parents)
pub fn ensure_output_dir(dir: impl AsRef<Path>) -> ConvertResult<()> {
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() {
        return Err(ConvertError::settings("Output directory cannot be empty"));
    }

    std::fs::create_dir_all(dir).map_err(|e| {
        ConvertError::io(format!("Cannot create output directory {}: {e}", dir.display()))
    })?;
    debug!("Output directory ready: {}", dir.display());
    Ok(())
}

/// File name of `path` without its final extension
pub fn base_name(path: impl AsRef<Path>) -> ConvertResult<String> {
    let path = path.as_ref();
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ConvertError::settings(
            format!("Cannot derive a file name from: {}", path.display())
        ))
}

/// Builds `<output_dir>/<stem>.<ext>`
pub fn output_path(output_dir: impl AsRef<Path>, stem: &str, ext: &str) -> PathBuf {
    output_dir.as_ref().join(format!("{stem}.{ext}"))
}

/// Writes `bytes` to `path`, reporting the path on failure
pub fn write_file(path: impl AsRef<Path>, bytes: &[u8]) -> ConvertResult<()> {
    let path = path.as_ref();
    std::fs::write(path, bytes)
        .map_err(|e| ConvertError::io(format!("Failed to write {}: {e}", path.display())))?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Get file extension as lowercase string
pub fn get_extension(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
