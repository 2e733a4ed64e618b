//! Shared file and configuration helpers for the command handlers.

use questwright::{
    AdventureRequest, QuestwrightConfig, QuestwrightResult, StorageError, StorageErrorKind,
};
use std::path::Path;
use tracing::debug;

/// Bundled defaults, optionally with an explicit override file on top.
pub fn load_config(path: Option<&Path>) -> QuestwrightResult<QuestwrightConfig> {
    match path {
        Some(path) => QuestwrightConfig::load_with_override(path),
        None => QuestwrightConfig::load(),
    }
}

/// Read a UTF-8 file.
pub fn read_file(path: &Path) -> QuestwrightResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", path.display(), e))).into()
    })
}

/// Write a UTF-8 file, replacing any existing content.
pub fn write_file(path: &Path, contents: &str) -> QuestwrightResult<()> {
    std::fs::write(path, contents).map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!("{}: {}", path.display(), e)))
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

/// Parse and validate a request file against the configured capacity.
pub fn read_request(path: &Path, max_scenes: usize) -> QuestwrightResult<AdventureRequest> {
    let body = read_file(path)?;
    let request = AdventureRequest::from_json_str(&body)?;
    request.validate(max_scenes)?;
    Ok(request)
}
