//! Whole-file document I/O for `launch.json`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::LaunchConfig;

/// File name of the persisted document.
pub const LAUNCH_CONFIG_FILE: &str = "launch.json";

/// Errors from loading or persisting the document.
#[derive(Debug, Error)]
pub enum LaunchConfigError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize launch configuration")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load the document at `path`.
///
/// Returns `Ok(None)` when the file does not exist. A parse failure is an
/// error for the caller to recover from (by substituting the default
/// document), never grounds for touching the file.
pub fn load(path: &Path) -> Result<Option<LaunchConfig>, LaunchConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(LaunchConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = serde_json::from_str(&content).map_err(|source| LaunchConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(config))
}

/// Persist the document to `path`, replacing any prior content.
///
/// Output is 2-space-indented UTF-8 JSON with fields in construction order.
pub fn save(path: &Path, config: &LaunchConfig) -> Result<(), LaunchConfigError> {
    let json = serde_json::to_string_pretty(config).map_err(LaunchConfigError::Serialize)?;

    std::fs::write(path, json).map_err(|source| LaunchConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
