use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Errors from the external CSS build and version detection.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Command `{0}` timed out after {1:?}")]
    Timeout(String, Duration),
    #[error("Command `{0}` failed with status {1}")]
    CommandFailed(String, ExitStatus),
    #[error("Command output was not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("build finished but did not write {0}")]
    MissingOutput(PathBuf),
    #[error("package.json not found at {0}")]
    MissingPackageJson(PathBuf),
    #[error("invalid package.json: {0}")]
    PackageJson(#[from] serde_json::Error),
    #[error("Tailwind CSS not found in the dependencies of {0}")]
    VersionNotFound(PathBuf),
}

/// Errors while obtaining CSS text to extract from.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Build(#[from] BuildError),
}
