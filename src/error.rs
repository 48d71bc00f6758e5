use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures loading the fragmenter's configuration and word lists.
/// Fragmenting text itself never fails; malformed input is reported on the
/// fragments.
#[derive(Debug, Error)]
pub enum FragmenterError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, FragmenterError>;

impl FragmenterError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> FragmenterError {
        let path = path.into();
        move |source| FragmenterError::Io { path, source }
    }
}
