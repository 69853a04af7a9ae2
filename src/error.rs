use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures of the setup steps. Malformed graph files are not errors, see `Validation`.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot draw {edges} edges without self loops from {nodes} node(s), at least 2 nodes are required")]
    TooFewNodes { nodes: u32, edges: u32 },
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

pub type SetupResult<T> = Result<T, SetupError>;

impl SetupError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> SetupError {
        SetupError::Io { path: path.as_ref().to_path_buf(), source }
    }
}

/// Attaches the path being worked on to a raw `io::Error`.
pub(crate) trait IoContext<T> {
    fn with_path(self, path: &Path) -> SetupResult<T>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn with_path(self, path: &Path) -> SetupResult<T> {
        self.map_err(|source| SetupError::io(path, source))
    }
}
