use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Terminal failures of a scan run. Each one is reported once at the boundary.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input file could not be opened, read, or decoded as UTF-8
    #[error("Error reading file {}", path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report file could not be created or written
    #[error("Error writing output file {}", path.display())]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputAccess { path: path.into(), source }
    }

    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputAccess { path: path.into(), source }
    }
}
