use std::path::PathBuf;

use thiserror::Error;

use crate::codec::CodecError;

/// Repository errors.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid roster file: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Encode(#[from] CodecError),
}
