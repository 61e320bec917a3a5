use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the cargonet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a station name could not be found in the store.
    #[error("unknown station name: {name}")]
    UnknownStation { name: String },

    /// Raised when no route could be found between two stations.
    #[error("no route found between {src} and {dst}")]
    RouteNotFound { src: String, dst: String },

    /// Raised when adding a station whose name is already taken.
    #[error("station {name} already exists")]
    DuplicateStation { name: String },

    /// Raised when adding or updating a path that would collide with an
    /// existing path between the same pair of stations.
    #[error("a path between {src} and {dst} already exists")]
    DuplicatePath { src: String, dst: String },

    /// Raised when a path between two stations does not exist.
    #[error("no path exists between {src} and {dst}")]
    PathNotFound { src: String, dst: String },

    /// Raised when deleting a station that is still an endpoint of a path.
    #[error("station {name} cannot be deleted while it is part of a path")]
    StationInPath { name: String },

    /// Store data files could not be located at the resolved directory.
    #[error("data directory not found at {path}")]
    DataDirNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
