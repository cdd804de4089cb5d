use thiserror::Error;

/// Result type for octree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building an octree.
#[derive(Error, Debug)]
pub enum Error {
    /// A node was given an invalid cube.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is reserved but has no behavior yet.
    #[error("`{0}` is not implemented")]
    NotImplemented(&'static str),

    /// Malformed boundary configuration.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
