//! Access-list error types.

use thiserror::Error;

/// Access-list errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The ACL document is not valid YAML of the expected shape.
    #[error("failed to parse access list: {0}")]
    Parse(String),

    /// An I/O error occurred while reading the list.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The list was queried before anything was loaded into it.
    #[error("access list is not initialized")]
    Uninitialized,

    /// The queried environment has no entry in the list.
    ///
    /// Distinct from a denial: the environment was never granted to
    /// anyone, which usually means a configuration gap.
    #[error("environment {0} is not defined in the access list")]
    UndefinedEnvironment(String),
}

pub type Result<T> = std::result::Result<T, Error>;
