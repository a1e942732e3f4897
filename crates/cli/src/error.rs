//! CLI error types.

use std::path::PathBuf;
use thiserror::Error;

/// CLI errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The ACL file could not be read or parsed.
    #[error("opening ACL file {path}: {source}")]
    LoadList {
        path: PathBuf,
        source: access::Error,
    },

    /// The loaded list could not answer the access query.
    #[error("checking access list: {source}")]
    CheckAccess { source: access::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
