use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Unknown API version: {0}")]
    UnknownVersion(String),

    #[error("Invalid release handle: {0} (expected YYYY-MM)")]
    InvalidHandle(String),
}
