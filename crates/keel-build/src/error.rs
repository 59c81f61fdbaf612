//! Error types for build-model operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildModelError>;

#[derive(Debug, Error)]
pub enum BuildModelError {
    #[error("extension `{0}` is already registered")]
    DuplicateExtension(String),

    #[error("no extension named `{0}` is registered")]
    UnknownExtension(String),

    #[error("extension `{name}` is not a `{expected}`")]
    ExtensionTypeMismatch { name: String, expected: &'static str },

    #[error("invalid artifact notation: `{0}` (expected `group:name:version`)")]
    InvalidArtifact(String),
}
