//! Error types for the bootstrap layer.

use thiserror::Error;

use keel_build::BuildModelError;

pub type Result<T> = std::result::Result<T, BootstrapError>;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("protoc artifact specification must not be blank")]
    BlankArtifact,

    #[error("the `{0}` declarations are missing from the project; apply the bundled scripts first")]
    MissingConfiguration(&'static str),

    #[error("invalid dependency declarations: {0}")]
    InvalidDeclarations(String),

    #[error("malformed bundled resource `{name}`: {source}")]
    MalformedResource {
        name: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Model(#[from] BuildModelError),
}
