//! Dependency artifact coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BuildModelError;

/// An immutable `group:name:version` dependency coordinate.
///
/// Serializes to and from the colon notation:
///
/// ```
/// use keel_build::Artifact;
///
/// let artifact: Artifact = "io.keel:keel-base:1.4.0".parse().unwrap();
/// assert_eq!(artifact.group(), "io.keel");
/// assert_eq!(artifact.to_string(), "io.keel:keel-base:1.4.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Artifact {
    group: String,
    name: String,
    version: String,
}

impl Artifact {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The `group:name:version` notation accepted by dependency declarations.
    pub fn notation(&self) -> String {
        format!("{}:{}:{}", self.group, self.name, self.version)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

impl FromStr for Artifact {
    type Err = BuildModelError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let mut parts = notation.split(':');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(group), Some(name), Some(version), None)
                if !group.is_empty() && !name.is_empty() && !version.is_empty() =>
            {
                Ok(Self::new(group, name, version))
            }
            _ => Err(BuildModelError::InvalidArtifact(notation.to_owned())),
        }
    }
}

impl TryFrom<String> for Artifact {
    type Error = BuildModelError;

    fn try_from(notation: String) -> Result<Self, Self::Error> {
        notation.parse()
    }
}

impl From<Artifact> for String {
    fn from(artifact: Artifact) -> Self {
        artifact.notation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_colon_notation() {
        let artifact: Artifact = "io.grpc:grpc-stub:1.18.0".parse().unwrap();
        assert_eq!(artifact.group(), "io.grpc");
        assert_eq!(artifact.name(), "grpc-stub");
        assert_eq!(artifact.version(), "1.18.0");
    }

    #[test]
    fn rejects_malformed_notation() {
        assert!("io.grpc:grpc-stub".parse::<Artifact>().is_err());
        assert!("io.grpc:grpc-stub:1.18.0:extra".parse::<Artifact>().is_err());
        assert!("::".parse::<Artifact>().is_err());
    }

    #[test]
    fn round_trips_through_serde() {
        let artifact = Artifact::new("io.keel", "keel-server", "1.4.0");
        let json = serde_json::to_string(&artifact).unwrap();
        assert_eq!(json, "\"io.keel:keel-server:1.4.0\"");
        let back: Artifact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, artifact);
    }
}
