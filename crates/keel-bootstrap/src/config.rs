//! Typed view over the dependency declarations carried by the project.
//!
//! The bundled `dependencies` resource stores its payload as a JSON value in
//! the project's extra properties; [`Ext`] reads it back through serde.

use serde::{Deserialize, Serialize};

use keel_build::{Artifact, BuildProject};

use crate::error::{BootstrapError, Result};

/// Extra-property key holding the dependency declarations.
pub const DEPS_PROPERTY: &str = "keelDependencies";

/// Extra-property key holding the framework version.
pub const VERSION_PROPERTY: &str = "keelVersion";

/// Contents of the `dependencies` resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyDeclarations {
    /// gRPC runtime artifacts added when gRPC stub generation is on.
    #[serde(default)]
    pub grpc: Vec<Artifact>,

    #[serde(default)]
    pub versions: Versions,

    #[serde(default)]
    pub build: BuildTools,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Versions {
    #[serde(default)]
    pub grpc: Option<String>,

    #[serde(default)]
    pub protobuf: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildTools {
    /// Coordinate of the Protobuf compiler executable.
    #[serde(default)]
    pub protoc: Option<Artifact>,
}

/// Accessor for the declarations attached to a project.
pub struct Ext {
    project: BuildProject,
}

impl Ext {
    pub fn of(project: &BuildProject) -> Self {
        Self {
            project: project.clone(),
        }
    }

    pub fn declarations(&self) -> Result<DependencyDeclarations> {
        let value = self
            .project
            .properties()
            .get(DEPS_PROPERTY)
            .cloned()
            .ok_or(BootstrapError::MissingConfiguration(DEPS_PROPERTY))?;
        serde_json::from_value(value)
            .map_err(|err| BootstrapError::InvalidDeclarations(err.to_string()))
    }

    pub fn grpc_artifacts(&self) -> Result<Vec<Artifact>> {
        Ok(self.declarations()?.grpc)
    }

    pub fn protoc(&self) -> Result<Artifact> {
        self.declarations()?
            .build
            .protoc
            .ok_or(BootstrapError::MissingConfiguration("build.protoc"))
    }

    pub fn version(&self) -> Result<String> {
        let value = self
            .project
            .properties()
            .get(VERSION_PROPERTY)
            .and_then(|value| value.as_str().map(str::to_owned));
        value.ok_or(BootstrapError::MissingConfiguration(VERSION_PROPERTY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_declarations_are_an_error() {
        let project = BuildProject::new("app", "/tmp/app");
        let err = Ext::of(&project).declarations().unwrap_err();
        assert!(matches!(err, BootstrapError::MissingConfiguration(_)));
    }

    #[test]
    fn reads_grpc_artifacts_back() {
        let project = BuildProject::new("app", "/tmp/app");
        project.properties().set(
            DEPS_PROPERTY,
            json!({
                "grpc": ["io.grpc:grpc-stub:1.18.0"],
                "versions": { "grpc": "1.18.0" }
            }),
        );

        let artifacts = Ext::of(&project).grpc_artifacts().unwrap();
        assert_eq!(artifacts, vec![Artifact::new("io.grpc", "grpc-stub", "1.18.0")]);
    }
}
