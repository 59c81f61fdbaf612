//! Bundled configuration resources.
//!
//! Three TOML resources ship with the crate: dependency declarations, the
//! framework version, and the recommended model-compiler settings. Applying
//! one merges its payload into the project.

use serde::Deserialize;

use keel_build::BuildProject;

use crate::compiler::{ModelCompilerOptions, MODEL_COMPILER_EXTENSION};
use crate::config::{DependencyDeclarations, DEPS_PROPERTY, VERSION_PROPERTY};
use crate::error::{BootstrapError, Result};

const SCRIPT_EXTENSION: &str = ".toml";

/// The names of the existing bundled resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptName {
    Dependencies,
    Version,
    Recommended,
}

impl ScriptName {
    fn stem(&self) -> &'static str {
        match self {
            ScriptName::Dependencies => "dependencies",
            ScriptName::Version => "version",
            ScriptName::Recommended => "recommended",
        }
    }

    /// Resource file name: the stem plus the fixed extension.
    pub fn file_name(&self) -> String {
        format!("{}{SCRIPT_EXTENSION}", self.stem())
    }
}

/// One bundled resource, retrievable by its enumerated name.
pub struct PluginScript {
    name: ScriptName,
    contents: &'static str,
}

impl PluginScript {
    /// Obtains the resource with the given name.
    pub fn named(name: ScriptName) -> Self {
        let contents = match name {
            ScriptName::Dependencies => include_str!("../resources/dependencies.toml"),
            ScriptName::Version => include_str!("../resources/version.toml"),
            ScriptName::Recommended => include_str!("../resources/recommended.toml"),
        };
        Self { name, contents }
    }

    /// The `dependencies` resource: per-project dependency declarations.
    pub fn dependencies() -> Self {
        Self::named(ScriptName::Dependencies)
    }

    /// The `version` resource: the framework version property.
    pub fn version() -> Self {
        Self::named(ScriptName::Version)
    }

    /// The `recommended` resource: recommended model-compiler settings.
    pub fn recommended() -> Self {
        Self::named(ScriptName::Recommended)
    }

    pub fn name(&self) -> ScriptName {
        self.name
    }

    pub fn file_name(&self) -> String {
        self.name.file_name()
    }

    pub fn contents(&self) -> &str {
        self.contents
    }

    /// Merges this resource's payload into `project`.
    pub fn apply_to(&self, project: &BuildProject) -> Result<()> {
        match self.name {
            ScriptName::Dependencies => {
                let declarations: DependencyDeclarations = self.parse()?;
                let value = serde_json::to_value(&declarations)
                    .map_err(|err| BootstrapError::InvalidDeclarations(err.to_string()))?;
                project.properties().set(DEPS_PROPERTY, value);
            }
            ScriptName::Version => {
                let declaration: VersionDeclaration = self.parse()?;
                project
                    .properties()
                    .set(VERSION_PROPERTY, declaration.version.into());
            }
            ScriptName::Recommended => {
                let settings: RecommendedSettings = self.parse()?;
                let existing = {
                    let extensions = project.extensions();
                    extensions
                        .contains(MODEL_COMPILER_EXTENSION)
                        .then(|| extensions.get::<ModelCompilerOptions>(MODEL_COMPILER_EXTENSION))
                };
                match existing {
                    Some(options) => {
                        *options?.borrow_mut() = settings.model_compiler;
                    }
                    None => {
                        project
                            .extensions()
                            .add(MODEL_COMPILER_EXTENSION, settings.model_compiler)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn parse<T: for<'de> Deserialize<'de>>(&self) -> Result<T> {
        toml::from_str(self.contents).map_err(|source| BootstrapError::MalformedResource {
            name: self.file_name(),
            source,
        })
    }
}

#[derive(Debug, Deserialize)]
struct VersionDeclaration {
    version: String,
}

#[derive(Debug, Deserialize)]
struct RecommendedSettings {
    #[serde(default, rename = "modelCompiler")]
    model_compiler: ModelCompilerOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Ext;

    #[test]
    fn resources_resolve_by_name_and_extension() {
        assert_eq!(ScriptName::Dependencies.file_name(), "dependencies.toml");
        assert_eq!(ScriptName::Version.file_name(), "version.toml");
        assert_eq!(ScriptName::Recommended.file_name(), "recommended.toml");
    }

    #[test]
    fn dependencies_script_installs_declarations() {
        let project = BuildProject::new("app", "/tmp/app");
        PluginScript::dependencies().apply_to(&project).unwrap();

        let artifacts = Ext::of(&project).grpc_artifacts().unwrap();
        assert!(!artifacts.is_empty());
        assert!(artifacts.iter().all(|a| a.group() == "io.grpc"));
    }

    #[test]
    fn version_script_sets_the_version_property() {
        let project = BuildProject::new("app", "/tmp/app");
        PluginScript::version().apply_to(&project).unwrap();
        assert_eq!(Ext::of(&project).version().unwrap(), "1.4.0");
    }

    #[test]
    fn recommended_script_installs_model_compiler_options() {
        let project = BuildProject::new("app", "/tmp/app");
        PluginScript::recommended().apply_to(&project).unwrap();

        let options = project
            .extensions()
            .get::<ModelCompilerOptions>(MODEL_COMPILER_EXTENSION)
            .unwrap();
        assert!(options.borrow().generate_validating_builders);
    }
}
