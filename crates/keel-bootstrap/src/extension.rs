//! The root `keel` settings object.

use keel_build::BuildProject;

use crate::codegen::JavaCodegen;
use crate::config::Ext;
use crate::error::Result;
use crate::generator::ProtobufGenerator;
use crate::modules::KeelModule;
use crate::protoc::{PluginName, ProtocPlugin};
use crate::sources::{GeneratedSourceRoot, SourceLayout};

/// Name of the extension in the project's configuration namespace.
pub const KEEL_EXTENSION: &str = "keel";

/// The user-facing settings object of the bootstrap.
///
/// Exposes the nested Java code-generation toggles, the compiler coordinate,
/// the framework version, and the model-module declaration.
pub struct KeelExtension {
    project: BuildProject,
    generator: ProtobufGenerator,
    java: JavaCodegen,
}

impl KeelExtension {
    pub fn new(project: &BuildProject) -> Self {
        Self {
            project: project.clone(),
            generator: ProtobufGenerator::new(project),
            java: JavaCodegen::new(project),
        }
    }

    /// The nested Java code-generation settings.
    pub fn java(&self) -> &JavaCodegen {
        &self.java
    }

    pub fn java_mut(&mut self) -> &mut JavaCodegen {
        &mut self.java
    }

    /// Specifies the Protobuf compiler artifact to use.
    pub fn use_protoc(&self, artifact_spec: &str) -> Result<()> {
        self.generator.use_compiler(artifact_spec)
    }

    /// The framework version contributed by the bundled `version` resource.
    pub fn version(&self) -> Result<String> {
        Ext::of(&self.project).version()
    }

    /// Adds a framework module to the implementation dependencies, at the
    /// version contributed by the bundled `version` resource.
    pub fn depend_on(&self, module: KeelModule) -> Result<()> {
        let version = self.version()?;
        self.project
            .dependencies()
            .implementation(module.with_version(&version));
        Ok(())
    }

    /// Declares this project as one containing the Protobuf model.
    ///
    /// Enables plain code generation and registers the generated-source
    /// directories as compiler inputs on every source set.
    pub fn declare_model(&self) {
        self.generator
            .enable_built_in(&ProtocPlugin::called(PluginName::Java));
        let root = GeneratedSourceRoot::of(&self.project);
        SourceLayout::of(&self.project).mark_codegen_root(&root);
    }
}
