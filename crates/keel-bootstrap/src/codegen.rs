//! The Java code-generation feature toggles.

use tracing::debug;

use keel_build::BuildProject;

use crate::compiler::{ModelCompilerOptions, MODEL_COMPILER_EXTENSION, MODEL_COMPILER_TASKS};
use crate::config::Ext;
use crate::error::Result;
use crate::generator::ProtobufGenerator;
use crate::protoc::{PluginName, ProtocPlugin};

/// Settings object which configures Java code generation.
///
/// Three independent flags, defaults `{ protobuf: true, grpc: false,
/// keel: true }`. Each setter is idempotent: setting the same value twice
/// yields the same end state.
pub struct JavaCodegen {
    project: BuildProject,
    generator: ProtobufGenerator,
    protobuf: bool,
    grpc: bool,
    keel: bool,
}

impl JavaCodegen {
    pub fn new(project: &BuildProject) -> Self {
        Self {
            project: project.clone(),
            generator: ProtobufGenerator::new(project),
            protobuf: true,
            grpc: false,
            keel: true,
        }
    }

    pub fn protobuf(&self) -> bool {
        self.protobuf
    }

    pub fn grpc(&self) -> bool {
        self.grpc
    }

    pub fn keel(&self) -> bool {
        self.keel
    }

    /// Enables or disables Protobuf to Java code generation.
    ///
    /// Enabled by default.
    pub fn set_protobuf(&mut self, enabled: bool) {
        self.protobuf = enabled;
        let java = ProtocPlugin::called(PluginName::Java);
        if enabled {
            self.generator.enable_built_in(&java);
        } else {
            self.generator.disable_built_in(&java);
        }
    }

    /// Enables or disables gRPC stub generation.
    ///
    /// Disabled by default. Enabling also registers the gRPC runtime
    /// artifacts from the project's dependency declarations.
    pub fn set_grpc(&mut self, enabled: bool) -> Result<()> {
        self.grpc = enabled;
        self.switch_plugin(ProtocPlugin::called(PluginName::Grpc), enabled);
        if enabled {
            self.add_grpc_dependencies()?;
        }
        Ok(())
    }

    /// Enables or disables Keel-specific code generation.
    ///
    /// Enabled by default. The flag also drives the model-compiler settings:
    /// validating builders follow the flag, and the four model-compiler
    /// tasks are switched with it where present.
    pub fn set_keel(&mut self, enabled: bool) -> Result<()> {
        self.keel = enabled;
        self.switch_plugin(ProtocPlugin::called(PluginName::Keel), enabled);

        let options = self
            .project
            .extensions()
            .get::<ModelCompilerOptions>(MODEL_COMPILER_EXTENSION)?;
        options.borrow_mut().generate_validating_builders = enabled;

        for task_name in MODEL_COMPILER_TASKS {
            self.update_model_compiler_task(task_name);
        }
        Ok(())
    }

    fn add_grpc_dependencies(&self) -> Result<()> {
        let artifacts = Ext::of(&self.project).grpc_artifacts()?;
        let mut dependencies = self.project.dependencies();
        for artifact in artifacts {
            dependencies.implementation(artifact);
        }
        Ok(())
    }

    fn update_model_compiler_task(&self, task_name: &str) {
        let enabled = self.keel;
        let found = {
            let mut tasks = self.project.tasks();
            match tasks.find_mut(task_name) {
                Some(task) => {
                    task.set_enabled(enabled);
                    true
                }
                None => false,
            }
        };
        if !found {
            debug!(
                "Task `{task_name}` not found in project `{}`.",
                self.project.name()
            );
        }
    }

    fn switch_plugin(&self, plugin: ProtocPlugin, enabled: bool) {
        if enabled {
            self.generator.enable_plugin(&plugin);
        } else {
            self.generator.disable_plugin(&plugin);
        }
    }
}
