//! Facade for Protobuf build plugin configuration.

use tracing::debug;

use keel_build::{BuildProject, CodegenConfigurator, PROTOBUF_PLUGIN_ID};

use crate::error::{BootstrapError, Result};
use crate::protoc::ProtocPlugin;

/// Configures the `protoc` built-ins and plugins used for code generation.
///
/// Every operation defers until the Protobuf build plugin is applied to the
/// project: if it already is, the operation runs immediately, otherwise it
/// fires exactly once on application. When it runs, it visits every
/// code-generation task — current and future — and mutates the selected
/// add-on collection.
pub struct ProtobufGenerator {
    project: BuildProject,
}

impl ProtobufGenerator {
    pub fn new(project: &BuildProject) -> Self {
        Self {
            project: project.clone(),
        }
    }

    /// Enables code generation with the given `protoc` built-in.
    pub fn enable_built_in(&self, built_in: &ProtocPlugin) {
        self.switch(built_in.clone(), Collection::BuiltIns, Switch::On);
    }

    /// Disables code generation with the given `protoc` built-in.
    pub fn disable_built_in(&self, built_in: &ProtocPlugin) {
        self.switch(built_in.clone(), Collection::BuiltIns, Switch::Off);
    }

    /// Enables code generation with the given `protoc` plugin.
    pub fn enable_plugin(&self, plugin: &ProtocPlugin) {
        self.switch(plugin.clone(), Collection::Plugins, Switch::On);
    }

    /// Disables code generation with the given `protoc` plugin.
    pub fn disable_plugin(&self, plugin: &ProtocPlugin) {
        self.switch(plugin.clone(), Collection::Plugins, Switch::Off);
    }

    /// Specifies the Protobuf compiler artifact to generate code with.
    ///
    /// A blank specification is a precondition violation: the error is
    /// returned before any action is registered.
    pub fn use_compiler(&self, artifact_spec: &str) -> Result<()> {
        if artifact_spec.trim().is_empty() {
            return Err(BootstrapError::BlankArtifact);
        }
        let artifact_spec = artifact_spec.to_owned();
        self.with_protobuf_plugin(move |configurator| {
            configurator.protoc_mut().set_artifact(artifact_spec);
        });
        Ok(())
    }

    fn switch(&self, plugin: ProtocPlugin, collection: Collection, switch: Switch) {
        self.with_protobuf_plugin(move |configurator| {
            configurator.tasks_mut().all(move |task| {
                let entries = match collection {
                    Collection::BuiltIns => task.builtins_mut(),
                    Collection::Plugins => task.plugins_mut(),
                };
                match switch {
                    Switch::On => plugin.create_in(entries),
                    Switch::Off => plugin.remove_from(entries),
                }
            });
        });
    }

    fn with_protobuf_plugin(&self, action: impl FnOnce(&mut CodegenConfigurator) + 'static) {
        self.project.with_plugin(PROTOBUF_PLUGIN_ID, move |project| {
            let configurator = project.extensions().by_type::<CodegenConfigurator>();
            match configurator {
                Some(configurator) => action(&mut configurator.borrow_mut()),
                None => debug!(
                    "Plugin `{PROTOBUF_PLUGIN_ID}` is applied but no codegen configurator \
                     is registered; skipping."
                ),
            }
        });
    }
}

#[derive(Clone, Copy)]
enum Collection {
    BuiltIns,
    Plugins,
}

#[derive(Clone, Copy)]
enum Switch {
    On,
    Off,
}
