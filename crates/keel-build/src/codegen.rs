//! The code-generation configurator contributed by the Protobuf build plugin.
//!
//! The host applies the plugin identified by [`PROTOBUF_PLUGIN_ID`], which
//! installs a [`CodegenConfigurator`] into the project's extension container.
//! The configurator owns every code-generation task and the compiler locator.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::error::Result;
use crate::project::BuildProject;

/// Identifier of the Protobuf build plugin within the plugin manager.
pub const PROTOBUF_PLUGIN_ID: &str = "protobuf-codegen";

/// Extension name under which the configurator is registered.
pub const CONFIGURATOR_NAME: &str = "protobuf";

/// One named compiler add-on entry on a code-generation task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginOptions {
    name: String,
    options: Vec<String>,
}

impl PluginOptions {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            options: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attaches a configuration option; attaching the same option twice
    /// keeps a single occurrence.
    pub fn option(&mut self, option: &str) {
        if !self.options.iter().any(|o| o == option) {
            self.options.push(option.to_owned());
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

/// A named collection of add-on entries.
///
/// At most one entry per name exists at any time: additions go through
/// [`maybe_create`](Self::maybe_create) and removals match by name.
#[derive(Debug, Default, Clone)]
pub struct PluginOptionsContainer {
    entries: Vec<PluginOptions>,
}

impl PluginOptionsContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry named `name`, creating it first when absent.
    pub fn maybe_create(&mut self, name: &str) -> &mut PluginOptions {
        let position = self.entries.iter().position(|entry| entry.name() == name);
        let index = match position {
            Some(index) => index,
            None => {
                self.entries.push(PluginOptions::new(name));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index]
    }

    /// Removes any entry named `name`; absence is not an error.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|entry| entry.name() != name);
    }

    pub fn find(&self, name: &str) -> Option<&PluginOptions> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PluginOptions> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A task that invokes the Protobuf compiler for one compilation unit.
pub struct CodegenTask {
    name: String,
    enabled: bool,
    builtins: PluginOptionsContainer,
    plugins: PluginOptionsContainer,
}

impl CodegenTask {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            enabled: true,
            builtins: PluginOptionsContainer::new(),
            plugins: PluginOptionsContainer::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Compiler built-ins (`java`, `js`, ...).
    pub fn builtins(&self) -> &PluginOptionsContainer {
        &self.builtins
    }

    pub fn builtins_mut(&mut self) -> &mut PluginOptionsContainer {
        &mut self.builtins
    }

    /// External compiler plugins (`grpc`, `keel`, ...).
    pub fn plugins(&self) -> &PluginOptionsContainer {
        &self.plugins
    }

    pub fn plugins_mut(&mut self) -> &mut PluginOptionsContainer {
        &mut self.plugins
    }
}

type TaskAction = Box<dyn Fn(&mut CodegenTask)>;

/// The collection of code-generation tasks.
///
/// [`all`](Self::all) follows the host's live-collection semantics: the
/// action is applied to every existing task and retained for every task
/// created afterwards.
#[derive(Default)]
pub struct CodegenTasks {
    tasks: IndexMap<String, CodegenTask>,
    actions: Vec<TaskAction>,
}

impl CodegenTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the task if absent, applying all retained actions to it.
    pub fn create(&mut self, name: &str) -> &mut CodegenTask {
        match self.tasks.entry(name.to_owned()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let mut task = CodegenTask::new(name);
                for action in &self.actions {
                    action(&mut task);
                }
                entry.insert(task)
            }
        }
    }

    /// Applies `action` to every current task and to every future one.
    pub fn all(&mut self, action: impl Fn(&mut CodegenTask) + 'static) {
        for task in self.tasks.values_mut() {
            action(task);
        }
        self.actions.push(Box::new(action));
    }

    pub fn find(&self, name: &str) -> Option<&CodegenTask> {
        self.tasks.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodegenTask> {
        self.tasks.values()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Locator of the Protobuf compiler executable.
#[derive(Debug, Default, Clone)]
pub struct ExecutableLocator {
    artifact: Option<String>,
}

impl ExecutableLocator {
    pub fn set_artifact(&mut self, artifact: impl Into<String>) {
        self.artifact = Some(artifact.into());
    }

    pub fn artifact(&self) -> Option<&str> {
        self.artifact.as_deref()
    }
}

#[derive(Default)]
pub struct CodegenConfigurator {
    tasks: CodegenTasks,
    protoc: ExecutableLocator,
}

impl CodegenConfigurator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the configurator into `project` and marks the Protobuf build
    /// plugin as applied, firing any deferred callbacks.
    pub fn install(project: &BuildProject) -> Result<Rc<RefCell<Self>>> {
        let handle = project.extensions().add(CONFIGURATOR_NAME, Self::new())?;
        project.apply_plugin(PROTOBUF_PLUGIN_ID);
        Ok(handle)
    }

    pub fn tasks(&self) -> &CodegenTasks {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut CodegenTasks {
        &mut self.tasks
    }

    pub fn protoc(&self) -> &ExecutableLocator {
        &self.protoc
    }

    pub fn protoc_mut(&mut self) -> &mut ExecutableLocator {
        &mut self.protoc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maybe_create_is_idempotent() {
        let mut container = PluginOptionsContainer::new();
        container.maybe_create("grpc");
        container.maybe_create("grpc");
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn removing_an_absent_entry_is_a_no_op() {
        let mut container = PluginOptionsContainer::new();
        container.maybe_create("java");
        container.remove("grpc");
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn options_do_not_duplicate() {
        let mut container = PluginOptionsContainer::new();
        let entry = container.maybe_create("js");
        entry.option("library=keel");
        entry.option("library=keel");
        assert_eq!(entry.options(), ["library=keel"]);
    }

    #[test]
    fn all_configures_tasks_created_later() {
        let mut tasks = CodegenTasks::new();
        tasks.create("generateProto");
        tasks.all(|task| {
            task.plugins_mut().maybe_create("grpc");
        });
        tasks.create("generateTestProto");

        assert!(tasks.find("generateProto").unwrap().plugins().contains("grpc"));
        assert!(tasks
            .find("generateTestProto")
            .unwrap()
            .plugins()
            .contains("grpc"));
    }

    #[test]
    fn create_is_idempotent_per_name() {
        let mut tasks = CodegenTasks::new();
        tasks.create("generateProto");
        tasks.create("generateProto");
        assert_eq!(tasks.len(), 1);
    }
}
