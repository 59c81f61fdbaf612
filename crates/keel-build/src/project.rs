//! The build project: the configuration context passed to every operation.

use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::deps::DependencyContainer;
use crate::extensions::ExtensionContainer;
use crate::plugins::PluginManager;
use crate::sources::SourceSetContainer;
use crate::tasks::TaskContainer;

/// String-keyed ad-hoc properties attached to a project.
///
/// Bundled configuration resources store their payload here as JSON values;
/// typed views live with the consumers.
#[derive(Default)]
pub struct ExtraProperties {
    values: IndexMap<String, Value>,
}

impl ExtraProperties {
    pub fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_owned(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

struct ProjectState {
    name: String,
    root_dir: PathBuf,
    extensions: ExtensionContainer,
    plugins: PluginManager,
    tasks: TaskContainer,
    dependencies: DependencyContainer,
    source_sets: SourceSetContainer,
    properties: ExtraProperties,
}

/// Cloneable handle over one project's configuration state.
///
/// The configuration phase is single-threaded, so the handle is `Rc`-based.
/// Accessors hand out short-lived `RefMut` guards over one registry at a
/// time; a guard must be dropped before touching another part of the project
/// through the same handle.
#[derive(Clone)]
pub struct BuildProject {
    state: Rc<RefCell<ProjectState>>,
}

impl BuildProject {
    pub fn new(name: impl Into<String>, root_dir: impl Into<PathBuf>) -> Self {
        Self {
            state: Rc::new(RefCell::new(ProjectState {
                name: name.into(),
                root_dir: root_dir.into(),
                extensions: ExtensionContainer::new(),
                plugins: PluginManager::new(),
                tasks: TaskContainer::new(),
                dependencies: DependencyContainer::new(),
                source_sets: SourceSetContainer::new(),
                properties: ExtraProperties::default(),
            })),
        }
    }

    pub fn name(&self) -> String {
        self.state.borrow().name.clone()
    }

    pub fn root_dir(&self) -> PathBuf {
        self.state.borrow().root_dir.clone()
    }

    pub fn dir(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.state.borrow().root_dir.join(relative)
    }

    pub fn extensions(&self) -> RefMut<'_, ExtensionContainer> {
        RefMut::map(self.state.borrow_mut(), |s| &mut s.extensions)
    }

    pub fn plugins(&self) -> RefMut<'_, PluginManager> {
        RefMut::map(self.state.borrow_mut(), |s| &mut s.plugins)
    }

    pub fn tasks(&self) -> RefMut<'_, TaskContainer> {
        RefMut::map(self.state.borrow_mut(), |s| &mut s.tasks)
    }

    pub fn dependencies(&self) -> RefMut<'_, DependencyContainer> {
        RefMut::map(self.state.borrow_mut(), |s| &mut s.dependencies)
    }

    pub fn source_sets(&self) -> RefMut<'_, SourceSetContainer> {
        RefMut::map(self.state.borrow_mut(), |s| &mut s.source_sets)
    }

    pub fn properties(&self) -> RefMut<'_, ExtraProperties> {
        RefMut::map(self.state.borrow_mut(), |s| &mut s.properties)
    }

    pub fn has_plugin(&self, id: &str) -> bool {
        self.state.borrow().plugins.is_applied(id)
    }

    /// Runs `action` once the plugin `id` is applied.
    ///
    /// If the plugin is already applied the action runs immediately;
    /// otherwise it is registered and fires exactly once on application.
    pub fn with_plugin<F>(&self, id: &str, action: F)
    where
        F: FnOnce(&BuildProject) + 'static,
    {
        if self.has_plugin(id) {
            action(self);
        } else {
            self.plugins().register(id, Box::new(action));
        }
    }

    /// Marks the plugin `id` as applied and fires its pending callbacks.
    ///
    /// The pending callbacks are drained before any of them runs, so a
    /// callback is free to access the project.
    pub fn apply_plugin(&self, id: &str) {
        let pending = self.plugins().mark_applied(id);
        for callback in pending {
            callback(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn properties_round_trip() {
        let project = BuildProject::new("app", "/tmp/app");
        project.properties().set("keelVersion", json!("1.4.0"));
        assert_eq!(
            project.properties().get("keelVersion"),
            Some(&json!("1.4.0"))
        );
    }

    #[test]
    fn dir_resolves_against_the_project_root() {
        let project = BuildProject::new("app", "/work/app");
        assert_eq!(project.dir("generated"), PathBuf::from("/work/app/generated"));
    }
}
