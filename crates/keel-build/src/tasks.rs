//! Plain build tasks addressed by name.

use indexmap::IndexMap;

/// A build task with an on/off switch.
///
/// Only the configuration-phase surface is modeled; task actions belong to
/// the host and are out of scope.
#[derive(Debug, Clone)]
pub struct Task {
    name: String,
    enabled: bool,
}

impl Task {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            enabled: true,
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
}

#[derive(Default)]
pub struct TaskContainer {
    tasks: IndexMap<String, Task>,
}

impl TaskContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the task if absent and returns it.
    pub fn create(&mut self, name: &str) -> &mut Task {
        self.tasks
            .entry(name.to_owned())
            .or_insert_with(|| Task::new(name))
    }

    /// Soft lookup: a missing task is `None`, never an error.
    pub fn find(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Task> {
        self.tasks.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_start_enabled() {
        let mut tasks = TaskContainer::new();
        tasks.create("generateRejections");
        assert!(tasks.find("generateRejections").unwrap().is_enabled());
    }

    #[test]
    fn missing_task_is_a_soft_lookup() {
        let tasks = TaskContainer::new();
        assert!(tasks.find("generateRejections").is_none());
    }
}
