//! Plugin application tracking with one-shot deferred callbacks.
//!
//! A callback registered for a plugin that is not yet applied stays pending
//! until [`BuildProject::apply_plugin`](crate::BuildProject::apply_plugin)
//! fires it. Each registration fires at most once; there is no cancellation,
//! because the configuration phase always runs to completion.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::project::BuildProject;

pub(crate) type PluginCallback = Box<dyn FnOnce(&BuildProject)>;

#[derive(Default)]
pub struct PluginManager {
    applied: IndexSet<String>,
    pending: IndexMap<String, Vec<PluginCallback>>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_applied(&self, id: &str) -> bool {
        self.applied.contains(id)
    }

    pub(crate) fn register(&mut self, id: &str, callback: PluginCallback) {
        debug!("Deferring an action until plugin `{id}` is applied.");
        self.pending.entry(id.to_owned()).or_default().push(callback);
    }

    /// Marks `id` as applied and drains its pending callbacks.
    ///
    /// Re-applying an already applied plugin yields no callbacks.
    pub(crate) fn mark_applied(&mut self, id: &str) -> Vec<PluginCallback> {
        if !self.applied.insert(id.to_owned()) {
            return Vec::new();
        }
        self.pending.shift_remove(id).unwrap_or_default()
    }

    /// Count of callbacks still waiting on `id`.
    pub fn pending_count(&self, id: &str) -> usize {
        self.pending.get(id).map(Vec::len).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::project::BuildProject;

    #[test]
    fn callback_before_application_stays_pending() {
        let project = BuildProject::new("app", "/tmp/app");
        let fired = Rc::new(Cell::new(0));
        let observed = fired.clone();
        project.with_plugin("some-plugin", move |_| observed.set(observed.get() + 1));

        assert_eq!(fired.get(), 0);
        assert_eq!(project.plugins().pending_count("some-plugin"), 1);

        project.apply_plugin("some-plugin");
        assert_eq!(fired.get(), 1);
        assert_eq!(project.plugins().pending_count("some-plugin"), 0);
    }

    #[test]
    fn callback_after_application_runs_immediately() {
        let project = BuildProject::new("app", "/tmp/app");
        project.apply_plugin("some-plugin");

        let fired = Rc::new(Cell::new(false));
        let observed = fired.clone();
        project.with_plugin("some-plugin", move |_| observed.set(true));
        assert!(fired.get());
    }

    #[test]
    fn reapplying_is_a_no_op() {
        let project = BuildProject::new("app", "/tmp/app");
        let fired = Rc::new(Cell::new(0));
        let observed = fired.clone();
        project.with_plugin("some-plugin", move |_| observed.set(observed.get() + 1));

        project.apply_plugin("some-plugin");
        project.apply_plugin("some-plugin");
        assert_eq!(fired.get(), 1);
    }
}
