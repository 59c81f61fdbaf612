//! Declared dependency coordinates, grouped by scope.

use indexmap::IndexMap;

use crate::artifact::Artifact;

/// The dependency scopes the bootstrap layer writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyScope {
    Implementation,
    TestImplementation,
    Protobuf,
}

#[derive(Default)]
pub struct DependencyContainer {
    scopes: IndexMap<DependencyScope, Vec<Artifact>>,
}

impl DependencyContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `artifact` in `scope`; re-declaring is a no-op.
    pub fn add(&mut self, scope: DependencyScope, artifact: Artifact) {
        let artifacts = self.scopes.entry(scope).or_default();
        if !artifacts.contains(&artifact) {
            artifacts.push(artifact);
        }
    }

    /// Shorthand for the most common scope.
    pub fn implementation(&mut self, artifact: Artifact) {
        self.add(DependencyScope::Implementation, artifact);
    }

    pub fn in_scope(&self, scope: DependencyScope) -> &[Artifact] {
        self.scopes.get(&scope).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, scope: DependencyScope, artifact: &Artifact) -> bool {
        self.in_scope(scope).contains(artifact)
    }
}
