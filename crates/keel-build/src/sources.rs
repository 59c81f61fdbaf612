//! Source sets and their additional source roots.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// One named compilation unit (`main`, `test`, ...).
#[derive(Debug, Clone)]
pub struct SourceSet {
    name: String,
    src_dirs: Vec<PathBuf>,
}

impl SourceSet {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            src_dirs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers additional source roots; duplicates are collapsed.
    pub fn add_src_dirs(&mut self, dirs: impl IntoIterator<Item = PathBuf>) {
        for dir in dirs {
            if !self.src_dirs.contains(&dir) {
                self.src_dirs.push(dir);
            }
        }
    }

    pub fn src_dirs(&self) -> &[PathBuf] {
        &self.src_dirs
    }

    pub fn has_src_dir(&self, dir: impl AsRef<Path>) -> bool {
        self.src_dirs.iter().any(|d| d == dir.as_ref())
    }
}

#[derive(Default)]
pub struct SourceSetContainer {
    sets: IndexMap<String, SourceSet>,
}

impl SourceSetContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the source set if absent and returns it.
    pub fn create(&mut self, name: &str) -> &mut SourceSet {
        self.sets
            .entry(name.to_owned())
            .or_insert_with(|| SourceSet::new(name))
    }

    pub fn find(&self, name: &str) -> Option<&SourceSet> {
        self.sets.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceSet> {
        self.sets.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SourceSet> {
        self.sets.values_mut()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_src_dirs_collapse() {
        let mut sets = SourceSetContainer::new();
        let main = sets.create("main");
        main.add_src_dirs([PathBuf::from("generated/main/java")]);
        main.add_src_dirs([PathBuf::from("generated/main/java")]);
        assert_eq!(main.src_dirs().len(), 1);
    }
}
