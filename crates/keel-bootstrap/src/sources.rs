//! Layout of generated sources and their registration as compiler inputs.

use std::path::{Path, PathBuf};

use keel_build::BuildProject;

/// Directory under the project root that receives generated code.
pub const GENERATED_ROOT_DIR: &str = "generated";

/// The root of all generated sources in one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSourceRoot {
    path: PathBuf,
}

impl GeneratedSourceRoot {
    pub fn of(project: &BuildProject) -> Self {
        Self {
            path: project.dir(GENERATED_ROOT_DIR),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The generated-source scope of one source set.
    pub fn source_set(&self, name: &str) -> GeneratedSourceSet {
        GeneratedSourceSet {
            path: self.path.join(name),
        }
    }
}

/// Generated sources of one source set: three sub-paths, one per flavor of
/// generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSourceSet {
    path: PathBuf,
}

impl GeneratedSourceSet {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Plain `protoc` output.
    pub fn java(&self) -> PathBuf {
        self.path.join("java")
    }

    /// Output of the Keel compiler plugin.
    pub fn keel(&self) -> PathBuf {
        self.path.join("keel")
    }

    /// gRPC stubs.
    pub fn grpc(&self) -> PathBuf {
        self.path.join("grpc")
    }
}

/// Registers generated-source directories on the project's source sets.
pub struct SourceLayout {
    project: BuildProject,
}

impl SourceLayout {
    pub fn of(project: &BuildProject) -> Self {
        Self {
            project: project.clone(),
        }
    }

    /// Marks `root` as the code-generation root: every source set receives
    /// the three generated sub-paths of its own scope as source roots.
    pub fn mark_codegen_root(&self, root: &GeneratedSourceRoot) {
        let mut source_sets = self.project.source_sets();
        for source_set in source_sets.iter_mut() {
            let scope = root.source_set(source_set.name());
            source_set.add_src_dirs([scope.java(), scope.keel(), scope.grpc()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_paths_nest_under_the_generated_root() {
        let project = BuildProject::new("app", "/work/app");
        let root = GeneratedSourceRoot::of(&project);
        let main = root.source_set("main");

        assert_eq!(main.java(), PathBuf::from("/work/app/generated/main/java"));
        assert_eq!(main.keel(), PathBuf::from("/work/app/generated/main/keel"));
        assert_eq!(main.grpc(), PathBuf::from("/work/app/generated/main/grpc"));
    }

    #[test]
    fn marking_registers_dirs_on_every_source_set() {
        let project = BuildProject::new("app", "/work/app");
        project.source_sets().create("main");
        project.source_sets().create("test");

        let root = GeneratedSourceRoot::of(&project);
        SourceLayout::of(&project).mark_codegen_root(&root);

        let source_sets = project.source_sets();
        for name in ["main", "test"] {
            let source_set = source_sets.find(name).unwrap();
            assert_eq!(source_set.src_dirs().len(), 3);
            assert!(source_set.has_src_dir(root.source_set(name).grpc()));
        }
    }
}
