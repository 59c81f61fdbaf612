//! # keel-build
//!
//! Explicit build-model context for the Keel bootstrap tooling.
//!
//! This crate models the slice of a host build system that code-generation
//! bootstrapping needs to touch: a project with named extensions, a plugin
//! manager with one-shot deferred callbacks, task registries, dependency
//! buckets, source sets, and the code-generation configurator contributed by
//! the Protobuf build plugin. Nothing here performs I/O or runs a compiler —
//! the model stops at configuration state.
//!
//! All state hangs off a [`BuildProject`], a cheaply cloneable handle that is
//! passed explicitly to every mutating operation. The configuration phase is
//! single-threaded, so the handle is `Rc`-based and interior mutability is
//! plain `RefCell`.

pub mod artifact;
pub mod codegen;
pub mod deps;
pub mod error;
pub mod extensions;
pub mod plugins;
pub mod project;
pub mod sources;
pub mod tasks;

pub use artifact::Artifact;
pub use codegen::{
    CodegenConfigurator, CodegenTask, CodegenTasks, ExecutableLocator, PluginOptions,
    PluginOptionsContainer, CONFIGURATOR_NAME, PROTOBUF_PLUGIN_ID,
};
pub use deps::{DependencyContainer, DependencyScope};
pub use error::{BuildModelError, Result};
pub use extensions::ExtensionContainer;
pub use plugins::PluginManager;
pub use project::{BuildProject, ExtraProperties};
pub use sources::{SourceSet, SourceSetContainer};
pub use tasks::{Task, TaskContainer};
