//! # keel-bootstrap
//!
//! Bootstraps Protobuf and gRPC code generation for Keel projects.
//!
//! The crate translates three user-facing feature toggles into configuration
//! of an explicit build-model context (see `keel-build`): it switches named
//! `protoc` add-ons on code-generation tasks, registers dependency
//! coordinates, and marks generated-source directories as compiler inputs.
//! It never invokes the compiler itself.
//!
//! ## Quick start
//!
//! ```
//! use keel_build::{BuildProject, CodegenConfigurator};
//! use keel_bootstrap::KeelBootstrapPlugin;
//!
//! let project = BuildProject::new("server", "/work/server");
//! let keel = KeelBootstrapPlugin::apply(&project).unwrap();
//!
//! // Turn gRPC stub generation on; the change is deferred until the
//! // Protobuf build plugin is applied.
//! keel.borrow_mut().java_mut().set_grpc(true).unwrap();
//!
//! let configurator = CodegenConfigurator::install(&project).unwrap();
//! configurator.borrow_mut().tasks_mut().create("generateProto");
//! assert!(configurator
//!     .borrow()
//!     .tasks()
//!     .find("generateProto")
//!     .unwrap()
//!     .plugins()
//!     .contains("grpc"));
//! ```

pub mod codegen;
pub mod compiler;
pub mod config;
pub mod error;
pub mod extension;
pub mod generator;
pub mod modules;
pub mod plugin;
pub mod protoc;
pub mod scripts;
pub mod sources;

pub use codegen::JavaCodegen;
pub use compiler::{ModelCompilerOptions, MODEL_COMPILER_EXTENSION, MODEL_COMPILER_TASKS};
pub use config::{DependencyDeclarations, Ext, DEPS_PROPERTY, VERSION_PROPERTY};
pub use error::{BootstrapError, Result};
pub use extension::{KeelExtension, KEEL_EXTENSION};
pub use generator::ProtobufGenerator;
pub use modules::KeelModule;
pub use plugin::KeelBootstrapPlugin;
pub use protoc::{PluginName, ProtocPlugin};
pub use scripts::{PluginScript, ScriptName};
pub use sources::{GeneratedSourceRoot, GeneratedSourceSet, SourceLayout, GENERATED_ROOT_DIR};
