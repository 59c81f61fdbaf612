//! Application of the bootstrap to a project.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use keel_build::BuildProject;

use crate::error::Result;
use crate::extension::{KeelExtension, KEEL_EXTENSION};
use crate::scripts::PluginScript;

/// Entry point: wires the bootstrap into a build project.
pub struct KeelBootstrapPlugin;

impl KeelBootstrapPlugin {
    /// Applies the bundled configuration resources and registers the `keel`
    /// extension.
    ///
    /// Applying twice to the same project is an error: the extension name
    /// identifies exactly one settings object.
    pub fn apply(project: &BuildProject) -> Result<Rc<RefCell<KeelExtension>>> {
        debug!("Applying the Keel bootstrap to project `{}`.", project.name());
        PluginScript::dependencies().apply_to(project)?;
        PluginScript::version().apply_to(project)?;
        PluginScript::recommended().apply_to(project)?;

        let extension = KeelExtension::new(project);
        let handle = project.extensions().add(KEEL_EXTENSION, extension)?;
        Ok(handle)
    }
}
