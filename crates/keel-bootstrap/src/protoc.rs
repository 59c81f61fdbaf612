//! Descriptors for `protoc` built-ins and plugins.

use std::fmt;

use keel_build::PluginOptionsContainer;

/// The fixed vocabulary of compiler add-ons the bootstrap knows about.
///
/// The lowercase rendering of each variant is the entry name inside a
/// code-generation task's add-on collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginName {
    Java,
    Js,
    Grpc,
    Keel,
}

impl PluginName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginName::Java => "java",
            PluginName::Js => "js",
            PluginName::Grpc => "grpc",
            PluginName::Keel => "keel",
        }
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `protoc` add-on: a name plus an optional single configuration option.
///
/// The descriptor knows how to put itself into, and take itself out of, an
/// externally owned add-on collection; it holds no other state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocPlugin {
    name: PluginName,
    option: Option<String>,
}

impl ProtocPlugin {
    pub fn called(name: PluginName) -> Self {
        Self { name, option: None }
    }

    pub fn with_option(name: PluginName, option: impl Into<String>) -> Self {
        Self {
            name,
            option: Some(option.into()),
        }
    }

    pub fn name(&self) -> PluginName {
        self.name
    }

    /// Ensures an entry with this plugin's name exists in `collection`,
    /// attaching the option when one is present. Idempotent.
    pub fn create_in(&self, collection: &mut PluginOptionsContainer) {
        let entry = collection.maybe_create(self.name.as_str());
        if let Some(option) = &self.option {
            entry.option(option);
        }
    }

    /// Removes any same-named entry from `collection`; absence is a no-op.
    pub fn remove_from(&self, collection: &mut PluginOptionsContainer) {
        collection.remove(self.name.as_str());
    }
}
