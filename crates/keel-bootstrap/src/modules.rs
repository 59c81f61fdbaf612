//! Coordinates of the Keel framework modules.

use keel_build::Artifact;

const KEEL_GROUP: &str = "io.keel";
const KEEL_PREFIX: &str = "keel-";

/// The framework modules a bootstrapped project may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeelModule {
    Base,
    Client,
    Server,
}

impl KeelModule {
    pub fn short_name(&self) -> &'static str {
        match self {
            KeelModule::Base => "base",
            KeelModule::Client => "client",
            KeelModule::Server => "server",
        }
    }

    fn notation(&self) -> String {
        format!("{KEEL_PREFIX}{}", self.short_name())
    }

    /// Compiles the artifact coordinate of this module at `version`.
    pub fn with_version(&self, version: &str) -> Artifact {
        Artifact::new(KEEL_GROUP, self.notation(), version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_names_carry_the_framework_prefix() {
        let artifact = KeelModule::Server.with_version("1.4.0");
        assert_eq!(artifact.notation(), "io.keel:keel-server:1.4.0");
    }
}
