//! Settings of the pre-existing Keel model-compiler plugin.

use serde::{Deserialize, Serialize};

/// Extension name the model-compiler settings are registered under.
pub const MODEL_COMPILER_EXTENSION: &str = "modelCompiler";

/// The four model-compiler tasks whose enabled state follows the `keel`
/// code-generation flag.
pub const MODEL_COMPILER_TASKS: [&str; 4] = [
    "generateRejections",
    "generateTestRejections",
    "generateValidatingBuilders",
    "generateTestValidatingBuilders",
];

/// Settings object of the model-compiler plugin.
///
/// The bootstrap only ever flips `generate_validating_builders`; the rest of
/// the model-compiler configuration is owned by that plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCompilerOptions {
    #[serde(default = "default_true", rename = "generateValidatingBuilders")]
    pub generate_validating_builders: bool,
}

impl Default for ModelCompilerOptions {
    fn default() -> Self {
        Self {
            generate_validating_builders: true,
        }
    }
}

fn default_true() -> bool {
    true
}
