//! Generator settings model
//!
//! The subset of generator settings that concerns pack layout, persisted as
//! a flat JSON file. The nested pack tree lives in a single string field in
//! its canonical encoding, so the same value round-trips between build-tool
//! and IDE settings storage unchanged.

use crate::model::IconPack;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_indent_size() -> usize {
    4
}

/// Pack-related generator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Package the generated accessors are emitted into
    pub package_name: String,

    /// Name of the top-level pack object
    pub pack_name: String,

    /// Nested pack tree, stored in canonical string form
    #[serde(default)]
    pub nested_packs: IconPack,

    /// Emit all accessors into a single flat package
    #[serde(default)]
    pub flat_package: bool,

    /// Indentation width for generated code
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,
}

impl GeneratorConfig {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
