//! Manifest types and parsing for foam.toml files.

mod file;
mod parse;
mod project;
mod validate;

pub use file::FoamToml;
pub use project::{IndentSetting, ProjectConfig};
use serde::Deserialize;
pub use validate::ParseContext;

use crate::ClassModel;

/// Root manifest for foam.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project metadata and generator settings
    pub project: ProjectConfig,

    /// Class models, in declaration order
    #[serde(default)]
    pub classes: Vec<ClassModel>,
}

impl Manifest {
    /// Find a class by simple or fully qualified name.
    pub fn class(&self, name: &str) -> Option<&ClassModel> {
        self.classes
            .iter()
            .find(|c| c.name == name || c.qualified_name() == name)
    }

    /// Check if a class exists (simple or fully qualified name).
    pub fn has_class(&self, name: &str) -> bool {
        self.class(name).is_some()
    }

    /// Total number of properties across all classes.
    pub fn property_count(&self) -> usize {
        self.classes.iter().map(|c| c.properties.len()).sum()
    }
}
