//! Lint trait for manifest validation.

use foamj_model::Manifest;

use crate::pipeline::Diagnostic;

/// A lint that checks the manifest for issues.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the manifest and add any diagnostics.
    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>);
}
