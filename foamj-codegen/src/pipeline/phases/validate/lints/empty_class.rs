//! Lint for classes without properties.

use foamj_model::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when a concrete class declares no properties.
///
/// Abstract classes are skipped; they commonly exist only to be extended.
pub struct EmptyClassLint;

impl Lint for EmptyClassLint {
    fn name(&self) -> &'static str {
        "empty-class"
    }

    fn description(&self) -> &'static str {
        "Check that concrete classes declare at least one property"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for cls in &manifest.classes {
            if !cls.is_abstract && cls.properties.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("class '{}' has no properties", cls.name),
                    )
                    .at(format!("classes.{}", cls.name)),
                );
            }
        }
    }
}
