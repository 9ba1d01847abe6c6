//! Lint for properties declared twice in one class.

use std::collections::HashSet;

use foamj_model::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on repeated property names.
///
/// A repeated name would emit two fields, accessors and constants with the
/// same identifiers, which does not compile.
pub struct DuplicatePropertyLint;

impl Lint for DuplicatePropertyLint {
    fn name(&self) -> &'static str {
        "duplicate-property"
    }

    fn description(&self) -> &'static str {
        "Detect properties declared more than once in a class"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for cls in &manifest.classes {
            let mut seen = HashSet::new();
            for prop in &cls.properties {
                if !seen.insert(prop.name.as_str()) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "duplicate property '{}' in class '{}'",
                                prop.name, cls.name
                            ),
                        )
                        .at(format!("classes.{}.properties.{}", cls.name, prop.name)),
                    );
                }
            }
        }
    }
}
