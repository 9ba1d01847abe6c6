//! Lint for classes generated twice.

use std::collections::HashMap;

use foamj_model::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when two classes share a qualified name.
///
/// Both would be written to the same `.java` file.
pub struct DuplicateClassLint;

impl Lint for DuplicateClassLint {
    fn name(&self) -> &'static str {
        "duplicate-class"
    }

    fn description(&self) -> &'static str {
        "Detect classes declared more than once"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (index, cls) in manifest.classes.iter().enumerate() {
            let qualified = cls.qualified_name();
            if let Some(first) = seen.get(&qualified) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "duplicate class '{}' (first declared as classes[{}])",
                            qualified, first
                        ),
                    )
                    .at(format!("classes.{}", cls.name)),
                );
            } else {
                seen.insert(qualified, index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_manifest(content: &str) -> Manifest {
        toml::from_str(content).expect("Failed to parse test manifest")
    }

    #[test]
    fn test_same_name_in_different_packages() {
        let manifest = parse_manifest(
            r#"
            [project]
            name = "demo"
            package = "com.example"

            [[classes]]
            name = "Person"
            package = "com.example.a"

            [[classes]]
            name = "Person"
            package = "com.example.b"
        "#,
        );

        let mut diagnostics = Vec::new();
        DuplicateClassLint.check(&manifest, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_class() {
        let manifest = parse_manifest(
            r#"
            [project]
            name = "demo"
            package = "com.example"

            [[classes]]
            name = "Person"
            package = "com.example"

            [[classes]]
            name = "Person"
            package = "com.example"
        "#,
        );

        let mut diagnostics = Vec::new();
        DuplicateClassLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(
            diagnostics[0].message,
            "duplicate class 'com.example.Person' (first declared as classes[0])"
        );
    }
}
