//! Lint for property naming conventions.

use foamj_core::is_lower_camel_case;
use foamj_model::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about property names that aren't lowerCamelCase.
///
/// Accessor and constant names are derived from the property name, so
/// `first_name` would produce `getFirst_name()` and `FIRST_NAME`.
pub struct PropertyNamingLint;

impl Lint for PropertyNamingLint {
    fn name(&self) -> &'static str {
        "property-naming"
    }

    fn description(&self) -> &'static str {
        "Check property names follow lowerCamelCase conventions"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for cls in &manifest.classes {
            for prop in &cls.properties {
                if !is_lower_camel_case(&prop.name) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "property '{}' should use lowerCamelCase (e.g., 'firstName' not 'first_name' or 'FirstName')",
                                prop.name
                            ),
                        )
                        .at(format!("classes.{}.properties.{}", cls.name, prop.name)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_naming() {
        let manifest: Manifest = toml::from_str(
            r#"
            [project]
            name = "demo"
            package = "com.example"

            [[classes]]
            name = "Person"

            [[classes.properties]]
            name = "firstName"
            type = "String"

            [[classes.properties]]
            name = "last_name"
            type = "String"

            [[classes.properties]]
            name = "Age"
            type = "Int"
        "#,
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        PropertyNamingLint.check(&manifest, &mut diagnostics);

        let flagged: Vec<_> = diagnostics
            .iter()
            .filter_map(|d| d.location.as_deref())
            .collect();
        assert_eq!(
            flagged,
            [
                "classes.Person.properties.last_name",
                "classes.Person.properties.Age"
            ]
        );
        assert!(diagnostics.iter().all(|d| d.severity.is_warning()));
    }
}
