//! Check operation - manifest validation.

use std::path::Path;

use foamj_codegen::pipeline::{CompilationContext, Phase, phases::ValidatePhase};
use foamj_model::Manifest;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs every lint and keeps all diagnostics, including errors, so they can
/// be reported together.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let validate = ValidatePhase::new();
    let mut ctx = CompilationContext::new(manifest.clone());
    // The phase fails when errors were found; they are already in `ctx`.
    let _ = validate.run(&mut ctx);

    CheckReport {
        config_path: config_path.to_path_buf(),
        class_count: manifest.classes.len(),
        property_count: manifest.property_count(),
        lints: validate.lint_names(),
        diagnostics: ctx.diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(src: &str) -> Manifest {
        src.parse().expect("Failed to parse test manifest")
    }

    #[test]
    fn test_check_keeps_errors_and_warnings() {
        let manifest = manifest(
            r#"
            [project]
            name = "demo"
            package = "com.example"

            [[classes]]
            name = "Person"

            [[classes.properties]]
            name = "age"
            type = "Int"

            [[classes.properties]]
            name = "age"
            type = "Int"

            [[classes]]
            name = "Marker"
        "#,
        );

        let report = check(&manifest, Path::new("foam.toml"));
        assert!(!report.is_valid());
        assert_eq!(report.diagnostics.len(), 2);
        assert_eq!(report.property_count, 2);
        assert!(report.lints.contains(&"name-collision"));
    }
}
