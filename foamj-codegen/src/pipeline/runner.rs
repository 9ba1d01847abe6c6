//! Pipeline orchestrator.

use eyre::Result;
use foamj_model::Manifest;
use tracing::debug;

use super::{CompilationContext, Phase, phases::ValidatePhase};

/// Runs the checking phases over a manifest, in order.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new().run(manifest)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a pipeline with the validate phase and its default lints.
    pub fn new() -> Self {
        Self {
            phases: vec![Box::new(ValidatePhase::new())],
        }
    }

    /// Run every phase on a manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    #[tracing::instrument(skip_all, fields(project = %manifest.project.name))]
    pub fn run(&self, manifest: Manifest) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest);

        for phase in &self.phases {
            debug!(phase = phase.name(), "{}", phase.description());
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_manifest(content: &str) -> Manifest {
        toml::from_str(content).expect("Failed to parse test manifest")
    }

    #[test]
    fn test_pipeline_keeps_warnings() {
        let manifest = parse_manifest(
            r#"
            [project]
            name = "demo"
            package = "com.example"

            [[classes]]
            name = "Person"

            [[classes.properties]]
            name = "firstName"
            type = "String"

            [[classes]]
            name = "Marker"
        "#,
        );

        let ctx = Pipeline::new().run(manifest).expect("pipeline should succeed");
        assert_eq!(ctx.diagnostics.len(), 1);
        assert_eq!(
            ctx.diagnostics[0].location.as_deref(),
            Some("classes.Marker")
        );
    }

    #[test]
    fn test_validation_errors_fail_the_run() {
        let manifest = parse_manifest(
            r#"
            [project]
            name = "demo"
            package = "com.example"

            [[classes]]
            name = "Person"

            [[classes.properties]]
            name = "classInfo"
            type = "String"
        "#,
        );

        let err = Pipeline::new().run(manifest).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed with 1 error(s)");
    }
}
