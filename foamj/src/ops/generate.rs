//! Generate operation - Java sources from the manifest.

use std::path::Path;

use eyre::{Context, Result, bail};
use foamj_codegen::{Generator, pipeline::Pipeline};
use foamj_core::Overwrite;
use foamj_model::Manifest;
use tracing::info;

use crate::reports::{GenerateReport, GenerationOutcome};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    pub output_dir: &'a Path,
    /// Preview without writing files
    pub dry_run: bool,
    /// Restrict generation to one class
    pub class: Option<&'a str>,
    pub overwrite: Overwrite,
}

/// Execute the generate operation.
///
/// Validates the manifest first; lint errors stop generation.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let ctx = Pipeline::new()
        .run(manifest.clone())
        .wrap_err("Validation failed")?;
    let warnings = ctx.warnings().map(|d| d.to_string()).collect();

    let generator = Generator::new(manifest).with_overwrite(opts.overwrite);
    let mut files = generator.preview()?;
    if let Some(name) = opts.class {
        let Some(cls) = manifest.class(name) else {
            bail!("class '{}' not found in manifest", name);
        };
        let qualified = cls.qualified_name();
        files.retain(|f| f.class == qualified);
    }

    let outcome = if opts.dry_run {
        GenerationOutcome::Preview { files }
    } else {
        let result = generator
            .write(files, opts.output_dir)
            .wrap_err("Failed to generate code")?;
        info!(
            written = result.written.len(),
            skipped = result.skipped.len(),
            "generation finished"
        );
        GenerationOutcome::Written {
            output_dir: opts.output_dir.to_path_buf(),
            written: result.written,
            skipped: result.skipped,
        }
    };

    Ok(GenerateReport {
        project_name: manifest.project.name.clone(),
        warnings,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> Manifest {
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
        name = "Address"

        [[classes.properties]]
        name = "street"
        type = "String"
        "#
        .parse()
        .expect("Failed to parse test manifest")
    }

    #[test]
    fn test_generate_single_class() {
        let manifest = manifest();
        let dir = tempfile::tempdir().unwrap();

        let report = generate(
            &manifest,
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: false,
                class: Some("com.example.Address"),
                overwrite: Overwrite::Always,
            },
        )
        .unwrap();

        let GenerationOutcome::Written { written, .. } = report.outcome else {
            panic!("expected written outcome");
        };
        assert_eq!(written, [dir.path().join("com/example/Address.java")]);
        assert!(!dir.path().join("com/example/Person.java").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let manifest = manifest();
        let dir = tempfile::tempdir().unwrap();

        let report = generate(
            &manifest,
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: true,
                class: None,
                overwrite: Overwrite::Always,
            },
        )
        .unwrap();

        let GenerationOutcome::Preview { files } = report.outcome else {
            panic!("expected preview outcome");
        };
        assert_eq!(files.len(), 2);
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_unknown_class() {
        let manifest = manifest();
        let result = generate(
            &manifest,
            GenerateOptions {
                output_dir: Path::new("unused"),
                dry_run: true,
                class: Some("Nobody"),
                overwrite: Overwrite::Always,
            },
        );
        assert!(result.is_err());
    }
}
