//! Generate command report data structures.

use std::path::{Path, PathBuf};

use foamj_codegen::GeneratedFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub project_name: String,
    /// Lint warnings, already formatted.
    pub warnings: Vec<String>,
    pub outcome: GenerationOutcome,
}

#[derive(Debug)]
pub enum GenerationOutcome {
    /// Files were written to disk.
    Written {
        output_dir: PathBuf,
        written: Vec<PathBuf>,
        skipped: Vec<PathBuf>,
    },
    /// Dry-run preview.
    Preview { files: Vec<GeneratedFile> },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.outcome {
            GenerationOutcome::Written {
                output_dir,
                written,
                skipped,
            } => {
                out.key_value("Generated", &output_dir.display().to_string());
                for path in written {
                    out.added_item(&relative(path, output_dir));
                }
                for path in skipped {
                    out.kept_item(&relative(path, output_dir));
                }
            }
            GenerationOutcome::Preview { files } => {
                for file in files {
                    out.divider(&file.path.display().to_string());
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} file{} would be generated for {}",
                    files.len(),
                    if files.len() == 1 { "" } else { "s" },
                    self.project_name
                ));
            }
        }
    }
}

fn relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}
