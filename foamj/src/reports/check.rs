//! Check command report data structures.

use std::path::PathBuf;

use foamj_codegen::pipeline::Diagnostic;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub class_count: usize,
    pub property_count: usize,
    /// Names of the lints that ran
    pub lints: Vec<&'static str>,
    /// Every lint result, in lint order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            let mut msg = format!("{}: {}", diag.severity, diag.message);
            if let Some(loc) = &diag.location {
                msg.push_str(&format!("\n  --> {}", loc));
            }
            out.warning(&msg);
        }

        if !self.is_valid() {
            return;
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.preformatted(&format!(
            "  {} class{}, {} propert{}",
            self.class_count,
            if self.class_count == 1 { "" } else { "es" },
            self.property_count,
            if self.property_count == 1 { "y" } else { "ies" },
        ));
        out.preformatted(&format!(
            "  checked by {} lints: {}",
            self.lints.len(),
            self.lints.join(", ")
        ));
    }
}
