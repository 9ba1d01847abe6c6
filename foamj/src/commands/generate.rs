use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use foamj_core::Overwrite;
use foamj_model::FoamToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to foam.toml (defaults to ./foam.toml)
    #[arg(short, long, default_value = "foam.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to [project].output, relative to foam.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Only generate the named class
    #[arg(long, value_name = "NAME")]
    pub class: Option<String>,

    /// Leave existing files untouched
    #[arg(long)]
    pub keep_existing: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let foam_toml = FoamToml::open(&self.config).unwrap_or_exit();
        let manifest = foam_toml.manifest();

        let output_dir = match &self.output {
            Some(dir) => dir.clone(),
            None => foam_toml.base_dir().join(manifest.project.output_dir()),
        };

        let report = ops::generate(
            manifest,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                class: self.class.as_deref(),
                overwrite: if self.keep_existing {
                    Overwrite::IfMissing
                } else {
                    Overwrite::Always
                },
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
