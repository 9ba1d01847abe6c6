use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use foamj_model::FoamToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to foam.toml (defaults to ./foam.toml)
    #[arg(short, long, default_value = "foam.toml")]
    pub config: PathBuf,

    /// Print diagnostics as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let foam_toml = FoamToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(foam_toml.manifest(), &self.config);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report.diagnostics)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
