use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use foamj_model::FoamToml;

use super::UnwrapOrExit;
use crate::reports::{ListReport, Report, TerminalOutput};

#[derive(Args)]
pub struct ListCommand {
    /// Path to foam.toml (defaults to ./foam.toml)
    #[arg(short, long, default_value = "foam.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let foam_toml = FoamToml::open(&self.config).unwrap_or_exit();
        ListReport::new(foam_toml.manifest()).render(&mut TerminalOutput::new());
        Ok(())
    }
}
