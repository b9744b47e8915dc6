use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod check;
mod normalize;

pub use self::check::CheckCommand;
pub use self::normalize::NormalizeCommand;

#[derive(Debug, Clone, Parser)]
#[command(name = "nameable", version, about = "Validate and normalize package names")]
pub struct Cli {
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: CliCommand,
}

impl Cli {
    pub fn init_tracing(&self) {
        let default_filter = if self.verbose { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Check(cmd) => cmd.run(),
            CliCommand::Normalize(cmd) => cmd.run(),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Check candidate names against the npm naming rules
    Check(CheckCommand),
    /// Print the normalized form of names
    Normalize(NormalizeCommand),
}
