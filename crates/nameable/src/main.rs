use anyhow::Result;
use clap::Parser;

mod cli;

use self::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_tracing();
    cli.run()
}
