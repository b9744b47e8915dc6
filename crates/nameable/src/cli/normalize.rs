use anyhow::Result;
use clap::Parser;

use nameable_rules::normalize;

#[derive(Debug, Clone, Parser)]
pub struct NormalizeCommand {
    /// Names to print in normalized form
    #[arg(required = true)]
    pub names: Vec<String>,
}

impl NormalizeCommand {
    pub fn run(self) -> Result<()> {
        for name in &self.names {
            println!("{}", normalize(name));
        }
        Ok(())
    }
}
