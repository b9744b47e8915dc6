use anyhow::{Result, bail};
use clap::Parser;
use tracing::debug;

use nameable_rules::{NormalizedName, validate_npm};

#[derive(Debug, Clone, Parser)]
pub struct CheckCommand {
    /// Candidate names to validate
    #[arg(required = true)]
    pub names: Vec<String>,
    /// Already-taken names to test candidates against for collisions
    #[arg(long = "taken")]
    pub taken: Vec<String>,
}

impl CheckCommand {
    pub fn run(self) -> Result<()> {
        let taken = self
            .taken
            .iter()
            .map(|name| (NormalizedName::new(name), name))
            .collect::<Vec<_>>();

        let mut failures = 0usize;
        for name in &self.names {
            if let Err(e) = validate_npm(Some(name)) {
                failures += 1;
                println!("{name}: {e}");
                continue;
            }

            // Collisions are only meaningful for otherwise-valid names
            if let Some((_, taken_name)) = taken.iter().find(|(norm, _)| norm.matches(name)) {
                failures += 1;
                println!("{name}: collides with taken name `{taken_name}`");
            } else {
                println!("{name}: ok");
            }
        }

        debug!("checked {} names, {failures} rejected", self.names.len());

        if failures > 0 {
            bail!("{failures} of {} names are not publishable", self.names.len());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(names: &[&str], taken: &[&str]) -> Result<()> {
        CheckCommand {
            names: names.iter().map(ToString::to_string).collect(),
            taken: taken.iter().map(ToString::to_string).collect(),
        }
        .run()
    }

    #[test]
    fn valid_names_pass() {
        assert!(check(&["fonction", "name-able"], &[]).is_ok());
    }

    #[test]
    fn invalid_name_fails() {
        assert!(check(&["fonction", "_hello"], &[]).is_err());
    }

    #[test]
    fn collision_with_taken_name_fails() {
        assert!(check(&["name-able"], &["n-a-m-e-a-b-l-e"]).is_err());
        assert!(check(&["name-able"], &["unrelated"]).is_ok());
    }
}
