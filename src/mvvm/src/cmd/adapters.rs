use clap::Args;
use serde::Serialize;

use super::Command;
use crate::builtins;

/// Subcommand for listing the adapters scripts can select.
#[derive(Debug, Args)]
pub struct Adapters {
    /// Prints the adapter table as JSON.
    #[clap(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct AdapterInfo {
    label: &'static str,
    directory: &'static str,
    source: &'static str,
    destination: &'static str,
}

impl Command for Adapters {
    fn handle(self) -> eyre::Result<()> {
        let registry = builtins::registry()?;

        if self.json {
            let infos: Vec<_> = registry
                .iter()
                .map(|e| AdapterInfo {
                    label: e.label.label,
                    directory: e.label.directory,
                    source: e.source.name(),
                    destination: e.destination.name(),
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&infos)?);
        } else {
            for entry in registry.iter() {
                println!(
                    "[{}] {}: {} => {}",
                    entry.label.directory, entry.label.label, entry.source, entry.destination
                );
            }
        }

        Ok(())
    }
}
