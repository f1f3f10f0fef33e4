use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;

pub mod io;

pub const HYPHEN: &str = "-";

/// The CLI interface for the mvvm application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: MvvmCommand,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,
}

/// The top-level commands supported by mvvm.
#[derive(Debug, Subcommand)]
pub enum MvvmCommand {
    Adapters(adapters::Adapters),
    Parse(parse::Parse),
    Run(run::Run),
}

impl Command for MvvmCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::Adapters(adapters) => adapters.handle(),
            Self::Parse(parse) => parse.handle(),
            Self::Run(run) => run.handle(),
        }
    }
}
