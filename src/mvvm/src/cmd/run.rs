use std::{path::PathBuf, rc::Rc};

use clap::Args;
use eyre::WrapErr;
use mvvm_binding::ObservableObject;

use super::Command;
use crate::{
    builtins,
    cli::{io, HYPHEN},
    script,
    session::Session,
};

/// Subcommand for replaying a binding script against a fresh model.
///
/// Every value delivered to the `OnUpdate` binding field is printed
/// on its own line.
#[derive(Debug, Args)]
pub struct Run {
    /// The script to run.
    ///
    /// When the value is "-", the script is read from stdin.
    #[clap(default_value = HYPHEN)]
    script: PathBuf,
}

impl Command for Run {
    fn handle(self) -> eyre::Result<()> {
        let source = io::read_input(&self.script)?;
        let lines = script::parse(&source)?;

        let model = ObservableObject::new();
        let mut session = Session::new(
            &model,
            builtins::registry()?,
            Rc::new(|line: &str| println!("{line}")),
        )?;

        for line in &lines {
            log::trace!("Executing {:?}", line.statement);
            session
                .execute(&line.statement)
                .wrap_err_with(|| format!("statement on line {} failed", line.number))?;
        }

        Ok(())
    }
}
