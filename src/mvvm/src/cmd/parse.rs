use clap::Args;
use mvvm_union::{parse, Error};

use super::Command;

/// Subcommand for parsing a literal into a union value.
#[derive(Debug, Args)]
pub struct Parse {
    /// The type to parse the literal as, e.g. "int" or "double".
    #[clap(value_name = "TYPE")]
    ty: String,

    /// The literal to parse.
    literal: String,

    /// Prints the value as JSON.
    #[clap(long, default_value_t = false)]
    json: bool,
}

impl Command for Parse {
    fn handle(self) -> eyre::Result<()> {
        let value = parse::parse(&self.ty, &self.literal).map_err(|e| match e {
            Error::UnsupportedType(_) => {
                let mut names: Vec<_> = parse::type_names().collect();
                names.sort_unstable();

                eyre::eyre!("{e}; expected one of: {}", names.join(", "))
            }
            e => e.into(),
        })?;

        if self.json {
            let out = serde_json::json!({ "kind": value.kind(), "value": value });
            println!("{out}");
        } else {
            println!("{}: {value}", value.kind());
        }

        Ok(())
    }
}
