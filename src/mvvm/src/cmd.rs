pub mod adapters;
pub mod parse;
pub mod run;

/// Represents a command in the mvvm application.
pub trait Command {
    /// Consumes a command object and executes the handler actions
    /// associated with it.
    ///
    /// On failure, an error will be reported.
    fn handle(self) -> eyre::Result<()>;
}
