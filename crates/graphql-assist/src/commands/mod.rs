mod complete;
mod lint;

use crate::Cli;
use crate::CommandResult;
use complete::CompleteCmd;
use lint::LintCmd;


#[derive(Debug, clap::Parser)]
#[command(name = "graphql-assist")]
pub(crate) enum CommandEnum {
    /// Compute ranked completions for a cursor position described by a JSON
    /// request.
    Complete(Box<CompleteCmd>),

    /// Report syntax and validation problems in GraphQL documents.
    Lint(Box<LintCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Complete(cmd) => cmd.run(cli).await,
            Self::Lint(cmd) => cmd.run(cli).await,
        }
    }
}
