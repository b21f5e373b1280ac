pub(crate) mod inspect;

use crate::Cli;
use crate::CommandResult;
use inspect::InspectCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "schema-inspector")]
pub(crate) enum CommandEnum {
    Inspect(Box<InspectCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Inspect(cmd) => cmd.run(cli).await
        }
    }
}
