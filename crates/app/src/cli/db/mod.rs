use clap::{Args, Subcommand};

mod init;
mod status;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Create the shipments table if it does not exist
    Init(init::InitArgs),

    /// Report how many shipments are stored
    Status(status::StatusArgs),
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    match command.command {
        DbSubcommand::Init(args) => init::run(args).await,
        DbSubcommand::Status(args) => status::run(args).await,
    }
}
