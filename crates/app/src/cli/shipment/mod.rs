use clap::{Args, Subcommand};

mod get;

#[derive(Debug, Args)]
pub(crate) struct ShipmentCommand {
    #[command(subcommand)]
    command: ShipmentSubcommand,
}

#[derive(Debug, Subcommand)]
enum ShipmentSubcommand {
    /// Print a shipment as JSON
    Get(get::GetShipmentArgs),
}

pub(crate) async fn run(command: ShipmentCommand) -> Result<(), String> {
    match command.command {
        ShipmentSubcommand::Get(args) => get::run(args).await,
    }
}
