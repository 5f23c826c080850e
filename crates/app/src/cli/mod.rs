use clap::{Parser, Subcommand};

mod db;
mod shipment;

#[derive(Debug, Parser)]
#[command(name = "libam-app", about = "Libam Shipping CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Shipment(shipment::ShipmentCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Shipment(command) => shipment::run(command).await,
        }
    }
}
