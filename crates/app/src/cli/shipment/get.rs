use clap::Args;
use libam_app::{
    context::AppContext,
    domain::shipments::{ShipmentsServiceError, tracking::TrackingNumber},
};

#[derive(Debug, Args)]
pub(crate) struct GetShipmentArgs {
    /// Tracking number to look up
    tracking_number: String,

    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://shipments.db")]
    database_url: String,
}

pub(crate) async fn run(args: GetShipmentArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialize app context: {error}"))?;

    let shipment = match app
        .shipments
        .get_shipment(TrackingNumber::new(args.tracking_number.clone()))
        .await
    {
        Ok(shipment) => shipment,
        Err(ShipmentsServiceError::NotFound) => {
            return Err(format!(
                "tracking number not found: {}",
                args.tracking_number
            ));
        }
        Err(error) => return Err(format!("failed to load shipment: {error}")),
    };

    let json = serde_json::to_string_pretty(&shipment)
        .map_err(|error| format!("failed to encode shipment: {error}"))?;

    println!("{json}");

    Ok(())
}
