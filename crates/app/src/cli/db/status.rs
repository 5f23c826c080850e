use clap::Args;
use libam_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct StatusArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://shipments.db")]
    database_url: String,
}

pub(crate) async fn run(args: StatusArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialize app context: {error}"))?;

    let count = app
        .shipments
        .count_shipments()
        .await
        .map_err(|error| format!("failed to count shipments: {error}"))?;

    println!("database_url: {}", args.database_url);
    println!("shipments: {count}");

    Ok(())
}
