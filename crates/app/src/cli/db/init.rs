use clap::Args;
use libam_app::database;

#[derive(Debug, Args)]
pub(crate) struct InitArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://shipments.db")]
    database_url: String,
}

pub(crate) async fn run(args: InitArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::ensure_schema(&pool)
        .await
        .map_err(|error| format!("failed to create shipments table: {error}"))?;

    println!("shipments table ready: {}", args.database_url);

    Ok(())
}
