//! Database Config

use clap::Args;

/// Shipment store settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `SQLite` connection string; the file is created when missing
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://shipments.db")]
    pub database_url: String,
}
