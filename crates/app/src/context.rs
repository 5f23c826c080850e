//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::shipments::{ShipmentsService, SqliteShipmentsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to create shipments table")]
    Schema(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub shipments: Arc<dyn ShipmentsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// The shipments table is created before the context is returned.
    ///
    /// # Errors
    ///
    /// Returns an error when the database cannot be opened or the schema cannot be ensured.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        info!("connected to SQLite database");

        database::ensure_schema(&pool)
            .await
            .map_err(AppInitError::Schema)?;

        info!("shipments table ready");

        Ok(Self::from_db(Db::new(pool)))
    }

    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            shipments: Arc::new(SqliteShipmentsService::new(db)),
        }
    }
}
