//! Shipments service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    database::Db,
    domain::shipments::{
        data::NewShipment,
        errors::ShipmentsServiceError,
        records::ShipmentRecord,
        repository::SqliteShipmentsRepository,
        tracking::{ClockTrackingNumberGenerator, TrackingNumber, TrackingNumberGenerator},
    },
};

/// Number of tracking numbers tried before a create gives up on collisions.
pub const MAX_TRACKING_NUMBER_ATTEMPTS: usize = 3;

#[derive(Clone)]
pub struct SqliteShipmentsService {
    db: Db,
    repository: SqliteShipmentsRepository,
    generator: Arc<dyn TrackingNumberGenerator>,
}

impl SqliteShipmentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self::with_generator(db, Arc::new(ClockTrackingNumberGenerator))
    }

    #[must_use]
    pub fn with_generator(db: Db, generator: Arc<dyn TrackingNumberGenerator>) -> Self {
        Self {
            db,
            repository: SqliteShipmentsRepository::new(),
            generator,
        }
    }

    async fn insert_shipment(
        &self,
        tracking_number: &TrackingNumber,
        shipment: &NewShipment,
        status: &str,
    ) -> Result<ShipmentRecord, ShipmentsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_shipment(&mut tx, tracking_number, shipment, status)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

impl Debug for SqliteShipmentsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SqliteShipmentsService")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ShipmentsService for SqliteShipmentsService {
    async fn create_shipment(
        &self,
        shipment: NewShipment,
    ) -> Result<ShipmentRecord, ShipmentsServiceError> {
        let status = shipment.initial_status();

        for attempt in 1..=MAX_TRACKING_NUMBER_ATTEMPTS {
            let tracking_number = self.generator.generate();

            match self
                .insert_shipment(&tracking_number, &shipment, &status)
                .await
            {
                Err(ShipmentsServiceError::DuplicateTrackingNumber) => {
                    warn!(
                        %tracking_number,
                        attempt,
                        "tracking number collision, regenerating"
                    );
                }
                Ok(created) => {
                    info!(tracking_number = %created.tracking_number, "new shipment added");

                    return Ok(created);
                }
                Err(error) => return Err(error),
            }
        }

        Err(ShipmentsServiceError::DuplicateTrackingNumber)
    }

    async fn get_shipment(
        &self,
        tracking_number: TrackingNumber,
    ) -> Result<ShipmentRecord, ShipmentsServiceError> {
        let mut tx = self.db.begin().await?;

        let shipment = self
            .repository
            .get_shipment(&mut tx, &tracking_number)
            .await?;

        tx.commit().await?;

        Ok(shipment)
    }

    async fn count_shipments(&self) -> Result<i64, ShipmentsServiceError> {
        let mut tx = self.db.begin().await?;

        let count = self.repository.count_shipments(&mut tx).await?;

        tx.commit().await?;

        Ok(count)
    }
}

#[automock]
#[async_trait]
pub trait ShipmentsService: Send + Sync {
    /// Creates a shipment under a freshly generated tracking number.
    async fn create_shipment(
        &self,
        shipment: NewShipment,
    ) -> Result<ShipmentRecord, ShipmentsServiceError>;

    /// Retrieve a single shipment by tracking number.
    async fn get_shipment(
        &self,
        tracking_number: TrackingNumber,
    ) -> Result<ShipmentRecord, ShipmentsServiceError>;

    /// Number of stored shipments.
    async fn count_shipments(&self) -> Result<i64, ShipmentsServiceError>;
}
