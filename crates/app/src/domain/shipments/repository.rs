//! Shipments Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query_as, query_scalar, sqlite::SqliteRow};

use crate::domain::shipments::{
    data::NewShipment, records::ShipmentRecord, tracking::TrackingNumber,
};

const CREATE_SHIPMENT_SQL: &str = include_str!("sql/create_shipment.sql");
const GET_SHIPMENT_SQL: &str = include_str!("sql/get_shipment.sql");
const COUNT_SHIPMENTS_SQL: &str = include_str!("sql/count_shipments.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteShipmentsRepository;

impl SqliteShipmentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_shipment(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        tracking_number: &TrackingNumber,
        shipment: &NewShipment,
        status: &str,
    ) -> Result<ShipmentRecord, sqlx::Error> {
        query_as::<Sqlite, ShipmentRecord>(CREATE_SHIPMENT_SQL)
            .bind(tracking_number.as_str())
            .bind(shipment.sender())
            .bind(shipment.receiver())
            .bind(shipment.description())
            .bind(status)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_shipment(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        tracking_number: &TrackingNumber,
    ) -> Result<ShipmentRecord, sqlx::Error> {
        query_as::<Sqlite, ShipmentRecord>(GET_SHIPMENT_SQL)
            .bind(tracking_number.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_shipments(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Sqlite, i64>(COUNT_SHIPMENTS_SQL)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, SqliteRow> for ShipmentRecord {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let created_at: String = row.try_get("created_at")?;

        let created_at = created_at
            .parse::<Timestamp>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "created_at".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            tracking_number: TrackingNumber::new(row.try_get::<String, _>("trackingNumber")?),
            sender: row.try_get("sender")?,
            receiver: row.try_get("receiver")?,
            description: row.try_get("description")?,
            status: row.try_get("status")?,
            created_at,
        })
    }
}
