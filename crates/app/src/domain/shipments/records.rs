//! Shipment Records

use jiff::Timestamp;
use serde::Serialize;

use crate::domain::shipments::tracking::TrackingNumber;

/// Shipment Record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentRecord {
    /// Storage-assigned row id. Internal only.
    pub id: i64,
    pub tracking_number: TrackingNumber,
    pub sender: String,
    pub receiver: String,
    pub description: String,
    pub status: String,
    pub created_at: Timestamp,
}
