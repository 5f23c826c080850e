//! Track Shipment Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use libam_app::domain::shipments::{records::ShipmentRecord, tracking::TrackingNumber};

use crate::{errors::ApiError, extensions::*, shipments::errors::track_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShipmentResponse {
    /// Tracking number the shipment was registered under
    #[serde(rename = "trackingNumber")]
    pub tracking_number: String,

    /// Name of the sending party
    pub sender: String,

    /// Name of the receiving party
    pub receiver: String,

    /// What is being shipped
    pub description: String,

    /// Human-readable shipment status
    pub status: String,

    /// Creation time as an RFC 3339 UTC timestamp, e.g. `2024-05-06T07:08:09Z`
    pub created_at: String,
}

impl From<ShipmentRecord> for ShipmentResponse {
    fn from(shipment: ShipmentRecord) -> Self {
        ShipmentResponse {
            tracking_number: shipment.tracking_number.into_string(),
            sender: shipment.sender,
            receiver: shipment.receiver,
            description: shipment.description,
            status: shipment.status,
            created_at: shipment.created_at.to_string(),
        }
    }
}

/// Track Shipment Handler
///
/// Returns the shipment registered under a tracking number.
#[endpoint(tags("shipments"), summary = "Track Shipment")]
pub(crate) async fn handler(
    tracking_number: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ShipmentResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let shipment = state
        .app
        .shipments
        .get_shipment(TrackingNumber::new(tracking_number.into_inner()))
        .await
        .map_err(track_error)?;

    Ok(Json(shipment.into()))
}
