//! Create Shipment Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use libam_app::domain::shipments::data::{NewShipment, ShipmentValidationError};

use crate::{
    errors::ApiError,
    extensions::*,
    shipments::errors::{body_error, create_error, validation_error},
    state::State,
};

pub(crate) const SHIPMENT_CREATED: &str = "Shipment created successfully";

/// Create Shipment Request
///
/// Absent and `null` fields are treated the same as empty strings.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateShipmentRequest {
    /// Name of the sending party
    pub sender: Option<String>,

    /// Name of the receiving party
    pub receiver: Option<String>,

    /// What is being shipped
    pub description: Option<String>,
}

impl TryFrom<CreateShipmentRequest> for NewShipment {
    type Error = ShipmentValidationError;

    fn try_from(request: CreateShipmentRequest) -> Result<Self, Self::Error> {
        NewShipment::new(
            request.sender.unwrap_or_default(),
            request.receiver.unwrap_or_default(),
            request.description.unwrap_or_default(),
        )
    }
}

/// Shipment Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShipmentCreatedResponse {
    /// Tracking number assigned to the new shipment
    #[serde(rename = "trackingNumber")]
    pub tracking_number: String,

    /// Confirmation message
    pub message: String,
}

/// Create Shipment Handler
///
/// Registers a shipment and returns its tracking number.
///
/// A body that is absent, not JSON, or not shaped like
/// [`CreateShipmentRequest`] is answered like a request with missing fields.
#[endpoint(
    tags("shipments"),
    summary = "Create Shipment",
    request_body = CreateShipmentRequest,
    responses(
        (status_code = StatusCode::OK, description = "Shipment created"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ShipmentCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = req
        .parse_json::<CreateShipmentRequest>()
        .await
        .map_err(body_error)?;

    let shipment = NewShipment::try_from(request).map_err(validation_error)?;

    let created = state
        .app
        .shipments
        .create_shipment(shipment)
        .await
        .map_err(create_error)?;

    Ok(Json(ShipmentCreatedResponse {
        tracking_number: created.tracking_number.into_string(),
        message: SHIPMENT_CREATED.to_owned(),
    }))
}
