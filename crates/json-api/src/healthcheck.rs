//! Healthcheck Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{errors::ApiError, extensions::*, state::State};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Healthcheck handler
///
/// Reports `ok` once the shipment store answers a query.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = match state.app.shipments.count_shipments().await {
        Ok(_) => "ok",
        Err(source) => {
            warn!("shipment store unavailable: {source}");
            res.status_code(StatusCode::SERVICE_UNAVAILABLE);

            "unavailable"
        }
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
    }))
}
