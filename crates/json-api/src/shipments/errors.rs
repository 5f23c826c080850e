//! Shipment Errors

use salvo::http::ParseError;
use tracing::{debug, error};

use libam_app::domain::shipments::{ShipmentsServiceError, data::ShipmentValidationError};

use crate::errors::ApiError;

pub(crate) const MISSING_DETAILS: &str = "Missing shipment details";
pub(crate) const CREATE_FAILED: &str = "Failed to create shipment";
pub(crate) const TRACKING_NOT_FOUND: &str = "Tracking number not found";
pub(crate) const DATABASE_ERROR: &str = "Database error";

pub(crate) fn validation_error(error: ShipmentValidationError) -> ApiError {
    debug!("rejected shipment payload: {error}");

    ApiError::bad_request(MISSING_DETAILS)
}

pub(crate) fn body_error(error: ParseError) -> ApiError {
    debug!("unreadable shipment payload: {error}");

    ApiError::bad_request(MISSING_DETAILS)
}

pub(crate) fn create_error(error: ShipmentsServiceError) -> ApiError {
    match error {
        ShipmentsServiceError::Sql(source) => error!("failed to create shipment: {source}"),
        other => error!("failed to create shipment: {other}"),
    }

    ApiError::internal_server_error(CREATE_FAILED)
}

pub(crate) fn track_error(error: ShipmentsServiceError) -> ApiError {
    match error {
        ShipmentsServiceError::NotFound => ApiError::not_found(TRACKING_NOT_FOUND),
        ShipmentsServiceError::Sql(source) => {
            error!("failed to fetch shipment: {source}");

            ApiError::internal_server_error(DATABASE_ERROR)
        }
        other @ ShipmentsServiceError::DuplicateTrackingNumber => {
            error!("failed to fetch shipment: {other}");

            ApiError::internal_server_error(DATABASE_ERROR)
        }
    }
}
