//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use libam_app::{
    context::AppContext,
    domain::shipments::{
        MockShipmentsService, data::initial_status, records::ShipmentRecord,
        tracking::TrackingNumber,
    },
};

use crate::state::State;

pub(crate) fn state_with_shipments(shipments: MockShipmentsService) -> Arc<State> {
    State::from_app_context(AppContext {
        shipments: Arc::new(shipments),
    })
}

pub(crate) fn shipments_service(shipments: MockShipmentsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_shipments(shipments)))
            .push(route),
    )
}

pub(crate) fn make_shipment(tracking_number: TrackingNumber) -> ShipmentRecord {
    ShipmentRecord {
        id: 1,
        tracking_number,
        sender: "Alice".to_string(),
        receiver: "Bob".to_string(),
        description: "Books".to_string(),
        status: initial_status("Books"),
        created_at: Timestamp::UNIX_EPOCH,
    }
}
