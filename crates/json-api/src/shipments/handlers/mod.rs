//! Shipment Handlers

pub(crate) mod create;
pub(crate) mod track;
