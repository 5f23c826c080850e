//! Shipments

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;
pub mod tracking;

pub use errors::ShipmentsServiceError;
pub use service::*;
