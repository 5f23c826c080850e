//! Libam Domain Concerns

pub mod shipments;
