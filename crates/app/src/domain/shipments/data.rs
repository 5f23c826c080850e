//! Shipments Data

use thiserror::Error;

/// Creation input that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShipmentValidationError {
    #[error("missing shipment field: {0}")]
    MissingField(&'static str),
}

/// Validated New Shipment Data
///
/// Only constructible through [`NewShipment::new`], so every instance has a
/// non-empty sender, receiver and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShipment {
    sender: String,
    receiver: String,
    description: String,
}

impl NewShipment {
    /// Validate creation input.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentValidationError::MissingField`] naming the first empty field.
    pub fn new(
        sender: String,
        receiver: String,
        description: String,
    ) -> Result<Self, ShipmentValidationError> {
        for (field, value) in [
            ("sender", &sender),
            ("receiver", &receiver),
            ("description", &description),
        ] {
            if value.is_empty() {
                return Err(ShipmentValidationError::MissingField(field));
            }
        }

        Ok(Self {
            sender,
            receiver,
            description,
        })
    }

    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    #[must_use]
    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Status recorded for a freshly created shipment.
    #[must_use]
    pub fn initial_status(&self) -> String {
        initial_status(&self.description)
    }
}

/// Status message stored when a shipment is first created.
#[must_use]
pub fn initial_status(description: &str) -> String {
    format!("Shipment created - Awaiting pickup for \"{description}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_shipment(
        sender: &str,
        receiver: &str,
        description: &str,
    ) -> Result<NewShipment, ShipmentValidationError> {
        NewShipment::new(sender.into(), receiver.into(), description.into())
    }

    #[test]
    fn accepts_complete_input() {
        let shipment = new_shipment("Alice", "Bob", "Books");

        assert!(shipment.is_ok(), "expected valid shipment, got {shipment:?}");
    }

    #[test]
    fn rejects_each_empty_field() {
        assert_eq!(
            new_shipment("", "Bob", "Books"),
            Err(ShipmentValidationError::MissingField("sender"))
        );
        assert_eq!(
            new_shipment("Alice", "", "Books"),
            Err(ShipmentValidationError::MissingField("receiver"))
        );
        assert_eq!(
            new_shipment("Alice", "Bob", ""),
            Err(ShipmentValidationError::MissingField("description"))
        );
    }

    #[test]
    fn initial_status_quotes_description() {
        assert_eq!(
            initial_status("Books"),
            "Shipment created - Awaiting pickup for \"Books\""
        );
    }
}
