//! Tracking Numbers

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::RangeInclusive,
};

use jiff::Timestamp;
use mockall::automock;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Prefix shared by every generated tracking number.
pub const TRACKING_NUMBER_PREFIX: &str = "LIB";

/// Only the last six digits of the millisecond clock are kept.
const CLOCK_DIGITS_MODULUS: i64 = 1_000_000;

const SUFFIX_RANGE: RangeInclusive<u16> = 100..=999;

/// Client-facing shipment identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build a tracking number from a Unix millisecond clock reading and a
    /// three digit suffix.
    #[must_use]
    pub fn compose(unix_millis: i64, suffix: u16) -> Self {
        Self(format!(
            "{TRACKING_NUMBER_PREFIX}{:06}{suffix}",
            unix_millis.rem_euclid(CLOCK_DIGITS_MODULUS)
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for TrackingNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TrackingNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for TrackingNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<TrackingNumber> for String {
    fn from(value: TrackingNumber) -> Self {
        value.0
    }
}

/// Source of new tracking numbers.
///
/// Implementations make no uniqueness promise; collisions surface as a
/// storage uniqueness violation.
#[automock]
pub trait TrackingNumberGenerator: Send + Sync {
    fn generate(&self) -> TrackingNumber;
}

/// Generates `LIB` + last six digits of the millisecond clock + a random
/// number in `100..=999`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockTrackingNumberGenerator;

impl TrackingNumberGenerator for ClockTrackingNumberGenerator {
    fn generate(&self) -> TrackingNumber {
        let suffix = rand::thread_rng().gen_range(SUFFIX_RANGE);

        TrackingNumber::compose(Timestamp::now().as_millisecond(), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_well_formed(tracking_number: &TrackingNumber) -> bool {
        let Some(digits) = tracking_number.as_str().strip_prefix(TRACKING_NUMBER_PREFIX) else {
            return false;
        };

        digits.len() == 9 && digits.chars().all(|c| c.is_ascii_digit())
    }

    #[test]
    fn compose_keeps_last_six_clock_digits() {
        let tracking_number = TrackingNumber::compose(1_717_171_482_193, 756);

        assert_eq!(tracking_number.as_str(), "LIB482193756");
    }

    #[test]
    fn compose_zero_pads_short_clock_digits() {
        let tracking_number = TrackingNumber::compose(1_700_000_000_042, 100);

        assert_eq!(tracking_number.as_str(), "LIB000042100");
    }

    #[test]
    fn generated_numbers_match_expected_shape() {
        let generator = ClockTrackingNumberGenerator;

        for _ in 0..256 {
            let tracking_number = generator.generate();

            assert!(
                is_well_formed(&tracking_number),
                "unexpected tracking number {tracking_number}"
            );

            let suffix: u16 = tracking_number
                .as_str()
                .get(9..)
                .and_then(|s| s.parse().ok())
                .unwrap_or_default();

            assert!(SUFFIX_RANGE.contains(&suffix), "suffix {suffix} out of range");
        }
    }

    #[test]
    fn serializes_as_plain_string() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&TrackingNumber::new("LIB123456789"))?;

        assert_eq!(json, "\"LIB123456789\"");

        Ok(())
    }
}
