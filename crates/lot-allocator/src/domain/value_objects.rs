//! Value objects for the slot allocator.
//!
//! Immutable types passed across the allocator boundary: slot numbers,
//! occupant identifiers and money amounts.

use super::errors::AllocationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// 1-based slot number. `0` is reserved as the "missing" value.
pub type SlotNumber = u32;

/// Caller-supplied identifier of whatever occupies a slot (a vehicle plate).
///
/// Opaque to the allocator. Construction rejects empty and whitespace-only
/// strings; the input text is otherwise kept as-is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OccupantId(String);

impl OccupantId {
    /// Validates and wraps an occupant identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, AllocationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(AllocationError::InvalidInput(
                "occupant identifier must not be empty".to_string(),
            ));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OccupantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for OccupantId {
    type Error = AllocationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OccupantId> for String {
    fn from(id: OccupantId) -> Self {
        id.0
    }
}

/// Money amount in cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(pub u64);

impl Money {
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Parses a slot number typed by a user.
///
/// Blank or non-numeric input is `InvalidInput`. Range checking is left to
/// the allocator, which knows the lot size.
pub fn parse_slot_number(input: &str) -> Result<SlotNumber, AllocationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AllocationError::InvalidInput(
            "slot number is required".to_string(),
        ));
    }
    trimmed
        .parse::<SlotNumber>()
        .map_err(|_| AllocationError::InvalidInput(format!("'{}' is not a slot number", trimmed)))
}
