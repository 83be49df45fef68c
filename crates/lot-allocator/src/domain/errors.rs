//! Error types for the slot allocator.
//!
//! Every error is reported synchronously, leaves state untouched and is safe
//! to retry with corrected input.

use super::value_objects::SlotNumber;
use thiserror::Error;

/// Errors returned by allocate, release and reserve.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// Missing or empty input (blank occupant, slot number 0).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Slot number outside 1..=total.
    #[error("Slot {slot} out of range: lot has {total} slots")]
    OutOfRange { slot: SlotNumber, total: u32 },

    /// Slot already holds an occupant.
    #[error("Slot {0} is already occupied")]
    SlotOccupied(SlotNumber),

    /// Slot is held by a reservation.
    #[error("Slot {0} is reserved")]
    SlotReserved(SlotNumber),

    /// Nothing to release at this slot.
    #[error("Slot {0} is already empty")]
    SlotAlreadyEmpty(SlotNumber),

    /// Occupant already parked elsewhere (only with `unique_occupants`).
    #[error("Occupant {occupant} is already parked at slot {slot}")]
    DuplicateOccupant { occupant: String, slot: SlotNumber },
}

/// Errors from the pricing/payment collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("Pricing unavailable: {0}")]
    Unavailable(String),

    #[error("Payment declined: {0}")]
    PaymentDeclined(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}
