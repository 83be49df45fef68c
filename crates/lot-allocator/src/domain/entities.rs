//! Core entities for the slot allocator.

use super::value_objects::{Money, OccupantId, SlotNumber, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// State of a single slot. Occupied and reserved are mutually exclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotState {
    #[default]
    Empty,
    Occupied(OccupantId),
    Reserved,
}

impl SlotState {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    pub fn is_reserved(&self) -> bool {
        matches!(self, Self::Reserved)
    }

    pub fn occupant(&self) -> Option<&OccupantId> {
        match self {
            Self::Occupied(id) => Some(id),
            _ => None,
        }
    }
}

/// Kind of history event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Parked,
    Removed,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parked => f.write_str("parked"),
            Self::Removed => f.write_str("removed"),
        }
    }
}

/// One immutable record in the history log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub kind: EventKind,
    pub occupant: OccupantId,
    pub slot: SlotNumber,
    pub timestamp: Timestamp,
}

impl HistoryEntry {
    pub fn parked(occupant: OccupantId, slot: SlotNumber, timestamp: Timestamp) -> Self {
        Self {
            kind: EventKind::Parked,
            occupant,
            slot,
            timestamp,
        }
    }

    pub fn removed(occupant: OccupantId, slot: SlotNumber, timestamp: Timestamp) -> Self {
        Self {
            kind: EventKind::Removed,
            occupant,
            slot,
            timestamp,
        }
    }
}

/// Occupancy snapshot.
///
/// `available = total - occupied - reserved`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotStats {
    pub total: u32,
    pub available: u32,
    pub occupied: u32,
    pub reserved: u32,
}

impl LotStats {
    pub fn new(total: u32, occupied: u32, reserved: u32) -> Self {
        Self {
            total,
            available: total.saturating_sub(occupied).saturating_sub(reserved),
            occupied,
            reserved,
        }
    }

    pub fn is_full(&self) -> bool {
        self.available == 0
    }
}

/// Price produced by the pricing collaborator for a fresh allocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub occupant: OccupantId,
    pub slot: SlotNumber,
    pub amount: Money,
    pub quoted_at: Timestamp,
}

/// Confirmation that a quote was paid. Has no effect on slot state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub quote: PriceQuote,
    pub reference: Uuid,
    pub paid_at: Timestamp,
}

/// Result of a successful allocation through the service.
///
/// `quote` is `None` when no pricing collaborator is wired or it failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocationReceipt {
    pub entry: HistoryEntry,
    pub quote: Option<PriceQuote>,
}

/// Change notifications delivered to observers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LotEvent {
    Parked(HistoryEntry),
    Removed(HistoryEntry),
    Reserved { slot: SlotNumber },
    Quoted(PriceQuote),
    PaymentSettled(PaymentReceipt),
}
