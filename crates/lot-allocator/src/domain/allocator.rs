//! # Slot Allocator - Occupancy State Machine
//!
//! Owns the per-slot state and the history log for one lot.
//!
//! ```text
//!            allocate                reserve
//!   [EMPTY] ─────────→ [OCCUPIED]   [EMPTY] ─────→ [RESERVED] ─┐
//!      ↑                   │                            ↑       │ reserve
//!      └───── release ─────┘                            └───────┘
//! ```
//!
//! Reserved slots are sticky: allocate rejects them and release reports
//! them as already empty.
//!
//! Only non-empty slots are stored, so construction and stats cost the same
//! for any lot size.
//!
//! ## Invariants Enforced
//!
//! - Slot numbers are checked against 1..=total before any lookup
//! - `occupied` and `reserved` counters always match a recount of `slots`
//! - History is newest-first and never rewritten (`push_front` only)

use super::entities::{HistoryEntry, LotStats, SlotState};
use super::errors::AllocationError;
use super::invariants::invariant_counters_match;
use super::value_objects::{OccupantId, SlotNumber, Timestamp};
use std::collections::{BTreeMap, VecDeque};

static EMPTY_SLOT: SlotState = SlotState::Empty;

/// Fixed-capacity slot allocator.
#[derive(Debug, Clone)]
pub struct SlotAllocator {
    /// Number of slots, fixed at construction.
    total: u32,

    /// Occupied and reserved slots; absent numbers are empty.
    slots: BTreeMap<SlotNumber, SlotState>,

    /// Number of occupied slots.
    occupied: u32,

    /// Number of reserved slots.
    reserved: u32,

    /// Newest-first event log.
    history: VecDeque<HistoryEntry>,

    /// Reject an occupant that already holds another slot.
    unique_occupants: bool,
}

impl SlotAllocator {
    /// Creates an allocator with `total` empty slots.
    pub fn new(total: u32) -> Self {
        Self {
            total,
            slots: BTreeMap::new(),
            occupied: 0,
            reserved: 0,
            history: VecDeque::new(),
            unique_occupants: false,
        }
    }

    /// Enables or disables the one-slot-per-occupant rule.
    pub fn with_unique_occupants(mut self, enabled: bool) -> Self {
        self.unique_occupants = enabled;
        self
    }

    /// Total number of slots (fixed at construction).
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Places `occupant` in `slot` and returns the `Parked` log entry.
    ///
    /// # Errors
    /// - `InvalidInput`: blank occupant or slot 0
    /// - `OutOfRange`: slot > total
    /// - `SlotOccupied` / `SlotReserved`: slot not empty
    /// - `DuplicateOccupant`: occupant parked elsewhere (unique mode only)
    pub fn allocate(
        &mut self,
        occupant: &str,
        slot: SlotNumber,
        now: Timestamp,
    ) -> Result<HistoryEntry, AllocationError> {
        if slot == 0 {
            return Err(AllocationError::InvalidInput(
                "both occupant and slot number are required".to_string(),
            ));
        }
        let occupant = OccupantId::new(occupant)?;
        self.check_range(slot)?;

        match self.slots.get(&slot) {
            Some(SlotState::Occupied(_)) => return Err(AllocationError::SlotOccupied(slot)),
            Some(SlotState::Reserved) => return Err(AllocationError::SlotReserved(slot)),
            Some(SlotState::Empty) | None => {}
        }

        if self.unique_occupants {
            if let Some(existing) = self.find_occupant(&occupant) {
                return Err(AllocationError::DuplicateOccupant {
                    occupant: occupant.to_string(),
                    slot: existing,
                });
            }
        }

        self.slots
            .insert(slot, SlotState::Occupied(occupant.clone()));
        self.occupied += 1;
        let entry = HistoryEntry::parked(occupant, slot, now);
        self.history.push_front(entry.clone());

        debug_assert!(invariant_counters_match(self));
        Ok(entry)
    }

    /// Frees an occupied slot and returns the `Removed` log entry.
    ///
    /// # Errors
    /// - `InvalidInput`: slot 0
    /// - `OutOfRange`: slot > total
    /// - `SlotAlreadyEmpty`: slot is empty or only reserved
    pub fn release(
        &mut self,
        slot: SlotNumber,
        now: Timestamp,
    ) -> Result<HistoryEntry, AllocationError> {
        if slot == 0 {
            return Err(AllocationError::InvalidInput(
                "slot number is required".to_string(),
            ));
        }
        self.check_range(slot)?;

        let occupant = match self.slots.remove(&slot) {
            Some(SlotState::Occupied(occupant)) => occupant,
            other => {
                // Put back whatever was there; reservations are not releasable.
                if let Some(state) = other {
                    self.slots.insert(slot, state);
                }
                return Err(AllocationError::SlotAlreadyEmpty(slot));
            }
        };

        self.occupied -= 1;
        let entry = HistoryEntry::removed(occupant, slot, now);
        self.history.push_front(entry.clone());

        debug_assert!(invariant_counters_match(self));
        Ok(entry)
    }

    /// Holds an empty slot without an occupant. Re-reserving is a no-op.
    ///
    /// # Errors
    /// - `InvalidInput`: slot 0
    /// - `OutOfRange`: slot > total
    /// - `SlotOccupied`: slot holds an occupant
    pub fn reserve(&mut self, slot: SlotNumber) -> Result<(), AllocationError> {
        if slot == 0 {
            return Err(AllocationError::InvalidInput(
                "slot number is required".to_string(),
            ));
        }
        self.check_range(slot)?;

        match self.slots.get(&slot) {
            Some(SlotState::Occupied(_)) => return Err(AllocationError::SlotOccupied(slot)),
            Some(SlotState::Reserved) => return Ok(()),
            Some(SlotState::Empty) | None => {}
        }

        self.slots.insert(slot, SlotState::Reserved);
        self.reserved += 1;

        debug_assert!(invariant_counters_match(self));
        Ok(())
    }

    /// Current occupancy counts.
    pub fn stats(&self) -> LotStats {
        LotStats::new(self.total, self.occupied, self.reserved)
    }

    /// Snapshot of the history log, newest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.iter().cloned().collect()
    }

    /// Iterates the history log, newest first, without cloning.
    pub fn history_iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    /// Most recent history entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.history.front()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// State of one slot, `None` if the number is outside 1..=total.
    pub fn slot(&self, slot: SlotNumber) -> Option<&SlotState> {
        if slot == 0 || slot > self.total {
            return None;
        }
        Some(self.slots.get(&slot).unwrap_or(&EMPTY_SLOT))
    }

    /// All slots with their numbers, in ascending order.
    pub fn slots(&self) -> impl Iterator<Item = (SlotNumber, &SlotState)> {
        (1..=self.total).map(move |n| (n, self.slots.get(&n).unwrap_or(&EMPTY_SLOT)))
    }

    /// Occupied and reserved slots only, in ascending order.
    pub fn non_empty_slots(&self) -> impl Iterator<Item = (SlotNumber, &SlotState)> {
        self.slots.iter().map(|(n, state)| (*n, state))
    }

    /// Slot currently held by `occupant`, if any.
    pub fn find_occupant(&self, occupant: &OccupantId) -> Option<SlotNumber> {
        self.non_empty_slots()
            .find(|(_, state)| state.occupant() == Some(occupant))
            .map(|(slot, _)| slot)
    }

    pub(crate) fn counters(&self) -> (u32, u32) {
        (self.occupied, self.reserved)
    }

    fn check_range(&self, slot: SlotNumber) -> Result<(), AllocationError> {
        if slot == 0 || slot > self.total {
            return Err(AllocationError::OutOfRange {
                slot,
                total: self.total,
            });
        }
        Ok(())
    }
}
