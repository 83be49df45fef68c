//! Domain invariants for the slot allocator.
//!
//! Checked with `debug_assert!` after every mutation and asserted directly
//! in tests.

use super::allocator::SlotAllocator;
use super::entities::{HistoryEntry, LotStats, SlotState};

/// INVARIANT-1: Counter Consistency
/// Cached occupied/reserved counters equal a recount of the stored slots,
/// and no stored slot is empty or out of range.
pub fn invariant_counters_match(lot: &SlotAllocator) -> bool {
    let (occupied, reserved) = lot.counters();
    let mut counted_occupied = 0u32;
    let mut counted_reserved = 0u32;
    for (slot, state) in lot.non_empty_slots() {
        if slot == 0 || slot > lot.total() {
            return false;
        }
        match state {
            SlotState::Occupied(_) => counted_occupied += 1,
            SlotState::Reserved => counted_reserved += 1,
            SlotState::Empty => return false,
        }
    }
    occupied == counted_occupied && reserved == counted_reserved
}

/// INVARIANT-2: Capacity Accounting
/// `available + occupied + reserved == total`.
pub fn invariant_capacity_accounting(stats: &LotStats) -> bool {
    stats.occupied + stats.reserved <= stats.total
        && stats.available + stats.occupied + stats.reserved == stats.total
}

/// INVARIANT-3: Newest First
/// Timestamps never increase from the head of the log to its tail.
pub fn invariant_newest_first(history: &[HistoryEntry]) -> bool {
    history
        .windows(2)
        .all(|pair| pair[0].timestamp >= pair[1].timestamp)
}

/// INVARIANT-4: Slot Bounds
/// Every logged slot number lies within 1..=total.
pub fn invariant_history_in_bounds(history: &[HistoryEntry], total: u32) -> bool {
    history.iter().all(|e| e.slot >= 1 && e.slot <= total)
}
