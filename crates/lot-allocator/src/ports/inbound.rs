//! # Inbound Port - ParkingLotApi
//!
//! Driving port used by whatever presents the lot (console, tests, a UI
//! controller). Callers read `stats()` and `history()` after each mutation
//! to refresh their view, or subscribe a `LotObserver`.

use crate::domain::{
    AllocationError, AllocationReceipt, HistoryEntry, LotStats, PaymentReceipt, PriceQuote,
    PricingError, SlotNumber, SlotState,
};

/// Primary API of the parking lot.
///
/// # Example
///
/// ```rust,ignore
/// use lot_allocator::ports::ParkingLotApi;
///
/// fn park(lot: &mut impl ParkingLotApi) {
///     let receipt = lot.allocate("AB12", 2)?;
///     if let Some(quote) = receipt.quote {
///         lot.settle_payment(&quote)?;
///     }
///     println!("{:?}", lot.stats());
/// }
/// ```
pub trait ParkingLotApi {
    /// Parks `occupant` in `slot` and requests a price quote.
    ///
    /// # Errors
    /// - `InvalidInput`: blank occupant or missing slot
    /// - `OutOfRange`: slot outside 1..=total
    /// - `SlotOccupied` / `SlotReserved`: slot not empty
    fn allocate(&mut self, occupant: &str, slot: SlotNumber)
        -> Result<AllocationReceipt, AllocationError>;

    /// Frees an occupied slot, returning the `Removed` history entry.
    fn release(&mut self, slot: SlotNumber) -> Result<HistoryEntry, AllocationError>;

    /// Holds an empty slot.
    fn reserve(&mut self, slot: SlotNumber) -> Result<(), AllocationError>;

    /// Reports payment for a quote. Slot state is unaffected.
    fn settle_payment(&self, quote: &PriceQuote) -> Result<PaymentReceipt, PricingError>;

    /// Occupancy counts.
    fn stats(&self) -> LotStats;

    /// History log, newest first.
    fn history(&self) -> Vec<HistoryEntry>;

    /// State of one slot, `None` when out of range.
    fn slot_state(&self, slot: SlotNumber) -> Option<SlotState>;
}
