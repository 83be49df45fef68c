//! Outbound (Driven) ports for the parking lot.
//!
//! Dependencies the service calls out to: a clock, the pricing/payment
//! collaborator, and observers that render state.

use crate::domain::{LotEvent, LotStats, Money, OccupantId, PriceQuote, PricingError, SlotNumber, Timestamp};
use std::sync::atomic::{AtomicU64, Ordering};

/// Time source for history timestamps.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Manually driven clock for tests and replays.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    time: AtomicU64,
}

impl ManualTimeSource {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: AtomicU64::new(initial),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.time.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, time: Timestamp) {
        self.time.store(time, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Timestamp {
        self.time.load(Ordering::SeqCst)
    }
}

/// Pricing and payment collaborator invoked after a successful allocation.
///
/// Never required for allocator correctness: a failing or missing
/// collaborator only means no quote is produced.
pub trait PricingCollaborator: Send + Sync {
    /// Prices a fresh allocation.
    fn quote(&self, occupant: &OccupantId, slot: SlotNumber) -> Result<Money, PricingError>;

    /// Processes payment for a previously issued quote.
    fn process_payment(&self, quote: &PriceQuote) -> Result<(), PricingError>;
}

/// Receives a notification after every successful mutation.
pub trait LotObserver: Send + Sync {
    fn on_event(&self, event: &LotEvent, stats: &LotStats);
}
