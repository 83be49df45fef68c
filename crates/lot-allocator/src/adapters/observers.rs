//! Observer adapters implementing `LotObserver`.

use crate::domain::{LotEvent, LotStats};
use crate::ports::LotObserver;
use parking_lot::Mutex;
use tracing::info;

/// Logs every event with the stats that followed it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LotObserver for TracingObserver {
    fn on_event(&self, event: &LotEvent, stats: &LotStats) {
        match event {
            LotEvent::Parked(entry) => info!(
                occupant = %entry.occupant,
                slot = entry.slot,
                available = stats.available,
                "Vehicle parked"
            ),
            LotEvent::Removed(entry) => info!(
                occupant = %entry.occupant,
                slot = entry.slot,
                available = stats.available,
                "Vehicle removed"
            ),
            LotEvent::Reserved { slot } => {
                info!(slot, available = stats.available, "Slot reserved")
            }
            LotEvent::Quoted(quote) => info!(
                occupant = %quote.occupant,
                slot = quote.slot,
                amount = %quote.amount,
                "Price quoted"
            ),
            LotEvent::PaymentSettled(receipt) => info!(
                reference = %receipt.reference,
                amount = %receipt.quote.amount,
                "Payment settled"
            ),
        }
    }
}

/// Keeps every event it receives, oldest first.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<(LotEvent, LotStats)>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LotEvent> {
        self.events.lock().iter().map(|(e, _)| e.clone()).collect()
    }

    /// Stats delivered alongside the most recent event.
    pub fn last_stats(&self) -> Option<LotStats> {
        self.events.lock().last().map(|(_, s)| *s)
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl LotObserver for RecordingObserver {
    fn on_event(&self, event: &LotEvent, stats: &LotStats) {
        self.events.lock().push((event.clone(), *stats));
    }
}
