//! Parking Lot Service
//!
//! Main service implementing `ParkingLotApi`.
//!
//! Orchestrates each request:
//! 1. Read the clock
//! 2. Apply the transition on the `SlotAllocator`
//! 3. Ask the pricing collaborator for a quote (allocate only)
//! 4. Notify observers with the event and fresh stats

use crate::config::AllocatorConfig;
use crate::domain::{
    AllocationError, AllocationReceipt, HistoryEntry, LotEvent, LotStats, PaymentReceipt,
    PriceQuote, PricingError, SlotAllocator, SlotNumber, SlotState,
};
use crate::ports::{LotObserver, ParkingLotApi, PricingCollaborator, SystemTimeSource, TimeSource};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Parking lot service.
pub struct ParkingLotService {
    allocator: SlotAllocator,
    clock: Arc<dyn TimeSource>,
    pricing: Option<Arc<dyn PricingCollaborator>>,
    observers: Vec<Arc<dyn LotObserver>>,
}

impl ParkingLotService {
    /// Create a service with the system clock and no pricing.
    pub fn new(config: AllocatorConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemTimeSource))
    }

    /// Create a service with a custom clock.
    pub fn with_clock(config: AllocatorConfig, clock: Arc<dyn TimeSource>) -> Self {
        info!(
            total_slots = config.total_slots,
            unique_occupants = config.unique_occupants,
            "Creating parking lot"
        );
        Self {
            allocator: SlotAllocator::new(config.total_slots)
                .with_unique_occupants(config.unique_occupants),
            clock,
            pricing: None,
            observers: Vec::new(),
        }
    }

    /// Wire a pricing collaborator.
    pub fn with_pricing(mut self, pricing: Arc<dyn PricingCollaborator>) -> Self {
        self.pricing = Some(pricing);
        self
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: Arc<dyn LotObserver>) {
        self.observers.push(observer);
    }

    /// Read-only access to the underlying allocator.
    pub fn allocator(&self) -> &SlotAllocator {
        &self.allocator
    }

    fn notify(&self, event: LotEvent) {
        if self.observers.is_empty() {
            return;
        }
        let stats = self.allocator.stats();
        for observer in &self.observers {
            observer.on_event(&event, &stats);
        }
    }

    fn request_quote(&self, entry: &HistoryEntry) -> Option<PriceQuote> {
        let pricing = self.pricing.as_ref()?;
        match pricing.quote(&entry.occupant, entry.slot) {
            Ok(amount) => {
                debug!(slot = entry.slot, amount = %amount, "Quote received");
                Some(PriceQuote {
                    occupant: entry.occupant.clone(),
                    slot: entry.slot,
                    amount,
                    quoted_at: self.clock.now(),
                })
            }
            Err(e) => {
                warn!(slot = entry.slot, error = %e, "Pricing failed, allocation kept");
                None
            }
        }
    }
}

impl ParkingLotApi for ParkingLotService {
    fn allocate(
        &mut self,
        occupant: &str,
        slot: SlotNumber,
    ) -> Result<AllocationReceipt, AllocationError> {
        let now = self.clock.now();
        let entry = self
            .allocator
            .allocate(occupant, slot, now)
            .inspect_err(|e| warn!(slot, occupant, error = %e, "Allocation rejected"))?;
        debug!(slot, occupant = %entry.occupant, "Slot allocated");
        self.notify(LotEvent::Parked(entry.clone()));

        let quote = self.request_quote(&entry);
        if let Some(quote) = &quote {
            self.notify(LotEvent::Quoted(quote.clone()));
        }

        Ok(AllocationReceipt { entry, quote })
    }

    fn release(&mut self, slot: SlotNumber) -> Result<HistoryEntry, AllocationError> {
        let now = self.clock.now();
        let entry = self
            .allocator
            .release(slot, now)
            .inspect_err(|e| warn!(slot, error = %e, "Release rejected"))?;
        debug!(slot, occupant = %entry.occupant, "Slot released");
        self.notify(LotEvent::Removed(entry.clone()));
        Ok(entry)
    }

    fn reserve(&mut self, slot: SlotNumber) -> Result<(), AllocationError> {
        self.allocator
            .reserve(slot)
            .inspect_err(|e| warn!(slot, error = %e, "Reservation rejected"))?;
        debug!(slot, "Slot reserved");
        self.notify(LotEvent::Reserved { slot });
        Ok(())
    }

    fn settle_payment(&self, quote: &PriceQuote) -> Result<PaymentReceipt, PricingError> {
        let pricing = self
            .pricing
            .as_ref()
            .ok_or_else(|| PricingError::Unavailable("no pricing collaborator".to_string()))?;
        pricing.process_payment(quote)?;

        let receipt = PaymentReceipt {
            quote: quote.clone(),
            reference: Uuid::new_v4(),
            paid_at: self.clock.now(),
        };
        debug!(
            reference = %receipt.reference,
            slot = quote.slot,
            amount = %quote.amount,
            "Payment settled"
        );
        self.notify(LotEvent::PaymentSettled(receipt.clone()));
        Ok(receipt)
    }

    fn stats(&self) -> LotStats {
        self.allocator.stats()
    }

    fn history(&self) -> Vec<HistoryEntry> {
        self.allocator.history()
    }

    fn slot_state(&self, slot: SlotNumber) -> Option<SlotState> {
        self.allocator.slot(slot).cloned()
    }
}
