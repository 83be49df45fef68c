//! Pricing stubs implementing `PricingCollaborator`.
//!
//! No real payment processing happens here; `process_payment` only logs.

use crate::domain::{Money, OccupantId, PriceQuote, PricingError, SlotNumber};
use crate::ports::PricingCollaborator;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Lowest random price ($5.00).
pub const MIN_PRICE_CENTS: u64 = 500;

/// Highest random price ($25.00).
pub const MAX_PRICE_CENTS: u64 = 2500;

/// Quotes a uniformly random price between $5.00 and $25.00.
pub struct RandomPricing {
    rng: Mutex<StdRng>,
}

impl RandomPricing {
    /// Seeds from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence of prices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomPricing {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RandomPricing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomPricing").finish_non_exhaustive()
    }
}

impl PricingCollaborator for RandomPricing {
    fn quote(&self, occupant: &OccupantId, slot: SlotNumber) -> Result<Money, PricingError> {
        let cents = self.rng.lock().gen_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS);
        debug!(occupant = %occupant, slot, cents, "Random price quoted");
        Ok(Money::from_cents(cents))
    }

    fn process_payment(&self, quote: &PriceQuote) -> Result<(), PricingError> {
        debug!(
            occupant = %quote.occupant,
            slot = quote.slot,
            amount = %quote.amount,
            "Payment processed"
        );
        Ok(())
    }
}

/// Quotes the same price for every allocation.
#[derive(Debug, Clone, Copy)]
pub struct FlatRatePricing {
    rate: Money,
}

impl FlatRatePricing {
    pub fn new(rate: Money) -> Self {
        Self { rate }
    }
}

impl PricingCollaborator for FlatRatePricing {
    fn quote(&self, _occupant: &OccupantId, _slot: SlotNumber) -> Result<Money, PricingError> {
        Ok(self.rate)
    }

    fn process_payment(&self, quote: &PriceQuote) -> Result<(), PricingError> {
        debug!(
            occupant = %quote.occupant,
            slot = quote.slot,
            amount = %quote.amount,
            "Payment processed"
        );
        Ok(())
    }
}

/// Pricing collaborator that is always down.
#[cfg(test)]
pub struct UnavailablePricing;

#[cfg(test)]
impl PricingCollaborator for UnavailablePricing {
    fn quote(&self, _occupant: &OccupantId, _slot: SlotNumber) -> Result<Money, PricingError> {
        Err(PricingError::Unavailable("pricing backend offline".to_string()))
    }

    fn process_payment(&self, _quote: &PriceQuote) -> Result<(), PricingError> {
        Err(PricingError::PaymentDeclined("pricing backend offline".to_string()))
    }
}
