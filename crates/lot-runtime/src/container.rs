//! # Service Container
//!
//! Builds the `ParkingLotService` with its outbound adapters from a
//! `RuntimeConfig`.

use std::sync::Arc;

use lot_allocator::ports::PricingCollaborator;
use lot_allocator::{FlatRatePricing, ParkingLotService, RandomPricing, SystemTimeSource, TracingObserver};

use crate::config::{PricingMode, RuntimeConfig};

/// Wires clock, pricing and the logging observer around a fresh lot.
pub fn build_service(config: &RuntimeConfig) -> ParkingLotService {
    let pricing: Arc<dyn PricingCollaborator> = match config.pricing {
        PricingMode::Random { seed: Some(seed) } => Arc::new(RandomPricing::seeded(seed)),
        PricingMode::Random { seed: None } => Arc::new(RandomPricing::new()),
        PricingMode::Flat(rate) => Arc::new(FlatRatePricing::new(rate)),
    };

    let mut service =
        ParkingLotService::with_clock(config.allocator.clone(), Arc::new(SystemTimeSource))
            .with_pricing(pricing);
    service.subscribe(Arc::new(TracingObserver));
    service
}
