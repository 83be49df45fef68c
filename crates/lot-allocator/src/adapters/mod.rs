//! Adapters layer for the parking lot.
//!
//! Stub pricing collaborators and observers.

pub mod observers;
pub mod pricing;

pub use observers::{RecordingObserver, TracingObserver};
pub use pricing::{FlatRatePricing, RandomPricing, MAX_PRICE_CENTS, MIN_PRICE_CENTS};
