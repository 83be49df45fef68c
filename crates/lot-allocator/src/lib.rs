//! # Lot Allocator
//!
//! Fixed-capacity slot allocator (a parking lot): occupancy and reservation
//! state for N slots, a newest-first history log, and a pricing hook that
//! fires on every successful allocation.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Slot State Machine
//!
//! ```text
//! [EMPTY] ──allocate──→ [OCCUPIED] ──release──→ [EMPTY]
//! [EMPTY] ──reserve───→ [RESERVED]   (sticky: allocate and release reject it)
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Counters match slot states | `domain/allocator.rs` - `debug_assert!` after each mutation |
//! | INVARIANT-2 | `available + occupied + reserved == total` | `domain/entities.rs` - `LotStats::new()` |
//! | INVARIANT-3 | History newest-first, never rewritten | `domain/allocator.rs` - `push_front` only |
//! | INVARIANT-4 | Slot numbers within 1..=N | `domain/allocator.rs` - `check_range()` |
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `TimeSource` | History timestamps |
//! | `PricingCollaborator` | Price quote after allocation, payment confirmation |
//! | `LotObserver` | Presentation refresh after each mutation |
//!
//! ## Module Structure
//!
//! ```text
//! lot-allocator/
//! ├── domain/      # SlotAllocator, entities, value objects, invariants, errors
//! ├── ports/       # ParkingLotApi (inbound), TimeSource/PricingCollaborator/LotObserver (outbound)
//! ├── adapters/    # Random/flat pricing stubs, tracing + recording observers
//! ├── service.rs   # ParkingLotService wiring the above
//! └── config.rs    # AllocatorConfig (env + serde)
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{FlatRatePricing, RandomPricing, RecordingObserver, TracingObserver};
pub use config::AllocatorConfig;
pub use domain::*;
pub use ports::{
    LotObserver, ManualTimeSource, ParkingLotApi, PricingCollaborator, SystemTimeSource,
    TimeSource,
};
pub use service::ParkingLotService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
