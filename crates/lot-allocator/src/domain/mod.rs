//! # Domain Layer - Slot Allocator
//!
//! Pure state: no clock, no pricing, no logging. Time arrives as a
//! `Timestamp` argument so every operation is deterministic.
//!
//! ## Components
//!
//! - `allocator`: SlotAllocator state machine and history log
//! - `entities`: SlotState, HistoryEntry, LotStats, PriceQuote, LotEvent
//! - `value_objects`: OccupantId, Money, slot number parsing
//! - `invariants`: Checks asserted after every mutation
//! - `errors`: AllocationError, PricingError, ConfigError

pub mod allocator;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use allocator::*;
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
