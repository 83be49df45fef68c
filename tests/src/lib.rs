//! # Lot Allocator Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs   # Worked examples on a 3-slot lot
//!     ├── properties.rs  # proptest state-machine properties
//!     └── flows.rs       # Console session end to end
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p lot-tests
//! cargo test -p lot-tests integration::properties::
//! ```

pub mod integration;
