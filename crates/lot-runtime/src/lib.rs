//! # Lot Runtime
//!
//! Console front end and composition root for `lot-allocator`.
//!
//! ## Startup Sequence
//!
//! 1. Parse command-line flags
//! 2. Load configuration (environment, then flags)
//! 3. Install the tracing subscriber (stderr)
//! 4. Build the service: system clock, pricing stub, tracing observer
//! 5. Read commands from stdin until `quit` or end of input
//!
//! ## Modules
//!
//! - `config` - Flags and environment merged into `RuntimeConfig`
//! - `telemetry` - tracing-subscriber setup
//! - `container` - Service wiring
//! - `commands` - Line parser
//! - `render` - Text views of stats, board, history, quotes
//! - `session` - Presentation state (unpaid quotes) and command dispatch

pub mod commands;
pub mod config;
pub mod container;
pub mod render;
pub mod session;
pub mod telemetry;

pub use config::{Args, PricingMode, RuntimeConfig};
pub use container::build_service;
pub use session::{Outcome, Session};
