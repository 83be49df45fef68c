//! Ports layer for the parking lot.
//!
//! - Inbound (Driving) port: API exposed to the presentation layer
//! - Outbound (Driven) ports: clock, pricing collaborator, observers

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
