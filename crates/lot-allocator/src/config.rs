//! Configuration for the slot allocator.

use crate::domain::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;

/// Default lot size.
pub const DEFAULT_TOTAL_SLOTS: u32 = 15;

/// Allocator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    /// Number of slots (fixed for the lifetime of the allocator)
    pub total_slots: u32,
    /// Reject an occupant already parked in another slot
    pub unique_occupants: bool,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            total_slots: DEFAULT_TOTAL_SLOTS,
            unique_occupants: false,
        }
    }
}

impl AllocatorConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LOT_TOTAL_SLOTS`: Number of slots (default: 15)
    /// - `LOT_UNIQUE_OCCUPANTS`: One slot per occupant (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("LOT_TOTAL_SLOTS") {
            config.total_slots = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "LOT_TOTAL_SLOTS",
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup("LOT_UNIQUE_OCCUPANTS") {
            config.unique_occupants = parse_flag(&raw).ok_or(ConfigError::InvalidValue {
                key: "LOT_UNIQUE_OCCUPANTS",
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}

/// Parses `true/false/1/0/yes/no` (case-insensitive).
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
