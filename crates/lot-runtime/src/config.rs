//! # Runtime Configuration
//!
//! Environment first, command-line flags override.

use clap::Parser;
use lot_allocator::domain::ConfigError;
use lot_allocator::{AllocatorConfig, Money};

use crate::telemetry::LogConfig;

/// Console front end for a single parking lot.
#[derive(Parser, Debug, Default)]
#[command(name = "lot-runtime")]
#[command(about = "Interactive parking lot: park, remove and reserve slots")]
pub struct Args {
    /// Number of slots (overrides LOT_TOTAL_SLOTS)
    #[arg(short, long)]
    pub slots: Option<u32>,

    /// Allow each occupant to hold at most one slot
    #[arg(long)]
    pub unique_occupants: bool,

    /// Seed for the random pricing stub
    #[arg(long)]
    pub seed: Option<u64>,

    /// Charge a flat rate in cents instead of a random price
    #[arg(long)]
    pub flat_rate_cents: Option<u64>,

    /// Log filter (overrides LOT_LOG_LEVEL / RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit JSON logs on stderr
    #[arg(long)]
    pub json_logs: bool,
}

/// How the pricing collaborator is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingMode {
    /// Random price, optionally seeded.
    Random { seed: Option<u64> },
    /// Same price every time.
    Flat(Money),
}

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub allocator: AllocatorConfig,
    pub pricing: PricingMode,
    pub logging: LogConfig,
}

impl RuntimeConfig {
    /// Reads the environment, then applies command-line overrides.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        Ok(Self::merge(
            AllocatorConfig::from_env()?,
            LogConfig::from_env(),
            args,
        ))
    }

    /// Applies `args` on top of already-loaded environment settings.
    pub fn merge(mut allocator: AllocatorConfig, mut logging: LogConfig, args: &Args) -> Self {
        if let Some(slots) = args.slots {
            allocator.total_slots = slots;
        }
        if args.unique_occupants {
            allocator.unique_occupants = true;
        }
        if let Some(level) = &args.log_level {
            logging.log_level = level.clone();
        }
        if args.json_logs {
            logging.json_logs = true;
        }

        let pricing = match args.flat_rate_cents {
            Some(cents) => PricingMode::Flat(Money::from_cents(cents)),
            None => PricingMode::Random { seed: args.seed },
        };

        Self {
            allocator,
            pricing,
            logging,
        }
    }
}
