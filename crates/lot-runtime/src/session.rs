//! Console session: the presentation layer over `ParkingLotApi`.
//!
//! Turns commands into API calls and returns the text to print. Quotes
//! produced by parking wait in a queue until `pay` settles the oldest one.

use std::collections::VecDeque;

use lot_allocator::{ParkingLotApi, ParkingLotService, PriceQuote};
use tracing::debug;

use crate::commands::{parse_command, Command, HELP};
use crate::render;

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep reading.
    Output(String),
    /// Nothing to print.
    Silent,
    /// Leave the loop.
    Quit,
}

/// One interactive session over a single lot.
pub struct Session {
    service: ParkingLotService,
    unpaid: VecDeque<PriceQuote>,
}

impl Session {
    pub fn new(service: ParkingLotService) -> Self {
        Self {
            service,
            unpaid: VecDeque::new(),
        }
    }

    pub fn service(&self) -> &ParkingLotService {
        &self.service
    }

    /// Quotes not yet paid, oldest first.
    pub fn unpaid(&self) -> impl Iterator<Item = &PriceQuote> {
        self.unpaid.iter()
    }

    /// Board plus stats, shown at startup and after every mutation.
    pub fn overview(&self) -> String {
        format!(
            "{}\n{}",
            render::render_board(self.service.allocator()),
            render::render_stats(&self.service.stats())
        )
    }

    /// Parses and executes one input line.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match parse_command(line) {
            Ok(Some(command)) => self.handle(command),
            Ok(None) => Outcome::Silent,
            Err(e) => Outcome::Output(format!("Error: {}", e)),
        }
    }

    pub fn handle(&mut self, command: Command) -> Outcome {
        debug!(?command, "Handling command");
        match command {
            Command::Park { occupant, slot } => match self.service.allocate(&occupant, slot) {
                Ok(receipt) => {
                    let mut text = format!("Vehicle {} parked at spot {}", receipt.entry.occupant, slot);
                    if let Some(quote) = receipt.quote {
                        text.push('\n');
                        text.push_str(&render::render_quote(&quote));
                        self.unpaid.push_back(quote);
                    }
                    Outcome::Output(format!("{}\n{}", text, self.overview()))
                }
                Err(e) => Outcome::Output(format!("Error: {}", e)),
            },
            Command::Remove { slot } => match self.service.release(slot) {
                Ok(entry) => Outcome::Output(format!(
                    "Vehicle {} removed from spot {}\n{}",
                    entry.occupant,
                    slot,
                    self.overview()
                )),
                Err(e) => Outcome::Output(format!("Error: {}", e)),
            },
            Command::Reserve { slot } => match self.service.reserve(slot) {
                Ok(()) => Outcome::Output(format!("Spot {} reserved\n{}", slot, self.overview())),
                Err(e) => Outcome::Output(format!("Error: {}", e)),
            },
            Command::Pay => self.pay_oldest(),
            Command::Stats { json: true } => match serde_json::to_string(&self.service.stats()) {
                Ok(json) => Outcome::Output(json),
                Err(e) => Outcome::Output(format!("Error: {}", e)),
            },
            Command::Stats { json: false } => {
                Outcome::Output(render::render_stats(&self.service.stats()))
            }
            Command::History => Outcome::Output(render::render_history(&self.service.history())),
            Command::Board => Outcome::Output(self.overview()),
            Command::Help => Outcome::Output(HELP.to_string()),
            Command::Quit => Outcome::Quit,
        }
    }

    fn pay_oldest(&mut self) -> Outcome {
        let Some(quote) = self.unpaid.front() else {
            return Outcome::Output("Nothing to pay.".to_string());
        };
        match self.service.settle_payment(quote) {
            Ok(receipt) => {
                self.unpaid.pop_front();
                Outcome::Output(render::render_receipt(&receipt))
            }
            // Quote stays queued so the user can retry.
            Err(e) => Outcome::Output(format!("Error: {}", e)),
        }
    }
}
