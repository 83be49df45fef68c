//! Text rendering of lot state for the console.

use std::fmt::{self, Write as _};

use chrono::{Local, TimeZone};
use lot_allocator::{
    HistoryEntry, LotStats, PaymentReceipt, PriceQuote, SlotAllocator, SlotState, Timestamp,
};

/// Slots per board row.
const BOARD_WIDTH: usize = 5;

/// Slots drawn before the board is cut short.
pub const BOARD_MAX_SLOTS: u32 = 200;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn render_stats(stats: &LotStats) -> String {
    format!(
        "Total: {} | Available: {} | Occupied: {} | Reserved: {}",
        stats.total, stats.available, stats.occupied, stats.reserved
    )
}

/// Formats a millisecond timestamp in `tz`; falls back to the raw number.
pub fn format_timestamp<Tz>(ts: Timestamp, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    i64::try_from(ts)
        .ok()
        .and_then(|ms| tz.timestamp_millis_opt(ms).single())
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// `<time>: Vehicle <id> parked|removed at spot <n>`
pub fn render_history_entry<Tz>(entry: &HistoryEntry, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!(
        "{}: Vehicle {} {} at spot {}",
        format_timestamp(entry.timestamp, tz),
        entry.occupant,
        entry.kind,
        entry.slot
    )
}

/// History log in local time, newest first.
pub fn render_history(entries: &[HistoryEntry]) -> String {
    render_history_in(entries, &Local)
}

pub fn render_history_in<Tz>(entries: &[HistoryEntry], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if entries.is_empty() {
        return "No history yet.".to_string();
    }
    entries
        .iter()
        .map(|e| render_history_entry(e, tz))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Grid of slots: `[ 1]` empty, `[#2]` occupied, `[R3]` reserved.
pub fn render_board(lot: &SlotAllocator) -> String {
    let total = lot.total();
    if total == 0 {
        return "(lot has no slots)".to_string();
    }
    let shown = total.min(BOARD_MAX_SLOTS);
    let width = shown.to_string().len();

    let mut out = String::new();
    for (i, (slot, state)) in lot.slots().take(shown as usize).enumerate() {
        if i > 0 {
            out.push(if i % BOARD_WIDTH == 0 { '\n' } else { ' ' });
        }
        let marker = match state {
            SlotState::Empty => ' ',
            SlotState::Occupied(_) => '#',
            SlotState::Reserved => 'R',
        };
        // Writing to a String cannot fail.
        let _ = write!(out, "[{}{:>width$}]", marker, slot, width = width);
    }
    if total > shown {
        let _ = write!(out, "\n... {} more slots not shown", total - shown);
    }
    out
}

pub fn render_quote(quote: &PriceQuote) -> String {
    format!(
        "Payment for Vehicle {} | Spot Number: {} | {} (type 'pay' to settle)",
        quote.occupant, quote.slot, quote.amount
    )
}

pub fn render_receipt(receipt: &PaymentReceipt) -> String {
    format!(
        "Payment of {} processed for Vehicle {} at Spot {} (ref {})",
        receipt.quote.amount, receipt.quote.occupant, receipt.quote.slot, receipt.reference
    )
}
