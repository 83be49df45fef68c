//! Console command parsing.
//!
//! ```text
//! park <vehicle> <slot>    (alias: allocate)
//! remove <slot>            (alias: release)
//! reserve <slot>
//! pay
//! stats [--json]
//! history
//! board
//! help
//! quit                     (alias: exit)
//! ```
//!
//! Missing arguments are passed through as empty values so the allocator
//! reports them as invalid input.

use lot_allocator::{parse_slot_number, AllocationError, SlotNumber};
use thiserror::Error;

/// One parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Park { occupant: String, slot: SlotNumber },
    Remove { slot: SlotNumber },
    Reserve { slot: SlotNumber },
    Pay,
    Stats { json: bool },
    History,
    Board,
    Help,
    Quit,
}

/// Command parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("Unexpected argument '{argument}' for '{command}' (type 'help')")]
    UnexpectedArgument { command: String, argument: String },

    #[error(transparent)]
    Input(#[from] AllocationError),
}

pub const HELP: &str = "\
Commands:
  park <vehicle> <slot>   park a vehicle in an empty slot
  remove <slot>           remove the vehicle from a slot
  reserve <slot>          reserve an empty slot
  pay                     pay the oldest outstanding quote
  stats [--json]          show occupancy counts
  history                 show the event log, newest first
  board                   show every slot
  help                    show this text
  quit                    leave";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let verb = verb.to_lowercase();
    let command = match verb.as_str() {
        "park" | "allocate" => {
            at_most(&verb, &args, 2)?;
            Command::Park {
                occupant: args.first().map(|s| s.to_string()).unwrap_or_default(),
                slot: slot_arg(args.get(1))?,
            }
        }
        "remove" | "release" => {
            at_most(&verb, &args, 1)?;
            Command::Remove {
                slot: slot_arg(args.first())?,
            }
        }
        "reserve" => {
            at_most(&verb, &args, 1)?;
            Command::Reserve {
                slot: slot_arg(args.first())?,
            }
        }
        "stats" => {
            at_most(&verb, &args, 1)?;
            match args.first() {
                None => Command::Stats { json: false },
                Some(&"--json") => Command::Stats { json: true },
                Some(other) => return Err(unexpected(&verb, other)),
            }
        }
        "pay" => at_most(&verb, &args, 0).map(|_| Command::Pay)?,
        "history" => at_most(&verb, &args, 0).map(|_| Command::History)?,
        "board" => at_most(&verb, &args, 0).map(|_| Command::Board)?,
        "help" | "?" => at_most(&verb, &args, 0).map(|_| Command::Help)?,
        "quit" | "exit" => at_most(&verb, &args, 0).map(|_| Command::Quit)?,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn unexpected(verb: &str, argument: &str) -> CommandError {
    CommandError::UnexpectedArgument {
        command: verb.to_string(),
        argument: argument.to_string(),
    }
}

/// Rejects anything past the first `max` arguments.
fn at_most(verb: &str, args: &[&str], max: usize) -> Result<(), CommandError> {
    match args.get(max) {
        Some(extra) => Err(unexpected(verb, extra)),
        None => Ok(()),
    }
}

/// Absent slot argument maps to the "missing" slot number 0.
fn slot_arg(arg: Option<&&str>) -> Result<SlotNumber, CommandError> {
    match arg {
        Some(raw) => Ok(parse_slot_number(raw)?),
        None => Ok(0),
    }
}
