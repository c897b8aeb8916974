//! Terminal command parsing.

use smallvec::{smallvec, SmallVec};
use thiserror::Error;

use crate::core::Event;

/// A parsed line of terminal input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Events to dispatch, in order.
    Events(SmallVec<[Event; 2]>),
    /// Print the ledger.
    Show,
    /// Print the view model as JSON.
    Json,
    Help,
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Command needs an argument that was not given.
    #[error("'{command}' needs an argument (e.g. '{example}')")]
    MissingArgument {
        command: &'static str,
        example: &'static str,
    },

    /// Unrecognized command.
    #[error("unrecognized command '{0}'. Type 'help' to see available commands")]
    UnrecognizedCommand(String),
}

/// Command summary printed by `help`.
pub const COMMANDS_HELP: &str = "\
Ledger:
  select NAME            toggle a player's selection
  amount TEXT            set the amount
  add [AMOUNT]           add (optionally setting the amount first)
  sub [AMOUNT]           subtract
  transfer [AMOUNT]      transfer between the two selected players
  reset                  zero every balance

New game:
  setup                  open the setup form
  player NAME BALANCE    add a candidate
  name TEXT              set the candidate name input
  balance TEXT           set the initial balance input
  submit                 add a candidate from the inputs
  drop NAME              remove a candidate
  confirm                start the game with the candidates
  close                  hide the form, keeping the draft
  cancel                 discard the draft

Other:
  show | json | help | quit
";

/// Parse one line of input.
///
/// ```
/// use banker::cli::{parse_command, Command};
/// use banker::core::Event;
///
/// let Ok(Command::Events(events)) = parse_command("transfer 30") else {
///     panic!("expected events");
/// };
/// assert_eq!(
///     events.as_slice(),
///     &[Event::SetPendingAmount("30".into()), Event::InvokeTransfer]
/// );
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    let one = |event: Event| -> Result<Command, ParseError> {
        Ok(Command::Events(smallvec![event]))
    };
    let with_amount = |event: Event| -> Result<Command, ParseError> {
        if rest.is_empty() {
            Ok(Command::Events(smallvec![event]))
        } else {
            Ok(Command::Events(smallvec![
                Event::SetPendingAmount(rest.to_string()),
                event
            ]))
        }
    };
    let required = |command: &'static str, example: &'static str| {
        if rest.is_empty() {
            Err(ParseError::MissingArgument { command, example })
        } else {
            Ok(rest.to_string())
        }
    };

    match word {
        "" | "show" | "ls" => Ok(Command::Show),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),

        "select" | "s" => one(Event::SelectPlayer(required("select", "select Alice")?)),
        "amount" => one(Event::SetPendingAmount(rest.to_string())),
        "add" | "+" => with_amount(Event::InvokeAdd),
        "sub" | "subtract" | "-" => with_amount(Event::InvokeSubtract),
        "transfer" | "t" => with_amount(Event::InvokeTransfer),
        "reset" => one(Event::InvokeReset),

        "setup" | "new" => one(Event::OpenSetup),
        "close" => one(Event::CloseSetup),
        "cancel" => one(Event::CancelSetup),
        "confirm" => one(Event::ConfirmSetup),
        "name" => one(Event::SetPendingName(rest.to_string())),
        "balance" => one(Event::SetPendingBalance(rest.to_string())),
        "submit" => one(Event::SubmitCandidate),
        "drop" => one(Event::RemoveCandidate(required("drop", "drop Alice")?)),
        "player" => {
            let (name, balance) = rest
                .rsplit_once(char::is_whitespace)
                .ok_or(ParseError::MissingArgument {
                    command: "player",
                    example: "player Alice 1500",
                })?;
            one(Event::AddCandidate {
                name: name.trim().to_string(),
                balance_text: balance.to_string(),
            })
        }

        other => Err(ParseError::UnrecognizedCommand(other.to_string())),
    }
}
