//! Line-oriented terminal front end.
//!
//! Reads one command per line, turns it into session events, and prints the
//! ledger after every change. Refused events print nothing special; the
//! ledger simply looks the same.

mod commands;
mod render;

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub use commands::{parse_command, Command, ParseError, COMMANDS_HELP};
pub use render::render_view;

use crate::core::Banker;

/// Drive `banker` from `input` until end of input or `quit`.
///
/// ```
/// use banker::cli::run;
/// use banker::core::{Banker, BankerConfig};
///
/// let mut banker = Banker::new(BankerConfig::default());
/// let mut output = Vec::new();
/// run(&mut banker, "setup\nplayer Alice 10\nconfirm\n".as_bytes(), &mut output).unwrap();
///
/// assert_eq!(banker.ledger().balance("Alice"), Some(10.0));
/// ```
pub fn run(banker: &mut Banker, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
    write!(output, "{}", render_view(&banker.view()))?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            break;
        }

        match parse_command(&line) {
            Ok(Command::Events(events)) => {
                for event in events {
                    banker.dispatch(event);
                }
                write!(output, "{}", render_view(&banker.view()))?;
            }
            Ok(Command::Show) => write!(output, "{}", render_view(&banker.view()))?,
            Ok(Command::Json) => {
                let json = serde_json::to_string_pretty(&banker.view())?;
                writeln!(output, "{json}")?;
            }
            Ok(Command::Help) => write!(output, "{COMMANDS_HELP}")?,
            Ok(Command::Quit) => break,
            Err(err) => writeln!(output, "{err}")?,
        }
    }

    writeln!(output)?;
    Ok(())
}
