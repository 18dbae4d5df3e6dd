//! Terminal host for `todo-core`.
//!
//! # Overview
//! Executes the core's requests over HTTP with ureq, prints the list on
//! every render and turns typed lines into form submissions and item actions.

pub mod command;
pub mod terminal;
pub mod transport;

use std::io::{BufRead, Write};

use todo_core::{TodoClient, Transport, View};
use tracing::debug;

use crate::command::{Command, USAGE};
use crate::terminal::TerminalForm;

pub use terminal::TerminalView;
pub use transport::UreqTransport;

/// Read commands from `input` until `quit` or end of input.
///
/// Failed operations are already reported by the client; the session just
/// keeps going with whatever is on screen.
pub fn run_session<T, V, A, R, O>(
    client: &mut TodoClient<T, V, TerminalForm<A>>,
    input: R,
    out: &mut O,
) -> std::io::Result<()>
where
    T: Transport,
    V: View,
    A: Write,
    R: BufRead,
    O: Write,
{
    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{err}\n{USAGE}")?;
                continue;
            }
        };
        let result = match command {
            Command::Add(title) => {
                client.form_mut().set_title(&title);
                client.submit()
            }
            Command::Item(action) => client.dispatch(action),
            Command::Refresh => client.refresh(),
            Command::Help => {
                writeln!(out, "{USAGE}")?;
                Ok(())
            }
            Command::Quit => break,
        };
        if let Err(err) = result {
            debug!(error = %err, "command did not complete");
        }
    }
    Ok(())
}
