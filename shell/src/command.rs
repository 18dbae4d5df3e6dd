//! Line commands typed at the prompt.

use thiserror::Error;
use todo_core::{Action, ActionKind, TodoId};

pub const USAGE: &str = "\
commands:
  add <title>       add a todo
  complete <id>     mark a todo completed
  delete <id>       delete a todo
  refresh           fetch and redraw the list
  help              show this help
  quit              exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw title, validated by the client on submit.
    Add(String),
    Item(Action),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` needs a todo id")]
    MissingId(ActionKind),
}

impl Command {
    /// Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim_start();
        if line.trim().is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };
        let command = match word {
            "add" => Command::Add(rest.to_string()),
            "refresh" | "list" => Command::Refresh,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                let kind: ActionKind = other
                    .parse()
                    .map_err(|_| CommandError::Unknown(other.to_string()))?;
                let id = rest.trim();
                if id.is_empty() {
                    return Err(CommandError::MissingId(kind));
                }
                Command::Item(Action::new(TodoId::from(id), kind))
            }
        };
        Ok(Some(command))
    }
}
