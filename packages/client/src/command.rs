//! Parsing of interactive commands typed at the prompt.
//!
//! This module contains pure functions that implement the input
//! grammar without side effects, making them easy to test.

use marubatsu_shared::protocol::ClientEvent;
use thiserror::Error;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/join <room>` - join (or create) a room
    Join(String),
    /// `/move <0-8>` - place a mark on the given cell
    Move(usize),
    /// `/reset` - clear the board, keeping player assignments
    Reset,
    /// `/help` - show the command list
    Help,
    /// `/quit` - close the session
    Quit,
}

/// Input that does not form a valid command
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command '{0}'. Type /help for the command list.")]
    UnknownCommand(String),

    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(&'static str),

    #[error("Usage: /join <room>")]
    MissingRoom,

    #[error("Usage: /move <0-8>")]
    MissingIndex,

    #[error("'{0}' is not a cell number (expected 0-8)")]
    InvalidIndex(String),
}

/// Parse one trimmed, non-empty input line.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let mut parts = line.split_whitespace();
    let head = parts.next().unwrap_or("");
    let rest: Vec<&str> = parts.collect();

    match head {
        "/join" => match rest.first() {
            Some(room) => Ok(Command::Join((*room).to_string())),
            None => Err(ParseError::MissingRoom),
        },
        "/move" => match rest.first() {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|index| *index < 9)
                .map(Command::Move)
                .ok_or_else(|| ParseError::InvalidIndex((*raw).to_string())),
            None => Err(ParseError::MissingIndex),
        },
        "/reset" => {
            if rest.is_empty() {
                Ok(Command::Reset)
            } else {
                Err(ParseError::UnexpectedArgument("/reset"))
            }
        }
        "/help" => Ok(Command::Help),
        "/quit" | "/exit" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

impl Command {
    /// The wire event this command produces, if any. `Help` and `Quit`
    /// are handled locally and send nothing.
    pub fn to_event(&self) -> Option<ClientEvent> {
        match self {
            Command::Join(room) => Some(ClientEvent::JoinRoom {
                room_id: room.clone(),
            }),
            Command::Move(index) => Some(ClientEvent::MakeMove { index: *index }),
            Command::Reset => Some(ClientEvent::ResetGame),
            Command::Help | Command::Quit => None,
        }
    }
}

/// The `/help` text.
pub const HELP_TEXT: &str = "\
Commands:
  /join <room>   join (or create) a room
  /move <0-8>    place your mark on a cell
  /reset         restart the game in your room
  /help          show this list
  /quit          leave
";
