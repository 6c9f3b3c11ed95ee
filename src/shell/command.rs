//! Shell command parsing.
//!
//! One command per input line. Parsing is total: every line yields either a
//! [`Command`] or a [`CommandError`] describing what was wrong.

use crate::model::ProductId;
use thiserror::Error;

/// A user intent read from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-render the page window.
    List,
    /// Apply a filter; empty text clears it.
    Search(String),
    /// Extend the page window.
    More,
    /// Show details for one product.
    Info(ProductId),
    /// Rename a product.
    Edit {
        /// Target product.
        id: ProductId,
        /// New title, untrimmed.
        title: String,
    },
    /// Delete a product, subject to confirmation.
    Delete(ProductId),
    /// Print command summary.
    Help,
    /// Leave the shell.
    Quit,
}

/// Rejected input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// First word is not a known command.
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    /// Command needs a product id but none was given.
    #[error("'{command}' needs a product id")]
    MissingId {
        /// Command name as typed.
        command: String,
    },

    /// Product id is not a non-negative integer.
    #[error("'{raw}' is not a valid product id")]
    InvalidId {
        /// The offending text.
        raw: String,
    },
}

impl Command {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` for unknown commands and missing or
    /// non-numeric ids.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let (word, rest) = split_word(line.trim());

        match word.to_ascii_lowercase().as_str() {
            "" | "list" | "ls" => Ok(Command::List),
            "search" | "find" | "/" => Ok(Command::Search(rest.to_string())),
            "more" | "next" => Ok(Command::More),
            "info" => parse_id(word, rest).map(Command::Info),
            "edit" | "update" => {
                let (raw_id, title) = split_word(rest);
                let id = parse_id(word, raw_id)?;
                Ok(Command::Edit {
                    id,
                    title: title.to_string(),
                })
            }
            "delete" | "rm" => parse_id(word, rest).map(Command::Delete),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

/// Split off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn parse_id(command: &str, raw: &str) -> Result<ProductId, CommandError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CommandError::MissingId {
            command: command.to_string(),
        });
    }
    raw.parse().map_err(|_| CommandError::InvalidId {
        raw: raw.to_string(),
    })
}
