//! Line commands and how they parse.

use std::path::PathBuf;

use crate::error::{AppError, AppResult};

pub const HELP: &str = "\
Commands:
  new             write a new post
  edit <n|id>     edit a post (Enter keeps a field, :cancel stops editing)
  form            reopen the form in its current mode
  cancel          leave edit mode
  delete <n|id>   ask to delete a post
  yes | no        confirm or cancel a pending delete
  list            show the board
  export <path>   write the board as an HTML page
  help            show this help
  quit            exit
";

/// A post reference: a 1-based list position or a full id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostRef {
    Position(usize),
    Id(String),
}

impl PostRef {
    fn parse(raw: &str) -> Self {
        match raw.parse::<usize>() {
            Ok(n) if n > 0 => PostRef::Position(n),
            _ => PostRef::Id(raw.to_string()),
        }
    }
}

/// A user intent typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Edit(PostRef),
    Form,
    CancelEdit,
    Delete(PostRef),
    ConfirmDelete,
    CancelDelete,
    List,
    Export(PathBuf),
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "new" | "add" => Command::New,
            "edit" => Command::Edit(PostRef::parse(required(rest, "post number or id")?)),
            "form" => Command::Form,
            "cancel" => Command::CancelEdit,
            "delete" | "rm" => Command::Delete(PostRef::parse(required(rest, "post number or id")?)),
            "yes" | "y" => Command::ConfirmDelete,
            "no" | "n" => Command::CancelDelete,
            "list" | "ls" => Command::List,
            "export" => Command::Export(PathBuf::from(required(rest, "output path")?)),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(AppError::UnknownCommand(verb.to_string())),
        };

        Ok(Some(command))
    }
}

fn required<'a>(value: &'a str, name: &'static str) -> AppResult<&'a str> {
    if value.is_empty() {
        return Err(AppError::MissingArgument(name));
    }
    Ok(value)
}
