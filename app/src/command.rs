//! Line commands understood by the shell.

use std::str::FromStr;

use crate::error::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit a search; empty text lists everyone.
    Search(String),
    /// Edit the search box without submitting.
    Type(String),
    Open(u32),
    Close,
    Next,
    Prev,
    Favorite,
    Go(String),
    Back,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  search <text>   s   search by name (empty text lists everyone)
  type <text>         edit the search box without submitting
  open <id>       o   show one character
  close           c   back to the list
  next            n   next page
  prev            p   previous page
  fav             f   toggle favorite on the shown character
  go <url>            open a relative URL such as /?q=Rick&p=2
  back            b   previous history entry
  help            ?   this text
  quit            q   exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "search" | "s" => Command::Search(rest.to_string()),
            "type" => Command::Type(rest.to_string()),
            "open" | "o" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("open"));
                }
                let id = rest
                    .parse()
                    .map_err(|_| CommandError::InvalidId(rest.to_string()))?;
                Command::Open(id)
            }
            "close" | "c" => Command::Close,
            "next" | "n" => Command::Next,
            "prev" | "p" => Command::Prev,
            "fav" | "f" => Command::Favorite,
            "go" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("go"));
                }
                Command::Go(rest.to_string())
            }
            "back" | "b" => Command::Back,
            "help" | "?" | "" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}
