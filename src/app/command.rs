//! Command parsing for the command line

use thiserror::Error;

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Quit the application: :q or :quit
    Quit,
    /// Show help: :help or :h
    Help,
    /// Toggle light/dark display: :theme
    Theme,
    /// Set the ingredient query and search: :search banana, milk
    Search(String),
    /// Show favorited recipes: :favorites
    Favorites,
    /// Open a recipe by name: :open smoothie
    Open(String),
    /// Clear message: (empty command)
    Nop,
}

/// Why a command line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument for :{0}")]
    MissingArgument(&'static str),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let input = input.trim();

    if input.is_empty() {
        return Ok(Command::Nop);
    }

    // Split into command and arguments
    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(str::trim).unwrap_or("");

    match cmd.to_lowercase().as_str() {
        "quit" | "q" => Ok(Command::Quit),
        "help" | "h" | "?" => Ok(Command::Help),
        "theme" | "t" | "dark" => Ok(Command::Theme),
        // A blank search is valid and lists every recipe
        "search" | "s" | "find" => Ok(Command::Search(args.to_string())),
        "favorites" | "favs" | "fav" => Ok(Command::Favorites),
        "open" | "o" => {
            if args.is_empty() {
                Err(CommandError::MissingArgument("open"))
            } else {
                Ok(Command::Open(args.to_string()))
            }
        }
        _ => Err(CommandError::Unknown(cmd.to_string())),
    }
}
