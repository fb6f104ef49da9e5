//! Driver commands read from stdin

use std::str::FromStr;

use thiserror::Error;

/// One line of driver input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the address field text
    Edit(String),
    /// Commit the given text, or the address field text
    Go(Option<String>),
    Back,
    Forward,
    Reload,
    /// Scroll the page to a vertical offset
    Scroll(f64),
    /// Print the navigation state as JSON
    State,
    /// Print the screen layout
    Layout,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid scroll offset: {0}")]
    InvalidOffset(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name {
            // Edit text is taken verbatim, spaces included
            "edit" => Ok(Command::Edit(rest.to_string())),
            "go" if rest.is_empty() => Ok(Command::Go(None)),
            "go" => Ok(Command::Go(Some(rest.to_string()))),
            "back" => Ok(Command::Back),
            "forward" => Ok(Command::Forward),
            "reload" => Ok(Command::Reload),
            "scroll" if rest.is_empty() => Err(CommandError::MissingArgument("offset")),
            "scroll" => rest
                .parse()
                .map(Command::Scroll)
                .map_err(|_| CommandError::InvalidOffset(rest.to_string())),
            "state" => Ok(Command::State),
            "layout" => Ok(Command::Layout),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub const COMMAND_HELP: &str = "\
COMMANDS:
    edit <text>       Set the address field text
    go [text]         Commit text (or the address field) as the address
    back              Go back
    forward           Go forward
    reload            Reload the page
    scroll <offset>   Scroll the page to a vertical offset
    state             Print the navigation state as JSON
    layout            Print the screen layout
    help              Show this help
    quit              Exit
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("back".parse::<Command>(), Ok(Command::Back));
        assert_eq!(" forward ".parse::<Command>(), Ok(Command::Forward));
        assert_eq!("reload".parse::<Command>(), Ok(Command::Reload));
        assert_eq!("state".parse::<Command>(), Ok(Command::State));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_edit_keeps_spaces() {
        assert_eq!(
            "edit rust borrow checker".parse::<Command>(),
            Ok(Command::Edit("rust borrow checker".into()))
        );
        assert_eq!("edit".parse::<Command>(), Ok(Command::Edit(String::new())));
    }

    #[test]
    fn test_parse_go() {
        assert_eq!("go".parse::<Command>(), Ok(Command::Go(None)));
        assert_eq!(
            "go example.com".parse::<Command>(),
            Ok(Command::Go(Some("example.com".into())))
        );
    }

    #[test]
    fn test_parse_scroll() {
        assert_eq!("scroll 60".parse::<Command>(), Ok(Command::Scroll(60.0)));
        assert_eq!("scroll -5.5".parse::<Command>(), Ok(Command::Scroll(-5.5)));
        assert_eq!(
            "scroll".parse::<Command>(),
            Err(CommandError::MissingArgument("offset"))
        );
        assert_eq!(
            "scroll down".parse::<Command>(),
            Err(CommandError::InvalidOffset("down".into()))
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "open example.com".parse::<Command>(),
            Err(CommandError::Unknown("open".into()))
        );
    }
}
