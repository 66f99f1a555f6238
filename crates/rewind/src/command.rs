//! Parsing of console input lines into engine intents.

use derive_more::Display;
use std::str::FromStr;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Mark the square at this index (0-8).
    Play(usize),
    /// Move the cursor to this step of history.
    Jump(usize),
    /// Redraw the current view.
    Show,
    /// Print the command summary.
    Help,
    /// Leave the session.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Blank line.
    #[display("No command given")]
    Empty,
    /// Unrecognised command word.
    #[display("Unknown command '{}' (type 'help')", _0)]
    Unknown(String),
    /// The command needs a number argument.
    #[display("'{}' expects a number", _0)]
    MissingArgument(String),
    /// The argument is not a non-negative integer.
    #[display("'{}' is not a number", _0)]
    BadNumber(String),
    /// Extra words after a complete command.
    #[display("Unexpected '{}' after command", _0)]
    TrailingInput(String),
}

impl std::error::Error for CommandError {}

/// Command summary shown by `help`.
pub const HELP: &str = "\
Commands:
  play N | p N | N   mark square N (0-8, row-major)
  jump N | j N       go to step N of the move list
  show               redraw the board
  help               show this summary
  quit | q           leave";

fn number(word: &str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or_else(|| CommandError::MissingArgument(word.to_string()))?;
    arg.parse().map_err(|_| CommandError::BadNumber(arg.to_string()))
}

impl FromStr for Input {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(CommandError::Empty);
        };
        let input = match word.to_lowercase().as_str() {
            "play" | "p" => Input::Play(number(word, words.next())?),
            "jump" | "j" => Input::Jump(number(word, words.next())?),
            "show" | "s" => Input::Show,
            "help" | "h" | "?" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            _ if word.chars().all(|c| c.is_ascii_digit()) => Input::Play(number(word, Some(word))?),
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        if let Some(extra) = words.next() {
            return Err(CommandError::TrailingInput(extra.to_string()));
        }
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_forms() {
        assert_eq!("play 4".parse::<Input>(), Ok(Input::Play(4)));
        assert_eq!("P 0".parse::<Input>(), Ok(Input::Play(0)));
        assert_eq!("  8 ".parse::<Input>(), Ok(Input::Play(8)));
    }

    #[test]
    fn test_out_of_range_square_still_parses() {
        // The engine decides what is on the board.
        assert_eq!("play 12".parse::<Input>(), Ok(Input::Play(12)));
    }

    #[test]
    fn test_jump_and_words() {
        assert_eq!("jump 3".parse::<Input>(), Ok(Input::Jump(3)));
        assert_eq!("j 0".parse::<Input>(), Ok(Input::Jump(0)));
        assert_eq!("show".parse::<Input>(), Ok(Input::Show));
        assert_eq!("?".parse::<Input>(), Ok(Input::Help));
        assert_eq!("Quit".parse::<Input>(), Ok(Input::Quit));
    }

    #[test]
    fn test_errors() {
        assert_eq!("".parse::<Input>(), Err(CommandError::Empty));
        assert_eq!("jump".parse::<Input>(), Err(CommandError::MissingArgument("jump".into())));
        assert_eq!("play x".parse::<Input>(), Err(CommandError::BadNumber("x".into())));
        assert_eq!("play -1".parse::<Input>(), Err(CommandError::BadNumber("-1".into())));
        assert_eq!("undo".parse::<Input>(), Err(CommandError::Unknown("undo".into())));
        assert_eq!("play 1 2".parse::<Input>(), Err(CommandError::TrailingInput("2".into())));
        assert_eq!("quit now".parse::<Input>(), Err(CommandError::TrailingInput("now".into())));
    }
}
