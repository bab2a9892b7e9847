use core::str::FromStr;
use sweepkit_core::{Coord, Coord2, Difficulty, GameError};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  r ROW COL     reveal a cell
  f ROW COL     flag or unflag a cell
  n [LEVEL]     new game, optionally at easy, medium or hard
  h             show this help
  q             quit";

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    /// `None` replays the current board shape.
    NewGame(Option<Difficulty>),
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Type a command, h for help")]
    Empty,
    #[error("Unknown command {0:?}, h for help")]
    UnknownCommand(String),
    #[error("Expected a row and a column")]
    MissingCoords,
    #[error("Not a valid coordinate: {0:?}")]
    BadNumber(String),
    #[error("Unexpected input after the command: {0:?}")]
    TrailingInput(String),
    #[error(transparent)]
    Difficulty(#[from] GameError),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(ParseError::Empty);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Command::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Command::Flag(parse_coords(&mut words)?),
            "n" | "new" => {
                let level = words.next().map(str::parse::<Difficulty>).transpose()?;
                Command::NewGame(level)
            }
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(ParseError::UnknownCommand(name.to_owned())),
        };

        match words.next() {
            Some(extra) => Err(ParseError::TrailingInput(extra.to_owned())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, ParseError> {
    let row = parse_coord(words.next())?;
    let col = parse_coord(words.next())?;
    Ok((row, col))
}

fn parse_coord(word: Option<&str>) -> Result<Coord, ParseError> {
    let word = word.ok_or(ParseError::MissingCoords)?;
    word.parse().map_err(|_| ParseError::BadNumber(word.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cell_commands() {
        assert_eq!("r 3 4".parse::<Command>(), Ok(Command::Reveal((3, 4))));
        assert_eq!("  FLAG 0   8 ".parse::<Command>(), Ok(Command::Flag((0, 8))));
    }

    #[test]
    fn parses_new_game_with_and_without_level() {
        assert_eq!("n".parse::<Command>(), Ok(Command::NewGame(None)));
        assert_eq!(
            "new hard".parse::<Command>(),
            Ok(Command::NewGame(Some(Difficulty::Hard)))
        );
        assert_eq!(
            "n insane".parse::<Command>(),
            Err(ParseError::Difficulty(GameError::UnknownDifficulty(
                "insane".to_owned()
            )))
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!("".parse::<Command>(), Err(ParseError::Empty));
        assert_eq!("r 1".parse::<Command>(), Err(ParseError::MissingCoords));
        assert_eq!(
            "r 1 x".parse::<Command>(),
            Err(ParseError::BadNumber("x".to_owned()))
        );
        assert_eq!(
            "f -1 2".parse::<Command>(),
            Err(ParseError::BadNumber("-1".to_owned()))
        );
        assert_eq!(
            "q now".parse::<Command>(),
            Err(ParseError::TrailingInput("now".to_owned()))
        );
        assert_eq!(
            "dig 1 1".parse::<Command>(),
            Err(ParseError::UnknownCommand("dig".to_owned()))
        );
    }
}
