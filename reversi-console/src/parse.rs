//! Parsing of typed moves: a row and a column, 1-based.

use derive_more::{Display, Error};

#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum ParseMoveError {
    #[display(fmt = "no move entered")]
    Empty,
    #[display(fmt = "{:?} is not a number", _0)]
    NotANumber(#[error(not(source))] String),
    #[display(fmt = "expected a row and a column, got {} values", _0)]
    WrongArity(#[error(not(source))] usize),
}

/// Parse `"row column"` into a coordinate pair. Values may be separated by
/// whitespace or a comma. Range checking is left to the engine.
pub fn parse_move(line: &str) -> Result<(i32, i32), ParseMoveError> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [] => Err(ParseMoveError::Empty),
        [row, column] => Ok((number(row)?, number(column)?)),
        other => Err(ParseMoveError::WrongArity(other.len())),
    }
}

fn number(part: &str) -> Result<i32, ParseMoveError> {
    part.parse()
        .map_err(|_| ParseMoveError::NotANumber(part.to_string()))
}
