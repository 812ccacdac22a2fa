//! Text rendering for the console: the board grid, prompts and messages.
//!
//! The view only reads the board through [`Board::cell_state`]; it never sees
//! the engine's storage.

use derive_more::{Display, Error};
use itertools::Itertools;
use reversi_engine::{
    format_grid, Board, Cell, Game, PlaceError, Player, Termination, EDGE_LENGTH,
};
use std::fmt;

use crate::parse::ParseMoveError;

/// Characters drawn for Player A's and Player B's pieces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Symbols {
    pub a: char,
    pub b: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self { a: 'X', b: 'O' }
    }
}

#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display(fmt = "symbols must be two distinct characters other than '.'")]
pub struct ParseSymbolsError;

/// Parse two characters, Player A's first: "XO", "#@".
impl std::str::FromStr for Symbols {
    type Err = ParseSymbolsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let usable = |c: char| c != '.' && !c.is_whitespace();
        match s.chars().collect::<Vec<_>>().as_slice() {
            &[a, b] if a != b && usable(a) && usable(b) => Ok(Self { a, b }),
            _ => Err(ParseSymbolsError),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleView {
    symbols: Symbols,
}

impl ConsoleView {
    pub fn new(symbols: Symbols) -> Self {
        Self { symbols }
    }

    fn symbol(&self, cell: Cell) -> char {
        cell.to_char(self.symbols.a, self.symbols.b)
    }

    /// The name players see, numbered the way the prompts number them.
    pub fn player_name(&self, player: Player) -> &'static str {
        match player {
            Player::A => "PLAYER1",
            Player::B => "PLAYER2",
        }
    }

    /// Draw the board with 1-based row and column labels.
    pub fn render<'a>(&'a self, board: &'a Board) -> Grid<'a> {
        Grid { view: self, board }
    }

    pub fn prompt(&self, player: Player) -> String {
        format!(
            "{} ({}), enter the position of your piece (row column): ",
            self.player_name(player),
            self.symbol(Cell::Taken(player))
        )
    }

    pub fn parse_error(&self, err: &ParseMoveError) -> String {
        format!("Cannot read that move: {}. Enter the row and the column, e.g. 3 4.", err)
    }

    /// Explain a rejected placement. Illegal-but-on-board moves list the legal ones.
    pub fn rejection(&self, err: &PlaceError, game: &Game) -> String {
        match err {
            PlaceError::OutOfRange { .. } => format!(
                "Row and column need to be between 1 and {}: {}.",
                EDGE_LENGTH, err
            ),
            PlaceError::Occupied(_) | PlaceError::NoCapture(_) => format!(
                "Invalid move, {}. Legal moves: {}",
                err,
                game.legal_moves().map(|loc| loc.to_string()).join(" ")
            ),
        }
    }

    pub fn pass(&self, player: Player) -> String {
        format!("{} has no legal move and passes.", self.player_name(player))
    }

    pub fn game_over(&self, termination: Termination) -> String {
        format!("Game over: {}.", termination)
    }
}

/// A board as drawn by a [`ConsoleView`].
pub struct Grid<'a> {
    view: &'a ConsoleView,
    board: &'a Board,
}

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = EDGE_LENGTH as i32;
        let pieces = (1..=edge)
            .flat_map(|row| (1..=edge).map(move |column| (row, column)))
            .map(|(row, column)| self.view.symbol(self.board.cell_state(row, column)));

        format_grid(pieces, f)
    }
}

impl fmt::Display for Symbols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_starting_board() {
        let view = ConsoleView::new("#@".parse().unwrap());
        let expected = "   1 2 3 4 5 6 7 8\n\
                        1  . . . . . . . .\n\
                        2  . . . . . . . .\n\
                        3  . . . . . . . .\n\
                        4  . . . # @ . . .\n\
                        5  . . . @ # . . .\n\
                        6  . . . . . . . .\n\
                        7  . . . . . . . .\n\
                        8  . . . . . . . .";
        assert_eq!(view.render(&Board::new()).to_string(), expected);
    }

    #[test]
    fn parse_symbols() {
        assert_eq!("XO".parse(), Ok(Symbols::default()));
        assert_eq!("XX".parse::<Symbols>(), Err(ParseSymbolsError));
        assert_eq!("X.".parse::<Symbols>(), Err(ParseSymbolsError));
        assert_eq!("XOZ".parse::<Symbols>(), Err(ParseSymbolsError));
        assert_eq!(Symbols::default().to_string(), "XO");
    }

    #[test]
    fn rejection_lists_legal_moves() {
        let game = Game::default();
        let view = ConsoleView::default();
        let err = PlaceError::NoCapture(reversi_engine::Location::new(1, 1).unwrap());
        assert_eq!(
            view.rejection(&err, &game),
            "Invalid move, (1,1) does not capture anything. Legal moves: (3,5) (4,6) (5,3) (6,4)"
        );
    }

    #[test]
    fn prompt_names_the_player() {
        let view = ConsoleView::default();
        assert_eq!(
            view.prompt(Player::B),
            "PLAYER2 (O), enter the position of your piece (row column): "
        );
    }
}
