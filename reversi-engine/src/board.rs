//! Board-level Reversi rules: the grid, directional scans and captures.
//!
//! [`Board`] is a plain 64-cell array in row-major order. Every mutation goes
//! through [`Board::place_and_capture`], which either applies a move completely
//! or rejects it without touching the board.

use crate::game::Player;
use crate::location::{Direction, Location, LocationSet};
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;
use tracing::{debug, info, instrument};

/// The contents of a single cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Empty,
    Taken(Player),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Draw this cell as `.` when empty, otherwise as the piece of its owner.
    pub fn to_char(self, a: char, b: char) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Taken(Player::A) => a,
            Cell::Taken(Player::B) => b,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Taken(player)
    }
}

/// The complete contents of the board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [Cell; NUM_SPACES],
}

/// A successfully applied placement.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Placement {
    pub location: Location,
    pub player: Player,
    /// Opponent cells that now belong to `player`.
    pub flipped: LocationSet,
}

/// Why a placement was rejected. The board is never modified by a rejected move.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum PlaceError {
    #[display(fmt = "({},{}) is not on the board", row, column)]
    OutOfRange { row: i32, column: i32 },
    #[display(fmt = "{} is already occupied", _0)]
    Occupied(#[error(not(source))] Location),
    #[display(fmt = "{} does not capture anything", _0)]
    NoCapture(#[error(not(source))] Location),
}

#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "unexpected character {:?} in board", _0)]
    InvalidCharacter(#[error(not(source))] char),
    #[display(fmt = "expected {} cells, found {}", NUM_SPACES, _0)]
    WrongLength(#[error(not(source))] usize),
}

impl Default for Board {
    /// Gets the standard starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create the starting position: the four center cells seeded diagonally,
    /// Player A on (4,4) and (5,5), Player B on (4,5) and (5,4).
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; NUM_SPACES];
        let center = EDGE_LENGTH / 2 - 1;
        let index = |row: usize, column: usize| row * EDGE_LENGTH + column;

        cells[index(center, center)] = Cell::Taken(Player::A);
        cells[index(center + 1, center + 1)] = Cell::Taken(Player::A);
        cells[index(center, center + 1)] = Cell::Taken(Player::B);
        cells[index(center + 1, center)] = Cell::Taken(Player::B);

        Self { cells }
    }

    /// Build a board from explicit cell contents in row-major order.
    pub const fn from_cells(cells: [Cell; NUM_SPACES]) -> Self {
        Self { cells }
    }

    /// Look up a cell by 1-based coordinates.
    ///
    /// Coordinates must lie in `1..=8`; anything else panics.
    #[inline]
    pub fn cell_state(&self, row: i32, column: i32) -> Cell {
        match Location::new(row, column) {
            Some(loc) => self.cell(loc),
            None => panic!("({},{}) is not on the board", row, column),
        }
    }

    #[inline]
    pub fn cell(&self, loc: Location) -> Cell {
        self.cells[loc.to_index() as usize]
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Count the non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns false once every cell is occupied, raising a `game over` event.
    pub fn is_playable(&self) -> bool {
        if self.is_full() {
            info!(occupied = NUM_SPACES, "game over");
            false
        } else {
            true
        }
    }

    /// Walk from `origin` in `direction` and return the opponent run that a piece of
    /// `player` at `origin` would capture. Empty if the run is empty, unterminated
    /// or runs off the board.
    fn scan(&self, origin: Location, direction: Direction, player: Player) -> LocationSet {
        let mut run = LocationSet::EMPTY;
        let mut cursor = origin.step(direction);

        while let Some(loc) = cursor {
            match self.cell(loc) {
                Cell::Empty => return LocationSet::EMPTY,
                Cell::Taken(owner) if owner == player => return run,
                Cell::Taken(_) => run.insert(loc),
            }
            cursor = loc.step(direction);
        }

        LocationSet::EMPTY
    }

    /// Every cell that placing `player` at `origin` would flip, across all directions.
    /// Reads the board only.
    pub fn captures(&self, origin: Location, player: Player) -> LocationSet {
        Direction::ALL
            .iter()
            .fold(LocationSet::EMPTY, |flips, &direction| {
                flips | self.scan(origin, direction, player)
            })
    }

    /// Returns whether `player` may place at `loc`.
    pub fn is_legal(&self, loc: Location, player: Player) -> bool {
        self.cell(loc).is_empty() && !self.captures(loc, player).is_empty()
    }

    /// Get the set of legal placements for `player`.
    pub fn legal_moves(&self, player: Player) -> LocationSet {
        Location::all()
            .filter(|&loc| self.is_legal(loc, player))
            .collect()
    }

    /// Returns whether `player` has any legal placement.
    pub fn can_move(&self, player: Player) -> bool {
        Location::all().any(|loc| self.is_legal(loc, player))
    }

    /// Place a piece for `player` at 1-based (`row`, `column`) and flip every
    /// captured line.
    #[instrument(level = "trace", skip(self))]
    pub fn place_and_capture(
        &mut self,
        row: i32,
        column: i32,
        player: Player,
    ) -> Result<Placement, PlaceError> {
        let loc = Location::new(row, column).ok_or(PlaceError::OutOfRange { row, column })?;
        self.place(loc, player)
    }

    /// Place a piece for `player` at an on-board location and flip every captured line.
    pub fn place(&mut self, loc: Location, player: Player) -> Result<Placement, PlaceError> {
        if !self.cell(loc).is_empty() {
            debug!(%loc, ?player, "rejected: occupied");
            return Err(PlaceError::Occupied(loc));
        }

        let flipped = self.captures(loc, player);
        if flipped.is_empty() {
            debug!(%loc, ?player, "rejected: no capture");
            return Err(PlaceError::NoCapture(loc));
        }

        self.cells[loc.to_index() as usize] = Cell::Taken(player);
        for flip in flipped {
            self.cells[flip.to_index() as usize] = Cell::Taken(player);
        }

        debug!(%loc, ?player, flipped = flipped.len(), "placed");
        Ok(Placement {
            location: loc,
            player,
            flipped,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells().map(|cell| cell.to_char('X', 'O')), f)
    }
}

/// Parse a board from 64 cells of `.`, `X` and `O` in row-major order.
/// Whitespace is ignored, so boards can be written as an 8x8 grid.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; NUM_SPACES];
        let mut count = 0;

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match c {
                '.' | '-' => Cell::Empty,
                'X' | 'x' => Cell::Taken(Player::A),
                'O' | 'o' => Cell::Taken(Player::B),
                other => return Err(ParseBoardError::InvalidCharacter(other)),
            };
            if count < NUM_SPACES {
                cells[count] = cell;
            }
            count += 1;
        }

        if count != NUM_SPACES {
            return Err(ParseBoardError::WrongLength(count));
        }

        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: i32, column: i32) -> Location {
        Location::new(row, column).unwrap()
    }

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn starting_position() {
        let board = Board::new();
        assert_eq!(board.occupied(), 4);
        assert_eq!(board.cell_state(4, 4), Cell::Taken(Player::A));
        assert_eq!(board.cell_state(5, 5), Cell::Taken(Player::A));
        assert_eq!(board.cell_state(4, 5), Cell::Taken(Player::B));
        assert_eq!(board.cell_state(5, 4), Cell::Taken(Player::B));
        assert!(board.is_playable());
    }

    #[test]
    #[should_panic]
    fn cell_state_out_of_range() {
        Board::new().cell_state(0, 4);
    }

    #[test]
    #[should_panic]
    fn cell_state_negative() {
        Board::new().cell_state(4, -1);
    }

    #[test]
    fn scan_stops_on_own_piece_first() {
        let board = board(
            "........
             ........
             ........
             ...XO...
             ...OX...
             ........
             ........
             ........",
        );
        // Directly next to one of A's own pieces.
        assert!(board.scan(loc(4, 3), Direction::Right, Player::A).is_empty());
        // Next to an empty cell.
        assert!(board.scan(loc(4, 3), Direction::Up, Player::B).is_empty());
        // B at (4,3) captures (4,4) anchored by (4,5).
        assert_eq!(
            board.scan(loc(4, 3), Direction::Right, Player::B),
            LocationSet::from(loc(4, 4))
        );
        // A at (4,6) captures (4,5) anchored by (4,4).
        assert_eq!(
            board.scan(loc(4, 6), Direction::Left, Player::A),
            LocationSet::from(loc(4, 5))
        );
    }

    #[test]
    fn scan_ignores_unanchored_runs_to_the_edge() {
        let board = board(
            ".OOOOOOO
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        assert!(board
            .scan(loc(1, 1), Direction::Right, Player::A)
            .is_empty());
    }

    #[test]
    fn scan_captures_along_edges_and_corners() {
        let board = board(
            ".OOOOOOX
             OO.....O
             O.O....O
             O..O...O
             O...O..O
             O....O.O
             O.....OO
             X......X",
        );
        let flips = board.captures(loc(1, 1), Player::A);
        // Top row, left column and the long diagonal all end on an anchor.
        assert_eq!(flips.len(), 6 + 6 + 6);
        assert!(flips.contains(loc(1, 7)));
        assert!(flips.contains(loc(7, 1)));
        assert!(flips.contains(loc(7, 7)));
        assert!(!flips.contains(loc(2, 8)));
    }

    #[test]
    fn cell_characters() {
        assert_eq!(Cell::Empty.to_char('#', '@'), '.');
        assert_eq!(Cell::Taken(Player::A).to_char('#', '@'), '#');
        assert_eq!(Cell::Taken(Player::B).to_char('#', '@'), '@');
    }

    #[test]
    fn parse_board_errors() {
        assert_eq!(
            "X".repeat(63).parse::<Board>(),
            Err(ParseBoardError::WrongLength(63))
        );
        assert_eq!(
            "X".repeat(65).parse::<Board>(),
            Err(ParseBoardError::WrongLength(65))
        );
        assert_eq!(
            format!("{}?", ".".repeat(63)).parse::<Board>(),
            Err(ParseBoardError::InvalidCharacter('?'))
        );
    }

    #[test]
    fn display_starting_position() {
        let expected = "   1 2 3 4 5 6 7 8\n\
                        1  . . . . . . . .\n\
                        2  . . . . . . . .\n\
                        3  . . . . . . . .\n\
                        4  . . . X O . . .\n\
                        5  . . . O X . . .\n\
                        6  . . . . . . . .\n\
                        7  . . . . . . . .\n\
                        8  . . . . . . . .";
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            PlaceError::OutOfRange { row: 9, column: 1 }.to_string(),
            "(9,1) is not on the board"
        );
        assert_eq!(
            PlaceError::Occupied(loc(4, 4)).to_string(),
            "(4,4) is already occupied"
        );
        assert_eq!(
            PlaceError::NoCapture(loc(1, 1)).to_string(),
            "(1,1) does not capture anything"
        );
    }
}
