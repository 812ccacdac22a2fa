//! Code for working with [`Location`]s on the Reversi board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, From, Into};
use std::fmt::{self, Display, Formatter};

/// A location on the Reversi board.
///
/// Stored as a row-major index in `0..64`; exposed through 1-based row and column
/// coordinates, which is how players name cells.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location(u8);

/// A set of locations on the Reversi board, one bit per cell.
/// Iterating yields the locations in row-major order.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
)]
pub struct LocationSet(u64);

/// One of the eight directions a line of captures can run in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
    UpRight,
    DownRight,
    UpLeft,
    DownLeft,
}

impl Direction {
    /// Every direction, in the order they are scanned.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
        Direction::UpRight,
        Direction::DownRight,
        Direction::UpLeft,
        Direction::DownLeft,
    ];

    /// The (row, column) step taken when walking in this direction.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::UpRight => (-1, 1),
            Direction::DownRight => (1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (1, -1),
        }
    }
}

impl Location {
    /// Construct a Location from 1-based row and column coordinates.
    /// Returns None if either coordinate is off the board.
    pub fn new(row: i32, column: i32) -> Option<Self> {
        let edge = EDGE_LENGTH as i32;
        if (1..=edge).contains(&row) && (1..=edge).contains(&column) {
            Some(Self(((row - 1) * edge + (column - 1)) as u8))
        } else {
            None
        }
    }

    /// Convert into a row-major index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.0
    }

    /// The 1-based row.
    #[inline]
    pub fn row(self) -> i32 {
        (self.0 as usize / EDGE_LENGTH) as i32 + 1
    }

    /// The 1-based column.
    #[inline]
    pub fn column(self) -> i32 {
        (self.0 as usize % EDGE_LENGTH) as i32 + 1
    }

    /// Get the 1-based (row, column) coordinates.
    pub fn to_coords(self) -> (i32, i32) {
        (self.row(), self.column())
    }

    /// The neighbouring location in `direction`, or None at the edge of the board.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_column) = direction.delta();
        Self::new(self.row() + d_row as i32, self.column() + d_column as i32)
    }

    /// Every location on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(Location)
    }
}

/// Formats as `(row,column)`, 1-based.
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row(), self.column())
    }
}

impl LocationSet {
    pub const EMPTY: Self = Self(0);

    /// Returns whether this set has no locations.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns whether `loc` is in this set.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        self.0 & Self::bit(loc) != 0
    }

    #[inline]
    pub fn insert(&mut self, loc: Location) {
        self.0 |= Self::bit(loc);
    }

    #[inline]
    fn bit(loc: Location) -> u64 {
        1 << loc.0
    }
}

impl From<Location> for LocationSet {
    fn from(loc: Location) -> Self {
        Self(Self::bit(loc))
    }
}

impl std::iter::FromIterator<Location> for LocationSet {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for loc in iter {
            set.insert(loc);
        }
        set
    }
}

impl Iterator for LocationSet {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0 == 0 {
            return None;
        }

        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Location(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for LocationSet {}

impl Display for LocationSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|loc| loc.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
