//! `reversi-engine` implements the rules of Reversi (Othello) on a fixed 8x8 board.
//!
//! The package is layered:
//!
//!  - [`Board`] owns the 64 cells and implements legality checks, directional
//!    scans and captures. [`Board::place_and_capture`] is the only way to change it.
//!  - [`Game`] adds turn order and termination on top of a [`Board`].
//!    Drivers and user interfaces should hold a [`Game`].
//!
//! Coordinates in the public interface are 1-based (row, column) pairs.

pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;
pub use utils::format_grid;

/// The number of cells on one edge of a Reversi board.
pub const EDGE_LENGTH: usize = 8;

/// The number of cells on a Reversi board.
pub const NUM_SPACES: usize = 64;
