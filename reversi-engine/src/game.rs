//! Implements game-level Reversi logic: whose turn it is and when the game ends.
//!
//! [`Board`] only knows about cells and captures; [`Game`] adds turn order on top
//! and is what a driver should hold.

use crate::board::{Board, PlaceError, Placement};
use crate::location::LocationSet;
use derive_more::{Display, Error};
use std::fmt;
use tracing::{debug, instrument};

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Player {
    #[display(fmt = "Player A")]
    A,
    #[display(fmt = "Player B")]
    B,
}

impl Default for Player {
    /// Gets the starting player (A).
    fn default() -> Self {
        Self::A
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ParsePlayerError;

impl fmt::Display for ParsePlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid player string")
    }
}

impl std::error::Error for ParsePlayerError {}

/// Parse a player from "a"/"b", "x"/"o" or "1"/"2".
impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "x" | "1" => Ok(Player::A),
            "b" | "o" | "2" => Ok(Player::B),
            _ => Err(ParsePlayerError),
        }
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Termination {
    #[display(fmt = "the board is full")]
    BoardFull,
    #[display(fmt = "neither player can move")]
    NoMoves,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    InProgress,
    Finished(Termination),
}

#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum PassError {
    #[display(fmt = "a pass is only allowed without legal moves")]
    MovesAvailable,
    #[display(fmt = "the game is over")]
    GameOver,
}

/// The complete state of a Reversi game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Game {
    board: Board,
    active: Player,
}

impl Default for Game {
    /// Gets the starting position with the default player to move.
    fn default() -> Self {
        Self::new(Player::default())
    }
}

impl Game {
    /// Start a game from the standard opening with `first` to move.
    pub fn new(first: Player) -> Self {
        Self::from_board(Board::new(), first)
    }

    /// Resume a game from an arbitrary board.
    pub const fn from_board(board: Board, active: Player) -> Self {
        Self { board, active }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Get the legal placements for the active player.
    pub fn legal_moves(&self) -> LocationSet {
        self.board.legal_moves(self.active)
    }

    /// Returns whether the active player is blocked while the opponent can still move.
    pub fn must_pass(&self) -> bool {
        !self.board.can_move(self.active) && self.board.can_move(!self.active)
    }

    pub fn status(&self) -> Status {
        if !self.board.is_playable() {
            Status::Finished(Termination::BoardFull)
        } else if !self.board.can_move(self.active) && !self.board.can_move(!self.active) {
            Status::Finished(Termination::NoMoves)
        } else {
            Status::InProgress
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status() != Status::InProgress
    }

    /// Place a piece for the active player. The turn passes to the opponent only
    /// if the placement is accepted.
    #[instrument(level = "debug", skip(self), fields(player = ?self.active))]
    pub fn play(&mut self, row: i32, column: i32) -> Result<Placement, PlaceError> {
        let placement = self.board.place_and_capture(row, column, self.active)?;
        self.active = !self.active;
        Ok(placement)
    }

    /// Hand the turn to the opponent. Only allowed when the active player is blocked
    /// and the game is still going.
    pub fn pass(&mut self) -> Result<(), PassError> {
        if self.is_finished() {
            return Err(PassError::GameOver);
        }
        if self.board.can_move(self.active) {
            return Err(PassError::MovesAvailable);
        }

        debug!(player = ?self.active, "pass");
        self.active = !self.active;
        Ok(())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.active)
    }
}
