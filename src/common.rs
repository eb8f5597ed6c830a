//! Common types for Sea Battle: coordinates, shot results and board errors.

use core::fmt;

use crate::{bitboard::BitBoardError, config::NUM_SHIPS};

/// A cell position, 0-indexed internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies inside an `n×n` board.
    pub const fn in_bounds(&self, n: usize) -> bool {
        self.row < n && self.col < n
    }

    /// The 3×3 block centred on this cell, itself included. Cells that would
    /// have a negative index are skipped; the upper bound is left to the caller.
    pub fn around(self) -> impl Iterator<Item = Coord> {
        (-1isize..=1).flat_map(move |dr| {
            (-1isize..=1).filter_map(move |dc| {
                let row = self.row.checked_add_signed(dr)?;
                let col = self.col.checked_add_signed(dc)?;
                Some(Coord { row, col })
            })
        })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

/// Shown 1-based, the way a player types it.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Result of a shot that landed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot hit open water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot destroyed the last segment of a ship.
    Sunk,
}

impl ShotResult {
    /// A successful hit grants the shooter another shot.
    pub fn grants_another_shot(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk)
    }
}

/// Errors returned by Board and placement operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (index off the board).
    BitBoard(BitBoardError),
    /// Shot target lies outside the board.
    OutOfBounds,
    /// Cell was already shot at, or lies next to a destroyed ship.
    AlreadyTargeted,
    /// Ship leaves the board, overlaps another ship or touches its buffer.
    WrongPlacement,
    /// Attempt budget ran out before the whole fleet was placed.
    PlacementExhausted,
    /// Hit registered on a ship with no hit points left.
    ShipAlreadySunk,
    /// A game was started on a board that does not carry the whole fleet.
    IncompleteFleet { ships: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds => write!(f, "You are trying to shoot off the board!"),
            BoardError::AlreadyTargeted => write!(f, "You have already shot at this cell"),
            BoardError::WrongPlacement => write!(f, "Ship cannot be placed there"),
            BoardError::PlacementExhausted => {
                write!(f, "Ran out of attempts while placing the fleet")
            }
            BoardError::ShipAlreadySunk => write!(f, "Ship has no hit points left"),
            BoardError::IncompleteFleet { ships } => {
                write!(f, "Board carries {} ships, a game needs {}", ships, NUM_SHIPS)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
