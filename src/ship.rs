//! Ship geometry and hit-point bookkeeping.

use core::fmt;

use crate::common::{BoardError, Coord};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells extend down the rows from the bow.
    Vertical,
    /// Cells extend along the columns from the bow.
    Horizontal,
}

/// A ship anchored at its bow, with the hit points it has left.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coord,
    length: usize,
    orientation: Orientation,
    lives: usize,
}

impl Ship {
    /// Create an undamaged ship. Neither bounds nor length are checked here;
    /// a ship hanging off the board or with no cells is rejected when it is
    /// added to one.
    pub fn new(bow: Coord, length: usize, orientation: Orientation) -> Self {
        Ship {
            bow,
            length,
            orientation,
            lives: length,
        }
    }

    /// Cells covered by the ship, starting at the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Vertical => Coord::new(self.bow.row + i, self.bow.col),
            Orientation::Horizontal => Coord::new(self.bow.row, self.bow.col + i),
        })
    }

    /// Whether a shot at `at` lands on this ship.
    pub fn is_hit_by(&self, at: Coord) -> bool {
        self.cells().any(|c| c == at)
    }

    /// Take one point of damage.
    pub fn apply_hit(&mut self) -> Result<(), BoardError> {
        if self.lives == 0 {
            return Err(BoardError::ShipAlreadySunk);
        }
        self.lives -= 1;
        Ok(())
    }

    /// Restore full hit points.
    pub fn repair(&mut self) {
        self.lives = self.length;
    }

    pub fn is_sunk(&self) -> bool {
        self.lives == 0
    }

    /// Remaining hit points.
    pub fn lives(&self) -> usize {
        self.lives
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, lives: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.lives,
        )
    }
}
