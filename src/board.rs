//! Board state: ship placement, the placement buffer and shot resolution.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coord, ShotResult};
use crate::config::{BB, BOARD_SIZE};
use crate::ship::Ship;

/// What a single cell shows when the board is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Nothing known or placed.
    #[default]
    Empty,
    /// Part of an undamaged ship segment.
    Ship,
    /// A ship segment that was hit.
    Hit,
    /// A shot into open water, or water swept around a destroyed ship.
    Miss,
}

/// One side's board.
///
/// Placement and play keep separate cell sets: `reserved` holds every ship
/// cell plus its 8-neighbour buffer and is only written by [`Board::add_ship`],
/// while `shots` holds targeted cells and is only written by [`Board::shoot`].
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<Ship>,
    reserved: BB,
    shots: BB,
    sunk: usize,
    hidden: bool,
}

impl Board {
    /// Create an empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
            reserved: BB::new(),
            shots: BB::new(),
            sunk: 0,
            hidden: false,
        }
    }

    /// Place `ship`, reserving a one-cell buffer around it.
    ///
    /// The ship is rejected as a whole, leaving the board untouched, if any
    /// of its cells is off the board or already reserved by another ship, or
    /// if it has no cells at all.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        let mut hull = BB::new();
        for cell in ship.cells() {
            if !cell.in_bounds(BOARD_SIZE) || self.reserved.contains(cell) {
                return Err(BoardError::WrongPlacement);
            }
            hull.insert(cell)?;
        }
        if hull.is_empty() {
            return Err(BoardError::WrongPlacement);
        }
        for cell in hull.iter() {
            self.grid[cell.row][cell.col] = Cell::Ship;
        }
        self.reserved |= hull.halo();
        self.ships.push(ship);
        Ok(())
    }

    /// Fire at `at`.
    pub fn shoot(&mut self, at: Coord) -> Result<ShotResult, BoardError> {
        if !at.in_bounds(BOARD_SIZE) {
            return Err(BoardError::OutOfBounds);
        }
        if self.shots.contains(at) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.shots.insert(at)?;

        let Some(ship) = self.ships.iter_mut().find(|s| s.is_hit_by(at)) else {
            self.grid[at.row][at.col] = Cell::Miss;
            return Ok(ShotResult::Miss);
        };
        ship.apply_hit()?;
        self.grid[at.row][at.col] = Cell::Hit;
        if !ship.is_sunk() {
            return Ok(ShotResult::Hit);
        }

        let hull = BB::from_cells(ship.cells())?;
        log::debug!("ship {:?} destroyed", ship);
        self.sunk += 1;
        // nothing can be hidden next to a wreck: sweep its buffer
        let swept = hull.halo();
        for cell in swept.iter() {
            if !self.shots.contains(cell) {
                self.grid[cell.row][cell.col] = Cell::Miss;
            }
        }
        self.shots |= swept;
        Ok(ShotResult::Sunk)
    }

    /// Return the board to its freshly placed state: forget every shot and
    /// repair every ship, keeping the placement reservation.
    pub fn reset_shot_history(&mut self) {
        self.shots.clear_all();
        for row in self.grid.iter_mut() {
            for cell in row.iter_mut() {
                *cell = match *cell {
                    Cell::Hit => Cell::Ship,
                    Cell::Miss => Cell::Empty,
                    other => other,
                };
            }
        }
        for ship in self.ships.iter_mut() {
            ship.repair();
        }
        self.sunk = 0;
    }

    /// Display state of a cell, `None` when off the board.
    pub fn cell(&self, at: Coord) -> Option<Cell> {
        if at.in_bounds(BOARD_SIZE) {
            Some(self.grid[at.row][at.col])
        } else {
            None
        }
    }

    /// Display grid, row by row.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Whether ship cells should be drawn as unknown water.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of destroyed ships.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` when every placed ship is destroyed.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk == self.ships.len()
    }

    /// Ship cells and their buffers.
    pub fn reserved(&self) -> BB {
        self.reserved
    }

    /// Cells that can no longer be shot at.
    pub fn shots(&self) -> BB {
        self.shots
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  reserved: {:?},\n  shots: {:?},\n  sunk: {},\n  ships: {:?}\n}}",
            self.reserved, self.shots, self.sunk, self.ships
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::Orientation;

    #[test]
    fn rejected_ship_leaves_grid_untouched() {
        let mut board = Board::new();
        // second cell falls off the bottom edge
        let ship = Ship::new(Coord::new(5, 0), 2, Orientation::Vertical);
        assert_eq!(board.add_ship(ship), Err(BoardError::WrongPlacement));
        assert!(board.rows().iter().flatten().all(|c| *c == Cell::Empty));
        assert!(board.reserved().is_empty());
    }

    #[test]
    fn sweep_keeps_hits_and_earlier_misses() {
        let mut board = Board::new();
        board
            .add_ship(Ship::new(Coord::new(2, 2), 1, Orientation::Horizontal))
            .unwrap();
        assert_eq!(board.shoot(Coord::new(0, 0)).unwrap(), ShotResult::Miss);
        assert_eq!(board.shoot(Coord::new(2, 2)).unwrap(), ShotResult::Sunk);
        assert_eq!(board.cell(Coord::new(2, 2)), Some(Cell::Hit));
        assert_eq!(board.cell(Coord::new(1, 1)), Some(Cell::Miss));
        assert_eq!(board.cell(Coord::new(3, 3)), Some(Cell::Miss));
        assert_eq!(board.cell(Coord::new(4, 4)), Some(Cell::Empty));
        assert_eq!(board.shots().count_ones(), 10);
    }
}
