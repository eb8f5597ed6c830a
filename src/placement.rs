//! Random fleet placement.
//!
//! Placement is a constructive search with restarts: ships are dropped at
//! random bows and orientations and kept when the board accepts them. One
//! attempt shares a single try budget across the whole fleet; running out
//! discards the board and starts again from an empty one.

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord};
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

/// Range the random bow is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum OriginSampling {
    /// Rows and columns in `0..=BOARD_SIZE`, one past the edge. Bows off the
    /// board are drawn and rejected like any other bad placement.
    #[default]
    Oversized,
    /// Rows and columns in `0..BOARD_SIZE`.
    Exact,
}

impl OriginSampling {
    fn upper(self) -> usize {
        match self {
            OriginSampling::Oversized => BOARD_SIZE,
            OriginSampling::Exact => BOARD_SIZE - 1,
        }
    }
}

/// Places the standard fleet on fresh boards.
#[derive(Debug, Clone, Copy)]
pub struct FleetPlacer {
    sampling: OriginSampling,
    max_attempts: usize,
}

impl FleetPlacer {
    pub fn new(sampling: OriginSampling) -> Self {
        Self {
            sampling,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Override the try budget of one attempt.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn sampling(&self) -> OriginSampling {
        self.sampling
    }

    /// A random ship of `length`.
    pub fn random_ship<R: Rng>(&self, rng: &mut R, length: usize) -> Ship {
        let upper = self.sampling.upper();
        let bow = Coord::new(rng.random_range(0..=upper), rng.random_range(0..=upper));
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Ship::new(bow, length, orientation)
    }

    /// One attempt at a complete board.
    ///
    /// Fails with `PlacementExhausted` once `max_attempts` ships have been
    /// tried, counting across all fleet lengths.
    pub fn try_place<R: Rng>(&self, rng: &mut R) -> Result<Board, BoardError> {
        let mut board = Board::new();
        let mut attempts = 0;
        for &length in FLEET.iter() {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    return Err(BoardError::PlacementExhausted);
                }
                match board.add_ship(self.random_ship(rng, length)) {
                    Ok(()) => break,
                    Err(BoardError::WrongPlacement) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        board.reset_shot_history();
        Ok(board)
    }

    /// Keep attempting until a full fleet fits.
    pub fn place<R: Rng>(&self, rng: &mut R) -> Board {
        self.place_counting_restarts(rng).0
    }

    /// Like [`place`](Self::place), also returning how many attempts were
    /// thrown away first. A budget smaller than the fleet is raised to the
    /// fleet size, since no attempt could succeed with it.
    pub fn place_counting_restarts<R: Rng>(&self, rng: &mut R) -> (Board, usize) {
        let placer = Self {
            max_attempts: self.max_attempts.max(FLEET.len()),
            ..*self
        };
        let mut restarts = 0usize;
        loop {
            match placer.try_place(rng) {
                Ok(board) => {
                    log::debug!("fleet placed after {} restart(s)", restarts);
                    return (board, restarts);
                }
                Err(e) => {
                    restarts += 1;
                    log::debug!("placement attempt {} abandoned: {}", restarts, e);
                }
            }
        }
    }
}

impl Default for FleetPlacer {
    fn default() -> Self {
        Self::new(OriginSampling::default())
    }
}

/// Random board with the default sampling policy.
pub fn random_board<R: Rng>(rng: &mut R) -> Board {
    FleetPlacer::default().place(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn oversized_sampling_reaches_past_the_edge() {
        let placer = FleetPlacer::new(OriginSampling::Oversized);
        let mut rng = SmallRng::seed_from_u64(3);
        let past_edge = (0..500)
            .map(|_| placer.random_ship(&mut rng, 1).bow())
            .any(|bow| !bow.in_bounds(BOARD_SIZE));
        assert!(past_edge);
    }

    #[test]
    fn exact_sampling_stays_on_the_board() {
        let placer = FleetPlacer::new(OriginSampling::Exact);
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..500 {
            assert!(placer.random_ship(&mut rng, 1).bow().in_bounds(BOARD_SIZE));
        }
    }
}
