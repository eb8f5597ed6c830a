use rand::rngs::SmallRng;
use rand::Rng;

use crate::{common::Coord, config::BOARD_SIZE, player::Player};

/// Automated player firing at uniformly random cells.
///
/// It keeps no memory of earlier shots; repeats are refused by the board and
/// simply drawn again.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn choose_target(&mut self, rng: &mut SmallRng) -> Option<Coord> {
        Some(Coord::new(
            rng.random_range(0..BOARD_SIZE),
            rng.random_range(0..BOARD_SIZE),
        ))
    }
}
