use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, Coord, ShotResult},
    config::BOARD_SIZE,
};

/// Whether the side that just fired keeps the initiative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Control passes to the opponent.
    Ends,
    /// The same side fires again.
    Repeats,
}

/// A shot that landed, and what it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub target: Coord,
    pub result: ShotResult,
}

impl Move {
    pub fn turn(&self) -> Turn {
        if self.result.grants_another_shot() {
            Turn::Repeats
        } else {
            Turn::Ends
        }
    }
}

/// Interface implemented by different player types.
pub trait Player {
    /// Pick the next cell to fire at, or `None` when the player has nothing
    /// more to say (input closed).
    fn choose_target(&mut self, rng: &mut SmallRng) -> Option<Coord>;

    /// Inform the player that a target was refused by the opponent board.
    fn handle_rejected_shot(&mut self, _target: Coord, _err: &BoardError) {}

    /// Inform the player of the result of a shot that landed.
    fn handle_shot_result(&mut self, _target: Coord, _result: ShotResult) {}

    /// Fire at `enemy` until a shot lands.
    ///
    /// Off-board and repeated targets are reported back to the player and a
    /// new target is requested. Returns `Ok(None)` when the player stops
    /// supplying targets, or when every cell of `enemy` was already targeted.
    fn make_move(
        &mut self,
        enemy: &mut Board,
        rng: &mut SmallRng,
    ) -> Result<Option<Move>, BoardError> {
        loop {
            if enemy.shots().count_ones() >= BOARD_SIZE * BOARD_SIZE {
                return Ok(None);
            }
            let Some(target) = self.choose_target(rng) else {
                return Ok(None);
            };
            match enemy.shoot(target) {
                Ok(result) => {
                    self.handle_shot_result(target, result);
                    return Ok(Some(Move { target, result }));
                }
                Err(err @ (BoardError::OutOfBounds | BoardError::AlreadyTargeted)) => {
                    log::debug!("shot at {:?} rejected: {}", target, err);
                    self.handle_rejected_shot(target, &err);
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Where a human player's targets come from: a terminal, a script, a test.
///
/// Targets are expected to be parsed already; range checking is left to the
/// board, which refuses off-board targets.
pub trait TargetSource {
    /// Next target, `None` once the source is closed.
    fn next_target(&mut self) -> Option<Coord>;

    /// Tell whoever is typing that a target was refused.
    fn reject(&mut self, _target: Coord, _err: &BoardError) {}
}

/// A fixed list of targets.
pub struct Scripted<I>(I);

impl<I> TargetSource for Scripted<I>
where
    I: Iterator<Item = Coord>,
{
    fn next_target(&mut self) -> Option<Coord> {
        self.0.next()
    }
}

/// Player driven by external input.
pub struct HumanPlayer<S> {
    source: S,
}

impl<S: TargetSource> HumanPlayer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

impl<I> HumanPlayer<Scripted<I>>
where
    I: Iterator<Item = Coord>,
{
    /// Player firing at `targets` in order, then giving up.
    pub fn scripted<T>(targets: T) -> Self
    where
        T: IntoIterator<IntoIter = I, Item = Coord>,
    {
        Self::new(Scripted(targets.into_iter()))
    }
}

impl<S: TargetSource> Player for HumanPlayer<S> {
    fn choose_target(&mut self, _rng: &mut SmallRng) -> Option<Coord> {
        self.source.next_target()
    }

    fn handle_rejected_shot(&mut self, target: Coord, err: &BoardError) {
        self.source.reject(target, err);
    }
}
