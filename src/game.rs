//! Turn loop: alternate shots, repeat on hit, stop when a fleet is gone.

use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, Coord, ShotResult},
    config::NUM_SHIPS,
    placement::FleetPlacer,
    player::{Player, Turn},
};

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// The loser's whole fleet was destroyed.
    Finished { winner: Side },
    /// A side stopped supplying targets.
    Abandoned { by: Side },
}

/// One landed shot as seen by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub target: Coord,
    pub result: ShotResult,
}

/// Core game state: both boards, both players and whose turn it is.
pub struct Game {
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    human_board: Board,
    computer_board: Board,
    to_move: Side,
    status: GameStatus,
    shots_fired: usize,
}

impl Game {
    /// Start a game on already populated boards. The human fires first and
    /// the computer's board is hidden.
    ///
    /// Both boards must carry exactly `NUM_SHIPS` ships, otherwise the game
    /// could never reach its end and `IncompleteFleet` is returned.
    pub fn new(
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        human_board: Board,
        mut computer_board: Board,
    ) -> Result<Self, BoardError> {
        for board in [&human_board, &computer_board] {
            if board.ships().len() != NUM_SHIPS {
                return Err(BoardError::IncompleteFleet {
                    ships: board.ships().len(),
                });
            }
        }
        computer_board.set_hidden(true);
        Ok(Self {
            human,
            computer,
            human_board,
            computer_board,
            to_move: Side::Human,
            status: GameStatus::InProgress,
            shots_fired: 0,
        })
    }

    /// Start a game with a freshly placed random fleet on each side.
    pub fn with_random_boards(
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        placer: &FleetPlacer,
        rng: &mut SmallRng,
    ) -> Result<Self, BoardError> {
        let human_board = placer.place(rng);
        let computer_board = placer.place(rng);
        Self::new(human, computer, human_board, computer_board)
    }

    /// The board a side defends.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human_board,
            Side::Computer => &self.computer_board,
        }
    }

    /// Mutable access to a side's board, e.g. to toggle hiding.
    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Human => &mut self.human_board,
            Side::Computer => &mut self.computer_board,
        }
    }

    /// Side due to fire next.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of shots that landed so far, both sides together.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Let the side to move fire one landed shot.
    ///
    /// A hit keeps the turn with the same side; a miss hands it over. Returns
    /// `Ok(None)` once the game is over.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> Result<Option<TurnReport>, BoardError> {
        if self.status != GameStatus::InProgress {
            return Ok(None);
        }
        let side = self.to_move;
        let (player, enemy) = match side {
            Side::Human => (&mut self.human, &mut self.computer_board),
            Side::Computer => (&mut self.computer, &mut self.human_board),
        };
        let Some(mv) = player.make_move(enemy, rng)? else {
            log::info!("{:?} stopped playing", side);
            self.status = GameStatus::Abandoned { by: side };
            return Ok(None);
        };
        self.shots_fired += 1;

        self.status = self.evaluate();
        if let GameStatus::Finished { winner } = self.status {
            log::info!("{:?} wins after {} shots", winner, self.shots_fired);
        } else if mv.turn() == Turn::Ends {
            self.to_move = side.opponent();
        }
        Ok(Some(TurnReport {
            side,
            target: mv.target,
            result: mv.result,
        }))
    }

    /// Play until one fleet is destroyed or a side gives up.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<GameStatus, BoardError> {
        while self.play_turn(rng)?.is_some() {}
        Ok(self.status)
    }

    fn evaluate(&self) -> GameStatus {
        if self.computer_board.sunk_count() >= NUM_SHIPS {
            GameStatus::Finished { winner: Side::Human }
        } else if self.human_board.sunk_count() >= NUM_SHIPS {
            GameStatus::Finished {
                winner: Side::Computer,
            }
        } else {
            GameStatus::InProgress
        }
    }
}
