//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_board, AiPlayer, Board, BoardError, Coord, FleetPlacer, Game, GameStatus, HumanPlayer,
    OriginSampling, Player, ShotResult, Side,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
