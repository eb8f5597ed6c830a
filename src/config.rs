use crate::bitboard::BitBoard;

pub const BOARD_SIZE: usize = 6;
pub const NUM_SHIPS: usize = 7;
/// Ship lengths of every fleet, placed in this order.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Placement tries allowed for one whole fleet before the board is discarded.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Cell set sized for the game board.
pub type BB = BitBoard<u64, BOARD_SIZE>;
