use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::BOARD_SIDE;

/// Read-only, serialisable view of a board for presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Packed 64-bit board, enough to rebuild the full state
    pub raw: u64,
    /// Displayed tile values, row-major
    pub grid: [[u32; BOARD_SIDE]; BOARD_SIDE],
    pub empty: u8,
    /// Largest tile value on the board, 0 when empty
    pub max_tile: u32,
    pub game_over: bool,
}

impl BoardSnapshot {
    /// Rebuild the board this snapshot was taken from
    pub fn board(&self) -> Board {
        Board::from_raw(self.raw)
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        let max_tile = match board.max_exponent() {
            0 => 0,
            e => 1u32 << e,
        };
        Self {
            raw: board.raw(),
            grid: board.to_grid(),
            empty: board.empty_count() as u8,
            max_tile,
            game_over: board.is_game_over(),
        }
    }
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        Self::from(&board)
    }
}
