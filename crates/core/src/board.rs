//! Board module - the packed 4x4 bitboard
//!
//! The whole board lives in one `u64`: cell `i` (row-major, 0..16) occupies
//! bits `4*i..4*i+4`, so cell 0 is the lowest nibble. Each nibble is a tile
//! exponent; 0 means empty and `e` means the tile `2^e`.
//!
//! The raw word is also the persisted form of a board (see [`Board::raw`]).
//!
//! Moves are one routine: pull each line along the move's axis, reverse it for
//! right/down, run [`process_line`], reverse back, write it back.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::{
    Axis, Direction, Line, BOARD_SIDE, CELL_BITS, CELL_COUNT, CELL_MASK, MAX_EXPONENT,
};

/// Shift and merge one line toward its start
///
/// Zeros are squeezed out, then a single left-to-right pass merges equal
/// neighbours into one tile of exponent `min(e + 1, 15)`. A tile merges at
/// most once, so `[1, 1, 1, 1]` becomes `[2, 2, 0, 0]`. The result is padded
/// with zeros on the right.
pub fn process_line(line: Line) -> Line {
    let tiles: ArrayVec<u8, BOARD_SIDE> = line.iter().copied().filter(|&e| e != 0).collect();

    let mut out = [0u8; BOARD_SIDE];
    let mut write = 0usize;
    let mut read = 0usize;
    while read < tiles.len() {
        let exponent = tiles[read];
        if read + 1 < tiles.len() && tiles[read + 1] == exponent {
            out[write] = exponent.saturating_add(1).min(MAX_EXPONENT);
            read += 2;
        } else {
            out[write] = exponent;
            read += 1;
        }
        write += 1;
    }
    out
}

/// The game board - 16 packed 4-bit exponents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    bits: u64,
}

impl Board {
    /// Create a new empty board
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Rebuild a board from its packed 64-bit form
    pub const fn from_raw(bits: u64) -> Self {
        Self { bits }
    }

    /// The packed 64-bit form
    pub const fn raw(&self) -> u64 {
        self.bits
    }

    /// Build a board from a row-major grid of exponents (masked to 4 bits)
    pub fn from_exponents(grid: [[u8; BOARD_SIDE]; BOARD_SIDE]) -> Self {
        let mut board = Self::new();
        for (r, row) in grid.iter().enumerate() {
            board.set_row(r, *row);
        }
        board
    }

    /// Build a board from displayed tile values (the inverse of [`Board::to_grid`])
    ///
    /// Every value must be 0 or a power of two between 2 and 2^15.
    pub fn try_from_grid(grid: [[u32; BOARD_SIDE]; BOARD_SIDE]) -> Result<Self, EngineError> {
        let mut board = Self::new();
        for (row, values) in grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let exponent = value.trailing_zeros();
                let valid = value == 0
                    || (value.is_power_of_two() && (1..=MAX_EXPONENT as u32).contains(&exponent));
                if !valid {
                    return Err(EngineError::InvalidTileValue { row, col, value });
                }
                let exponent = if value == 0 { 0 } else { exponent as u8 };
                board.set_cell(row * BOARD_SIDE + col, exponent);
            }
        }
        Ok(board)
    }

    /// Bit offset of a cell; panics on an index outside 0..16
    #[inline(always)]
    fn shift_of(index: usize) -> u32 {
        assert!(
            index < CELL_COUNT,
            "cell index {} out of range 0..{}",
            index,
            CELL_COUNT
        );
        index as u32 * CELL_BITS
    }

    /// Exponent stored at `index` (row-major, 0..16)
    #[inline]
    pub fn get_cell(&self, index: usize) -> u8 {
        ((self.bits >> Self::shift_of(index)) & CELL_MASK) as u8
    }

    /// Store `value & 0xF` at `index`, replacing what was there
    #[inline]
    pub fn set_cell(&mut self, index: usize, value: u8) {
        let shift = Self::shift_of(index);
        self.bits &= !(CELL_MASK << shift);
        self.bits |= (value as u64 & CELL_MASK) << shift;
    }

    /// Exponents of row `r`, left to right
    pub fn get_row(&self, r: usize) -> Line {
        std::array::from_fn(|c| self.get_cell(r * BOARD_SIDE + c))
    }

    /// Write row `r`, left to right
    pub fn set_row(&mut self, r: usize, line: Line) {
        for (c, &value) in line.iter().enumerate() {
            self.set_cell(r * BOARD_SIDE + c, value);
        }
    }

    /// Exponents of column `c`, top to bottom
    pub fn get_column(&self, c: usize) -> Line {
        std::array::from_fn(|r| self.get_cell(r * BOARD_SIDE + c))
    }

    /// Write column `c`, top to bottom
    pub fn set_column(&mut self, c: usize, line: Line) {
        for (r, &value) in line.iter().enumerate() {
            self.set_cell(r * BOARD_SIDE + c, value);
        }
    }

    /// Line `i` along `axis`
    pub fn line(&self, axis: Axis, i: usize) -> Line {
        match axis {
            Axis::Row => self.get_row(i),
            Axis::Column => self.get_column(i),
        }
    }

    /// Write line `i` along `axis`
    pub fn set_line(&mut self, axis: Axis, i: usize, line: Line) {
        match axis {
            Axis::Row => self.set_row(i, line),
            Axis::Column => self.set_column(i, line),
        }
    }

    /// Slide and merge every line toward `direction`, without spawning
    ///
    /// Returns whether any line changed. When it returns false the board is
    /// untouched.
    pub fn shift(&mut self, direction: Direction) -> bool {
        let axis = direction.axis();
        let reversed = direction.is_reversed();

        let mut moved = false;
        for i in 0..BOARD_SIDE {
            let line = self.line(axis, i);
            let processed = if reversed {
                let mut rev = line;
                rev.reverse();
                let mut out = process_line(rev);
                out.reverse();
                out
            } else {
                process_line(line)
            };

            if processed != line {
                moved = true;
                self.set_line(axis, i, processed);
            }
        }
        moved
    }

    /// Copy of the board after shifting toward `direction`, and whether it changed
    pub fn shifted(&self, direction: Direction) -> (Board, bool) {
        let mut next = *self;
        let moved = next.shift(direction);
        (next, moved)
    }

    /// Whether a move toward `direction` would change the board
    pub fn can_move(&self, direction: Direction) -> bool {
        self.shifted(direction).1
    }

    /// Indices of all empty cells, in ascending order
    pub fn empty_cells(&self) -> ArrayVec<u8, CELL_COUNT> {
        (0..CELL_COUNT)
            .filter(|&i| self.get_cell(i) == 0)
            .map(|i| i as u8)
            .collect()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        (0..CELL_COUNT).filter(|&i| self.get_cell(i) == 0).count()
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// Check if no cell is empty
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Largest exponent on the board (0 for an empty board)
    pub fn max_exponent(&self) -> u8 {
        (0..CELL_COUNT).map(|i| self.get_cell(i)).max().unwrap_or(0)
    }

    /// Check if no move in any direction could change the board
    ///
    /// The board must be full and no cell may equal its right or down neighbour.
    pub fn is_game_over(&self) -> bool {
        if !self.is_full() {
            return false;
        }

        for r in 0..BOARD_SIDE {
            for c in 0..BOARD_SIDE {
                let current = self.get_cell(r * BOARD_SIDE + c);
                if c + 1 < BOARD_SIDE && current == self.get_cell(r * BOARD_SIDE + c + 1) {
                    return false;
                }
                if r + 1 < BOARD_SIDE && current == self.get_cell((r + 1) * BOARD_SIDE + c) {
                    return false;
                }
            }
        }
        true
    }

    /// Row-major grid of displayed tile values (0 or `2^e`)
    pub fn to_grid(&self) -> [[u32; BOARD_SIDE]; BOARD_SIDE] {
        std::array::from_fn(|r| {
            std::array::from_fn(|c| match self.get_cell(r * BOARD_SIDE + c) {
                0 => 0,
                e => 1u32 << e,
            })
        })
    }
}

impl From<u64> for Board {
    fn from(bits: u64) -> Self {
        Self::from_raw(bits)
    }
}

impl From<Board> for u64 {
    fn from(board: Board) -> Self {
        board.raw()
    }
}
