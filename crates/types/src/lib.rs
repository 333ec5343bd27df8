//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no external dependencies, so it can be
//! used by the engine, by tests and by any presentation layer a caller builds.
//!
//! # Board Layout
//!
//! The 2048 board is a 4x4 grid of cells stored row-major:
//!
//! ```text
//!  0  1  2  3
//!  4  5  6  7
//!  8  9 10 11
//! 12 13 14 15
//! ```
//!
//! Each cell holds a 4-bit *exponent*: `0` is empty, `e > 0` is the tile `2^e`.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIDE` | 4 | Rows and columns |
//! | `CELL_COUNT` | 16 | Cells on the board |
//! | `CELL_BITS` | 4 | Bits per packed cell |
//! | `CELL_MASK` | 0xF | Mask for one packed cell |
//! | `MAX_EXPONENT` | 15 | Merge cap (tile 32768) |
//! | `INITIAL_TILES` | 2 | Tiles spawned on reset |
//! | `FOUR_TILE_CHANCE_PERCENT` | 10 | Chance a spawn is a 4 instead of a 2 |
//!
//! # Examples
//!
//! ```
//! use bitboard_2048_types::{Direction, BOARD_SIDE, CELL_COUNT};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!(Direction::from_str("sideways").is_none());
//!
//! // Right and down moves run the merge pass against reading order
//! assert!(Direction::Right.is_reversed());
//! assert!(!Direction::Up.is_reversed());
//!
//! assert_eq!(BOARD_SIDE, 4);
//! assert_eq!(CELL_COUNT, 16);
//! ```

/// Rows (and columns) on the board
pub const BOARD_SIDE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Bits used by one packed cell
pub const CELL_BITS: u32 = 4;

/// Mask selecting a single packed cell
pub const CELL_MASK: u64 = 0xF;

/// Highest storable exponent; merges saturate here
pub const MAX_EXPONENT: u8 = 15;

/// Tiles placed on an empty board by a reset
pub const INITIAL_TILES: usize = 2;

/// Percent chance that a spawned tile is a 4 (exponent 2) rather than a 2
pub const FOUR_TILE_CHANCE_PERCENT: u32 = 10;

/// One row or column of exponents, in reading order
pub type Line = [u8; BOARD_SIDE];

/// Orientation of the lines a move operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Lines are rows, read left to right
    Row,
    /// Lines are columns, read top to bottom
    Column,
}

/// The four move directions
///
/// Tiles slide toward the named edge. `Left` and `Up` merge in reading order;
/// `Right` and `Down` merge from the opposite end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// All directions, in `legal_moves` order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    ///
    /// # Examples
    ///
    /// ```
    /// use bitboard_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("R"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Axis whose lines this direction moves along
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Row,
            Direction::Up | Direction::Down => Axis::Column,
        }
    }

    /// Whether lines are reversed before (and after) the merge pass
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Position of this direction in [`Direction::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_dimensions_fit_in_u64() {
        assert_eq!(CELL_COUNT as u32 * CELL_BITS, u64::BITS);
        assert_eq!(CELL_MASK, (1u64 << CELL_BITS) - 1);
        assert_eq!(MAX_EXPONENT as u64, CELL_MASK);
    }

    #[test]
    fn direction_roundtrips_through_as_str() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn direction_index_matches_all_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }

    #[test]
    fn direction_axis_and_reversal() {
        assert_eq!(Direction::Left.axis(), Axis::Row);
        assert_eq!(Direction::Right.axis(), Axis::Row);
        assert_eq!(Direction::Up.axis(), Axis::Column);
        assert_eq!(Direction::Down.axis(), Axis::Column);

        assert!(!Direction::Left.is_reversed());
        assert!(Direction::Right.is_reversed());
        assert!(!Direction::Up.is_reversed());
        assert!(Direction::Down.is_reversed());
    }

    #[test]
    fn direction_rejects_unknown_names() {
        assert_eq!(Direction::from_str(""), None);
        assert_eq!(Direction::from_str("diagonal"), None);
        assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    }
}
