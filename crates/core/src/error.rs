//! Engine error type
//!
//! Only caller-facing input problems are errors. Misuse that indicates a
//! programming bug (cell index out of range) panics instead, and a full board
//! on spawn is reported through the `bool` return of `spawn_tile`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A move was requested by a name that is not up, down, left or right
    #[error("invalid direction {0:?}: expected one of up, down, left, right")]
    InvalidDirection(String),

    /// A displayed tile value that is neither 0 nor a power of two in 2..=32768
    #[error("invalid tile value {value} at row {row}, column {col}")]
    InvalidTileValue { row: usize, col: usize, value: u32 },
}
