//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the whole 2048 board engine. It has **no dependencies** on UI,
//! input or I/O, which keeps it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: The random source is a type parameter, so tests can script spawns
//! - **Portable**: Usable from a terminal, a GUI, or a headless harness
//! - **Compact**: The entire board is a single `u64`, and `Board` is `Copy`
//!
//! # Module Structure
//!
//! - [`board`]: packed 4x4 bitboard, line extraction, [`process_line`] and moves
//! - [`game_state`]: [`Game`], a board plus its RNG, with spawning and reset
//! - [`rng`]: the [`TileRng`] trait and the seeded [`SimpleRng`]
//! - [`snapshot`]: serialisable [`BoardSnapshot`] for presentation layers
//! - [`error`]: [`EngineError`]
//!
//! # Game Rules
//!
//! - A move slides every tile toward one edge; equal neighbours merge once per move
//! - Merged exponents saturate at 15 (the 4-bit cell limit)
//! - A move that changed the board spawns one tile: a 2 (90%) or a 4 (10%)
//! - The game is over when the board is full and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use bitboard_2048_core::{Board, Game, SimpleRng};
//! use bitboard_2048_core::types::Direction;
//!
//! // A seeded game starts with two tiles
//! let mut game = Game::new(12345);
//! assert_eq!(game.board().tile_count(), 2);
//!
//! // Set up a row by hand and merge it
//! let mut board = Board::new();
//! board.set_row(0, [1, 1, 0, 0]);
//! let mut game = Game::from_board(board, SimpleRng::new(1));
//! assert!(game.move_tiles(Direction::Left, false));
//! assert_eq!(game.get_row(0), [2, 0, 0, 0]);
//! assert_eq!(game.get_board()[0], [4, 0, 0, 0]);
//!
//! // Direction names are validated before anything moves
//! assert!(game.move_named("sideways", true).is_err());
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use bitboard_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{process_line, Board};
pub use error::EngineError;
pub use game_state::{parse_direction, Game};
pub use rng::{SimpleRng, TileRng};
pub use snapshot::BoardSnapshot;
