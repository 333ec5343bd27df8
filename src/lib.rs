//! 2048 bitboard engine (workspace facade crate).
//!
//! Re-exports the engine as `bitboard_2048::{core,types}` while the implementation lives in
//! dedicated crates under `crates/`. The [`autoplay`] module drives headless random games.

pub mod autoplay;

pub use bitboard_2048_core as core;
pub use bitboard_2048_types as types;
