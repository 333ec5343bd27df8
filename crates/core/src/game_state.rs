//! Game state module - a board plus its random source
//!
//! [`Game`] owns the [`Board`] and the [`TileRng`] used for spawns. It adds the
//! random parts of the rules on top of the pure board operations: the two
//! starting tiles, and one new tile after every move that changed something.
//!
//! Game over is never stored; [`Game::is_game_over`] computes it on demand.

use tracing::{debug, trace};

use crate::board::Board;
use crate::error::EngineError;
use crate::rng::{SimpleRng, TileRng};
use crate::snapshot::BoardSnapshot;
use crate::types::{Direction, Line, BOARD_SIDE, FOUR_TILE_CHANCE_PERCENT, INITIAL_TILES};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<R = SimpleRng> {
    board: Board,
    rng: R,
}

impl Game<SimpleRng> {
    /// Create a new game with the given RNG seed and two starting tiles
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }

    /// Restart with a fresh seed
    pub fn reseed(&mut self, seed: u32) {
        self.rng = SimpleRng::new(seed);
        self.reset();
    }
}

impl<R: TileRng> Game<R> {
    /// Create a new game drawing spawns from `rng`, with two starting tiles
    pub fn with_rng(rng: R) -> Self {
        let mut game = Self {
            board: Board::new(),
            rng,
        };
        game.reset();
        game
    }

    /// Wrap an existing board without spawning anything
    pub fn from_board(board: Board, rng: R) -> Self {
        Self { board, rng }
    }

    /// Clear the board and spawn the starting tiles
    pub fn reset(&mut self) {
        self.board = Board::new();
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
        debug!(board = self.board.raw(), "game reset");
    }

    /// Get a reference to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board, keeping the RNG stream
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Exponent at cell `index` (0..16)
    pub fn get_cell(&self, index: usize) -> u8 {
        self.board.get_cell(index)
    }

    /// Store `value & 0xF` at cell `index`
    pub fn set_cell(&mut self, index: usize, value: u8) {
        self.board.set_cell(index, value);
    }

    /// Exponents of row `r`, left to right
    pub fn get_row(&self, r: usize) -> Line {
        self.board.get_row(r)
    }

    /// Write row `r`, left to right
    pub fn set_row(&mut self, r: usize, line: Line) {
        self.board.set_row(r, line);
    }

    /// Exponents of column `c`, top to bottom
    pub fn get_column(&self, c: usize) -> Line {
        self.board.get_column(c)
    }

    /// Write column `c`, top to bottom
    pub fn set_column(&mut self, c: usize, line: Line) {
        self.board.set_column(c, line);
    }

    /// Place a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell
    ///
    /// Returns false, leaving the board as is, when no cell is empty.
    pub fn spawn_tile(&mut self) -> bool {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            trace!("spawn skipped: board full");
            return false;
        }

        let index = empty[self.rng.next_range(empty.len() as u32) as usize] as usize;
        let exponent = if self.rng.chance_percent(FOUR_TILE_CHANCE_PERCENT) {
            2
        } else {
            1
        };
        self.board.set_cell(index, exponent);
        trace!(index, exponent, "spawned tile");
        true
    }

    /// Slide and merge toward `direction`
    ///
    /// Returns whether anything moved. When something moved and `spawn` is
    /// set, exactly one tile is spawned after every line has been updated.
    pub fn move_tiles(&mut self, direction: Direction, spawn: bool) -> bool {
        let moved = self.board.shift(direction);
        if moved && spawn {
            self.spawn_tile();
        }
        debug!(direction = direction.as_str(), moved, spawn, "applied move");
        moved
    }

    /// Same as [`Game::move_tiles`], taking the direction by name
    ///
    /// An unknown name is rejected before the board is touched.
    pub fn move_named(&mut self, name: &str, spawn: bool) -> Result<bool, EngineError> {
        let direction = parse_direction(name)?;
        Ok(self.move_tiles(direction, spawn))
    }

    /// Check if no move in any direction could change the board
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Which moves would change the board, in [`Direction::ALL`] order
    pub fn legal_moves(&self) -> [bool; 4] {
        Direction::ALL.map(|d| self.board.can_move(d))
    }

    /// Displayed tile values, row-major
    pub fn get_board(&self) -> [[u32; BOARD_SIDE]; BOARD_SIDE] {
        self.board.to_grid()
    }

    /// Serialisable view of the current board
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(&self.board)
    }
}

impl Default for Game<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Parse a direction name, failing with [`EngineError::InvalidDirection`]
pub fn parse_direction(name: &str) -> Result<Direction, EngineError> {
    Direction::from_str(name).ok_or_else(|| EngineError::InvalidDirection(name.to_string()))
}
