use anyhow::{anyhow, Result};
use arrayvec::ArrayVec;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::{BoardSnapshot, Game, SimpleRng, TileRng};
use crate::types::Direction;

/// Offset between the spawn seed and the move-picker seed, so the two streams differ
const PICKER_SEED_OFFSET: u32 = 0x9E37_79B9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub seed: u32,
    pub max_moves: u32,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            max_moves: 10_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoplayReport {
    pub seed: u32,
    pub moves: u32,
    pub game_over: bool,
    pub board: BoardSnapshot,
}

pub fn parse_autoplay_args(args: &[String]) -> Result<AutoplayConfig> {
    let mut config = AutoplayConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("autoplay: missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("autoplay: invalid --seed value: {}", v))?;
            }
            "--max-moves" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("autoplay: missing value for --max-moves"))?;
                config.max_moves = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("autoplay: invalid --max-moves value: {}", v))?;
            }
            other => {
                return Err(anyhow!("autoplay: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Play uniformly random legal moves until game over or `max_moves`
pub fn run_autoplay(config: &AutoplayConfig) -> AutoplayReport {
    let mut game = Game::new(config.seed);
    let mut picker = SimpleRng::new(config.seed.wrapping_add(PICKER_SEED_OFFSET));

    let mut moves = 0u32;
    while moves < config.max_moves {
        let legal = game.legal_moves();
        let options: ArrayVec<Direction, 4> = Direction::ALL
            .into_iter()
            .filter(|d| legal[d.index()])
            .collect();
        if options.is_empty() {
            break;
        }

        let direction = options[picker.next_range(options.len() as u32) as usize];
        game.move_tiles(direction, true);
        moves += 1;
    }

    let board = game.snapshot();
    if board.game_over {
        info!(moves, max_tile = board.max_tile, "game over");
    } else {
        debug!(moves, "move cap reached");
    }

    AutoplayReport {
        seed: config.seed,
        moves,
        game_over: board.game_over,
        board,
    }
}
