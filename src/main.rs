//! Headless autoplay runner (default binary).
//!
//! Plays random legal moves from a seed until the game is over (or the move cap is hit)
//! and prints one JSON line describing the final board. Diagnostics go to stderr and are
//! controlled by `RUST_LOG`.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bitboard_2048::autoplay::{parse_autoplay_args, run_autoplay};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_autoplay_args(&args)?;
    tracing::info!(seed = config.seed, max_moves = config.max_moves, "starting autoplay");

    let report = run_autoplay(&config);
    let line = serde_json::to_string(&report).context("autoplay: failed to encode report")?;
    println!("{}", line);
    Ok(())
}
