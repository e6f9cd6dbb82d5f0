//! Command-line and environment configuration.
//!
//! Every flag can also be set through a `MEMORY_PUZZLE_*` environment
//! variable; the command line wins when both are present.

use clap::Parser;

use crate::core::{BoardConfig, Result, TileGeometry};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, GAP_HEIGHT, GAP_WIDTH, TILE_HEIGHT, TILE_WIDTH};

/// Tile-matching memory puzzle for the terminal
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "memory-puzzle")]
#[command(about = "Tile-matching memory puzzle for the terminal")]
#[command(version)]
pub struct Args {
    /// Board width in tiles
    #[arg(long, env = "MEMORY_PUZZLE_WIDTH", default_value_t = BOARD_WIDTH)]
    pub width: u8,

    /// Board height in tiles
    #[arg(long, env = "MEMORY_PUZZLE_HEIGHT", default_value_t = BOARD_HEIGHT)]
    pub height: u8,

    /// Force a seed instead of random
    #[arg(short, long, env = "MEMORY_PUZZLE_SEED")]
    pub seed: Option<u64>,

    /// Tile width in terminal columns
    #[arg(long, env = "MEMORY_PUZZLE_TILE_WIDTH", default_value_t = TILE_WIDTH)]
    pub tile_width: u16,

    /// Tile height in terminal rows
    #[arg(long, env = "MEMORY_PUZZLE_TILE_HEIGHT", default_value_t = TILE_HEIGHT)]
    pub tile_height: u16,

    /// Columns between neighbouring tiles
    #[arg(long, env = "MEMORY_PUZZLE_GAP_WIDTH", default_value_t = GAP_WIDTH)]
    pub gap_width: u16,

    /// Rows between neighbouring tiles
    #[arg(long, env = "MEMORY_PUZZLE_GAP_HEIGHT", default_value_t = GAP_HEIGHT)]
    pub gap_height: u16,

    /// Skip the start-of-round board preview
    #[arg(long, env = "MEMORY_PUZZLE_NO_INTRO")]
    pub no_intro: bool,
}

impl Args {
    pub fn board_config(&self) -> Result<BoardConfig> {
        BoardConfig::new(self.width, self.height)
    }

    /// Tile geometry, checked against the configured board size.
    pub fn geometry(&self) -> Result<TileGeometry> {
        let geometry = TileGeometry::new(
            self.tile_width,
            self.tile_height,
            self.gap_width,
            self.gap_height,
        )?;
        geometry.check_board(&self.board_config()?)?;
        Ok(geometry)
    }

    /// The configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
