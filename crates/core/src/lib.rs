//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the board model and the turn rules of the memory puzzle.
//! It has **no dependencies** on the terminal, input devices or wall-clock time:
//!
//! - **Deterministic**: the same seed deals the same boards
//! - **Testable**: time only moves through [`GameState::tick`]
//! - **Portable**: the frame loop, a benchmark or a test can drive it
//!
//! # Module Structure
//!
//! - [`config`]: validated board dimensions (the startup precondition checks)
//! - [`board`]: the grid of paired icons and its generator
//! - [`revealed`]: which tiles are face up, and the win check
//! - [`layout`]: screen position <-> tile mapping
//! - [`sweep`]: reveal/cover animation timing
//! - [`game_state`]: the turn state machine and round lifecycle
//!
//! # Rules
//!
//! - Every icon on the board appears on exactly two tiles
//! - A turn reveals two tiles; equal icons stay face up, different ones are
//!   shown for a second and then covered again
//! - Selecting a face-up tile, a gap, or anything while an animation or pause
//!   is running does nothing
//! - When every tile is face up the round is won, the background flashes, and a
//!   fresh board is dealt
//!
//! # Example
//!
//! ```
//! use memory_puzzle_core::{BoardConfig, GameState, SelectOutcome};
//! use memory_puzzle_core::types::{CellPos, SWEEP_MS};
//!
//! let mut game = GameState::new(BoardConfig::new(4, 4).unwrap(), 12345);
//! game.start();
//!
//! assert_eq!(game.select(CellPos::new(0, 0)), SelectOutcome::FirstReveal);
//!
//! // The reveal sweep has to finish before the next tile can be picked.
//! assert_eq!(game.select(CellPos::new(1, 0)), SelectOutcome::Ignored);
//! game.tick(SWEEP_MS);
//! assert_ne!(game.select(CellPos::new(1, 0)), SelectOutcome::Ignored);
//! assert_eq!(game.attempts(), 1);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod layout;
pub mod revealed;
pub mod sweep;

pub use memory_puzzle_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::BoardConfig;
pub use error::{ConfigError, Result};
pub use game_state::{GameState, SelectOutcome, TurnState, WIN_TOTAL_MS};
pub use layout::{Layout, Rect, TileGeometry};
pub use revealed::{has_won, RevealedGrid};
pub use sweep::{Sweep, SweepCells, SweepKind};
