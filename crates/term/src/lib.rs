//! Terminal "game renderer" module.
//!
//! Renders the puzzle into a framebuffer of styled character cells and flushes
//! it to the terminal, without any widget or layout framework. Board geometry
//! comes from [`core::Layout`], so the pixels of the classic game are terminal
//! cells here and the same layout resolves mouse clicks back to tiles.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use memory_puzzle_core as core;
pub use memory_puzzle_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{glyph_at, GameView, Viewport, HUD_ROWS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
