//! Terminal input module (game-facing).
//!
//! Maps `crossterm` key and mouse events into [`InputEvent`]s and accumulates
//! them into one [`FrameInput`] per frame. Mouse and keyboard both drive the
//! same hover/select model; the frame loop resolves pixel targets to board
//! cells.

pub mod handler;
pub mod map;

pub use memory_puzzle_types as types;

pub use handler::{FrameInput, InputState, Target};
pub use map::{handle_key_event, handle_mouse_event, map_event, should_quit};

/// A single input event, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Pointer moved to a screen position (terminal column, row).
    PointerMoved { x: u16, y: u16 },
    /// Left mouse button released at a screen position.
    PointerClicked { x: u16, y: u16 },
    CursorMove { dx: i8, dy: i8 },
    CursorSelect,
    Restart,
    Quit,
}
