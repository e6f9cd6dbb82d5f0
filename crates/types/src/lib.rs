//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! by the core game logic, the input mapper and the terminal view alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns of tiles (indexed 0-9)
//! - **Height**: 7 rows of tiles (indexed 0-6)
//! - **Pairs**: 35, which uses every shape/color combination exactly once
//!
//! # Tile Geometry
//!
//! Terminal cells are roughly twice as tall as they are wide, so a tile is
//! 4 columns by 2 rows, separated by a 2 column / 1 row gap.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 33 | Fixed timestep interval (~30 FPS) |
//! | `SWEEP_MS` | 200 | Duration of a reveal or cover sweep |
//! | `MISMATCH_PAUSE_MS` | 1000 | How long a mismatched pair stays visible |
//! | `WIN_FLASH_INTERVAL_MS` | 300 | Background flash period after a win |
//! | `WIN_HOLD_MS` | 2000 | Pause after the flashing ends |
//! | `NEW_ROUND_PAUSE_MS` | 1000 | Covered fresh board shown before the intro |
//!
//! # Examples
//!
//! ```
//! use memory_puzzle_types::{CellPos, Color, Icon, Shape};
//!
//! let icon = Icon::new(Shape::Diamond, Color::Cyan);
//! assert_eq!(Shape::from_str("diamond"), Some(icon.shape));
//! assert_eq!(Icon::all().len(), 35);
//!
//! let cursor = CellPos::new(0, 0).step(-1, 1, 10, 7);
//! assert_eq!(cursor, CellPos::new(0, 1));
//! ```

/// Board width in tiles (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in tiles (7 rows)
pub const BOARD_HEIGHT: u8 = 7;

/// Tile width in terminal columns
pub const TILE_WIDTH: u16 = 4;

/// Tile height in terminal rows
pub const TILE_HEIGHT: u16 = 2;

/// Horizontal gap between tiles in terminal columns
pub const GAP_WIDTH: u16 = 2;

/// Vertical gap between tiles in terminal rows
pub const GAP_HEIGHT: u16 = 1;

/// Redraw rate of the frame loop
pub const FPS: u32 = 30;

/// Fixed timestep interval in milliseconds (33ms ≈ 30 FPS)
pub const TICK_MS: u32 = 1000 / FPS;

/// Duration of one reveal or cover sweep.
///
/// The classic game sweeps a 40px box at 8px per frame, which is 6 frames at 30 FPS.
pub const SWEEP_MS: u32 = 200;

/// How long a mismatched pair stays face up before it is covered again
pub const MISMATCH_PAUSE_MS: u32 = 1000;

/// Period of one background color swap while celebrating a win
pub const WIN_FLASH_INTERVAL_MS: u32 = 300;

/// Number of background color swaps while celebrating a win
pub const WIN_FLASH_COUNT: u32 = 13;

/// Pause after the win flashing ends, before the board is replaced
pub const WIN_HOLD_MS: u32 = 2000;

/// Time the freshly covered board is shown before the next round starts
pub const NEW_ROUND_PAUSE_MS: u32 = 1000;

/// Number of tiles previewed at once by the start-of-round intro
pub const INTRO_GROUP_SIZE: usize = 8;

/// 24-bit color used by the terminal view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Window background (navy blue)
pub const BG_COLOR: Rgb = Rgb::new(60, 60, 100);

/// Alternate background used by the win flash (gray)
pub const LIGHT_BG_COLOR: Rgb = Rgb::new(100, 100, 100);

/// Color of a covered tile
pub const BOX_COLOR: Rgb = Rgb::new(255, 255, 255);

/// Color of the hover highlight border
pub const HIGHLIGHT_COLOR: Rgb = Rgb::new(0, 0, 255);

/// The five icon shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    Donut,
    Square,
    Diamond,
    Lines,
    Oval,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Donut,
        Shape::Square,
        Shape::Diamond,
        Shape::Lines,
        Shape::Oval,
    ];

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_puzzle_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("Donut"), Some(Shape::Donut));
    /// assert_eq!(Shape::from_str("lines"), Some(Shape::Lines));
    /// assert_eq!(Shape::from_str("star"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "donut" => Some(Shape::Donut),
            "square" => Some(Shape::Square),
            "diamond" => Some(Shape::Diamond),
            "lines" => Some(Shape::Lines),
            "oval" => Some(Shape::Oval),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Donut => "donut",
            Shape::Square => "square",
            Shape::Diamond => "diamond",
            Shape::Lines => "lines",
            Shape::Oval => "oval",
        }
    }
}

/// The seven icon colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Cyan,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::Purple,
        Color::Cyan,
    ];

    /// Display color for this icon color
    pub fn rgb(&self) -> Rgb {
        match self {
            Color::Red => Rgb::new(255, 0, 0),
            Color::Green => Rgb::new(0, 255, 0),
            Color::Blue => Rgb::new(0, 0, 255),
            Color::Yellow => Rgb::new(255, 255, 0),
            Color::Orange => Rgb::new(255, 128, 0),
            Color::Purple => Rgb::new(255, 0, 255),
            Color::Cyan => Rgb::new(0, 255, 255),
        }
    }

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            "yellow" => Some(Color::Yellow),
            "orange" => Some(Color::Orange),
            "purple" => Some(Color::Purple),
            "cyan" => Some(Color::Cyan),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Cyan => "cyan",
        }
    }
}

/// Number of distinct icons (every shape in every color)
pub const ICON_COUNT: usize = Shape::ALL.len() * Color::ALL.len();

/// A shape drawn in a color. Two tiles match when their icons are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Icon {
    pub shape: Shape,
    pub color: Color,
}

impl Icon {
    pub const fn new(shape: Shape, color: Color) -> Self {
        Self { shape, color }
    }

    /// Every possible icon, colors outermost.
    pub fn all() -> [Icon; ICON_COUNT] {
        let mut out = [Icon::new(Shape::Donut, Color::Red); ICON_COUNT];
        let mut i = 0;
        for color in Color::ALL {
            for shape in Shape::ALL {
                out[i] = Icon::new(shape, color);
                i += 1;
            }
        }
        out
    }
}

/// A tile position on the board: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub x: u8,
    pub y: u8,
}

impl CellPos {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Move by `(dx, dy)`, clamped to a `cols` x `rows` grid.
    pub fn step(self, dx: i8, dy: i8, cols: u8, rows: u8) -> Self {
        let clamp = |v: u8, d: i8, len: u8| -> u8 {
            let max = len.saturating_sub(1) as i16;
            (v as i16 + d as i16).clamp(0, max) as u8
        };
        Self {
            x: clamp(self.x, dx, cols),
            y: clamp(self.y, dy, rows),
        }
    }
}
