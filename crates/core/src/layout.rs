//! Layout module - maps between screen positions and board cells
//!
//! Screen positions are terminal cells `(column, row)`. Tile `(x, y)` occupies
//! the rectangle whose top-left corner is
//!
//! ```text
//! left = margin_x + x * (tile_width  + gap_width)
//! top  = margin_y + y * (tile_height + gap_height)
//! ```
//!
//! and which is `tile_width` x `tile_height` in size. Gaps are always positive,
//! so tile rectangles never overlap and every screen position belongs to at
//! most one tile.

use crate::config::BoardConfig;
use crate::error::{ConfigError, Result};
use crate::types::{CellPos, GAP_HEIGHT, GAP_WIDTH, TILE_HEIGHT, TILE_WIDTH};

/// Tile and gap sizes, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileGeometry {
    tile_width: u16,
    tile_height: u16,
    gap_width: u16,
    gap_height: u16,
}

impl TileGeometry {
    pub fn new(tile_width: u16, tile_height: u16, gap_width: u16, gap_height: u16) -> Result<Self> {
        if tile_width == 0 || tile_height == 0 {
            return Err(ConfigError::ZeroTile);
        }
        if gap_width == 0 || gap_height == 0 {
            return Err(ConfigError::ZeroGap);
        }
        Ok(Self {
            tile_width,
            tile_height,
            gap_width,
            gap_height,
        })
    }

    pub fn tile_width(&self) -> u16 {
        self.tile_width
    }

    pub fn tile_height(&self) -> u16 {
        self.tile_height
    }

    pub fn gap_width(&self) -> u16 {
        self.gap_width
    }

    pub fn gap_height(&self) -> u16 {
        self.gap_height
    }

    /// Reject boards whose tiles would not all have distinct screen positions.
    ///
    /// Screen coordinates are `u16`, so the grid including its trailing gaps
    /// must span at most `u16::MAX` cells on each axis.
    pub fn check_board(&self, config: &BoardConfig) -> Result<()> {
        let width = config.width() as u32 * self.stride_x();
        let height = config.height() as u32 * self.stride_y();
        if width > u16::MAX as u32 || height > u16::MAX as u32 {
            return Err(ConfigError::GridTooLarge { width, height });
        }
        Ok(())
    }

    fn stride_x(&self) -> u32 {
        self.tile_width as u32 + self.gap_width as u32
    }

    fn stride_y(&self) -> u32 {
        self.tile_height as u32 + self.gap_height as u32
    }
}

impl Default for TileGeometry {
    fn default() -> Self {
        Self {
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            gap_width: GAP_WIDTH,
            gap_height: GAP_HEIGHT,
        }
    }
}

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn contains(&self, px: u16, py: u16) -> bool {
        let (px, py) = (px as u32, py as u32);
        px >= self.x as u32
            && py >= self.y as u32
            && px < self.x as u32 + self.width as u32
            && py < self.y as u32 + self.height as u32
    }
}

/// Placement of the board grid on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    cols: u8,
    rows: u8,
    geometry: TileGeometry,
    margin_x: u16,
    margin_y: u16,
}

impl Layout {
    pub fn new(config: &BoardConfig, geometry: TileGeometry, margin_x: u16, margin_y: u16) -> Self {
        Self {
            cols: config.width(),
            rows: config.height(),
            geometry,
            margin_x,
            margin_y,
        }
    }

    /// Center the grid in a `viewport_width` x `viewport_height` screen.
    ///
    /// Margins are `(viewport - cells * (tile + gap)) / 2`, clamped at zero when
    /// the grid does not fit.
    pub fn centered(
        config: &BoardConfig,
        geometry: TileGeometry,
        viewport_width: u16,
        viewport_height: u16,
    ) -> Self {
        let span_x = config.width() as u32 * geometry.stride_x();
        let span_y = config.height() as u32 * geometry.stride_y();
        let margin_x = (viewport_width as u32).saturating_sub(span_x) / 2;
        let margin_y = (viewport_height as u32).saturating_sub(span_y) / 2;
        Self::new(config, geometry, margin_x as u16, margin_y as u16)
    }

    pub fn geometry(&self) -> TileGeometry {
        self.geometry
    }

    pub fn margins(&self) -> (u16, u16) {
        (self.margin_x, self.margin_y)
    }

    /// Width and height covered by the tiles, excluding the trailing gap.
    pub fn grid_size(&self) -> (u32, u32) {
        let w = (self.cols as u32 * self.geometry.stride_x())
            .saturating_sub(self.geometry.gap_width as u32);
        let h = (self.rows as u32 * self.geometry.stride_y())
            .saturating_sub(self.geometry.gap_height as u32);
        (w, h)
    }

    /// Whether every tile lies inside a viewport of the given size.
    pub fn fits(&self, viewport_width: u16, viewport_height: u16) -> bool {
        let (w, h) = self.grid_size();
        self.margin_x as u32 + w <= viewport_width as u32
            && self.margin_y as u32 + h <= viewport_height as u32
    }

    /// Top-left screen position of a tile.
    pub fn cell_origin(&self, pos: CellPos) -> (u16, u16) {
        let left = self.margin_x as u32 + pos.x as u32 * self.geometry.stride_x();
        let top = self.margin_y as u32 + pos.y as u32 * self.geometry.stride_y();
        (clamp_u16(left), clamp_u16(top))
    }

    pub fn cell_rect(&self, pos: CellPos) -> Rect {
        let (x, y) = self.cell_origin(pos);
        Rect {
            x,
            y,
            width: self.geometry.tile_width,
            height: self.geometry.tile_height,
        }
    }

    /// The tile under a screen position.
    ///
    /// Returns `None` for margins, gaps and anything past the last row or column.
    pub fn cell_at(&self, px: u16, py: u16) -> Option<CellPos> {
        let x = axis_cell(
            px,
            self.margin_x,
            self.geometry.stride_x(),
            self.geometry.tile_width,
            self.cols,
        )?;
        let y = axis_cell(
            py,
            self.margin_y,
            self.geometry.stride_y(),
            self.geometry.tile_height,
            self.rows,
        )?;
        Some(CellPos::new(x, y))
    }
}

fn axis_cell(p: u16, margin: u16, stride: u32, tile: u16, count: u8) -> Option<u8> {
    let offset = (p as u32).checked_sub(margin as u32)?;
    let index = offset / stride;
    if index >= count as u32 || offset % stride >= tile as u32 {
        return None;
    }
    Some(index as u8)
}

fn clamp_u16(v: u32) -> u16 {
    v.min(u16::MAX as u32) as u16
}
