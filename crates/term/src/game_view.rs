//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, Layout};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{CellPos, Icon, Shape, BG_COLOR, BOX_COLOR, HIGHLIGHT_COLOR, LIGHT_BG_COLOR};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Rows reserved at the bottom of the screen for the status and hint lines.
pub const HUD_ROWS: u16 = 2;

const HINT: &str = "click / arrows+enter: flip   r: new board   q: quit";

/// A lightweight terminal renderer for the memory puzzle.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    show_hud: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { show_hud: true }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the status and hint lines.
    pub fn with_hud(mut self, show_hud: bool) -> Self {
        self.show_hud = show_hud;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// `hover` is the tile under the pointer or keyboard cursor; it is only
    /// highlighted when the game would accept it as a selection.
    pub fn render_into(
        &self,
        state: &GameState,
        layout: &Layout,
        hover: Option<CellPos>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);

        let bg = if state.win_flash_on() {
            LIGHT_BG_COLOR
        } else {
            BG_COLOR
        };
        fb.clear(CellStyle::new(BOX_COLOR, bg).into_cell(' '));

        for pos in state.board().positions() {
            self.draw_tile(fb, state, layout, pos, bg);
        }

        if let Some(pos) = state.highlight(hover) {
            self.draw_highlight(fb, layout, pos, bg);
        }

        if self.show_hud {
            self.draw_hud(fb, state, viewport, bg);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        state: &GameState,
        layout: &Layout,
        hover: Option<CellPos>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, layout, hover, viewport, &mut fb);
        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        layout: &Layout,
        pos: CellPos,
        bg: Rgb,
    ) {
        let rect = layout.cell_rect(pos);
        let cover = CellStyle::new(BOX_COLOR, BOX_COLOR);

        // A tile under an active sweep shows its icon behind a partial cover,
        // whatever its revealed state.
        let cover_width = match state.sweep() {
            Some(sweep) if sweep.contains(pos) => sweep.cover_width(rect.width),
            _ if state.revealed().is_revealed(pos) => 0,
            _ => rect.width,
        };

        if cover_width < rect.width {
            if let Some(icon) = state.board().icon(pos) {
                draw_icon(fb, icon, rect.x, rect.y, rect.width, rect.height, bg);
            }
        }
        if cover_width > 0 {
            fb.fill_rect(rect.x, rect.y, cover_width, rect.height, ' ', cover);
        }
    }

    fn draw_highlight(&self, fb: &mut FrameBuffer, layout: &Layout, pos: CellPos, bg: Rgb) {
        let rect = layout.cell_rect(pos);
        let style = CellStyle::new(HIGHLIGHT_COLOR, bg).bold();

        let left = rect.x as i32 - 1;
        let top = rect.y as i32 - 1;
        let right = rect.x as i32 + rect.width as i32;
        let bottom = rect.y as i32 + rect.height as i32;

        put_clipped(fb, left, top, '┏', style);
        put_clipped(fb, right, top, '┓', style);
        put_clipped(fb, left, bottom, '┗', style);
        put_clipped(fb, right, bottom, '┛', style);
        for x in rect.x as i32..right {
            put_clipped(fb, x, top, '━', style);
            put_clipped(fb, x, bottom, '━', style);
        }
        for y in rect.y as i32..bottom {
            put_clipped(fb, left, y, '┃', style);
            put_clipped(fb, right, y, '┃', style);
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport, bg: Rgb) {
        if viewport.height < HUD_ROWS {
            return;
        }
        let label = CellStyle::new(BOX_COLOR, bg).bold();
        let value = CellStyle::new(BOX_COLOR, bg);

        let y = viewport.height - HUD_ROWS;
        let mut x = 1;
        x = fb.put_str(x, y, "Round ", label);
        x = fb.put_u32(x, y, state.round(), value);
        x = fb.put_str(x, y, "   Pairs ", label);
        x = fb.put_u32(x, y, state.pairs_found(), value);
        x = fb.put_str(x, y, "/", value);
        x = fb.put_u32(x, y, state.total_pairs(), value);
        x = fb.put_str(x, y, "   Attempts ", label);
        x = fb.put_u32(x, y, state.attempts(), value);
        if state.is_won() {
            fb.put_str(x, y, "   Solved!", label);
        }

        let hint = CellStyle {
            dim: true,
            ..value
        };
        fb.put_str(1, y + 1, HINT, hint);
    }
}

fn put_clipped(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, style: CellStyle) {
    if let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) {
        fb.put_char(x, y, ch, style);
    }
}

fn draw_icon(fb: &mut FrameBuffer, icon: Icon, x: u16, y: u16, w: u16, h: u16, bg: Rgb) {
    let style = CellStyle::new(icon.color.rgb(), bg);
    for dy in 0..h {
        for dx in 0..w {
            if let Some(ch) = glyph_at(icon.shape, dx, dy, w, h) {
                fb.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }
}

/// The character drawn at `(dx, dy)` inside a `w` x `h` tile, or `None` for
/// background.
pub fn glyph_at(shape: Shape, dx: u16, dy: u16, w: u16, h: u16) -> Option<char> {
    match shape {
        Shape::Donut => {
            let edge = dx == 0 || dy == 0 || dx + 1 == w || dy + 1 == h;
            edge.then_some('o')
        }
        Shape::Square => {
            let inset = w > 2 && (dx == 0 || dx + 1 == w);
            (!inset).then_some('█')
        }
        Shape::Diamond => {
            let cx = (w.saturating_sub(1) / 2)..=(w / 2);
            let cy = (h.saturating_sub(1) / 2)..=(h / 2);
            (cx.contains(&dx) && cy.contains(&dy)).then_some('◆')
        }
        Shape::Lines => ((dx + dy) % 2 == 0).then_some('╱'),
        Shape::Oval => {
            let band = (h / 4)..(h - h / 4);
            band.contains(&dy).then_some('▬')
        }
    }
}

trait IntoCell {
    fn into_cell(self, ch: char) -> Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}
