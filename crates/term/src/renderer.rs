//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw; every other frame only writes the runs of cells that
//! changed since the previous one.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Owns stdout while the game screen is active.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableMouseCapture)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer diffs against the previous frame and then swaps buffers,
    /// so the caller gets the old one back to render into without cloning.
    pub fn draw(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        if !self.buf.is_empty() {
            self.flush_buf()?;
        }

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`: clear, then every row as one run.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        write_run(out, &mut pen, fb, 0, y, fb.width())?;
    }
    pen.finish(out)
}

/// Encode only the runs of cells that differ between two same-sized frames.
///
/// Identical frames encode to nothing.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for_each_changed_run(prev, next, |x, y, len| write_run(out, &mut pen, next, x, y, len))?;
    pen.finish(out)
}

fn write_run(
    out: &mut Vec<u8>,
    pen: &mut Pen,
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
) -> Result<()> {
    if len == 0 {
        return Ok(());
    }
    out.queue(cursor::MoveTo(x, y))?;
    for cx in x..x.saturating_add(len) {
        let cell = fb.get(cx, y).unwrap_or_default();
        pen.set(out, cell.style)?;
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

/// The style last sent to the terminal within one encoded frame.
///
/// Only the parts that differ from it are emitted. Tiles share one background
/// across many glyph colors, so a run usually costs one background change and
/// a foreground change per glyph.
#[derive(Debug, Default)]
struct Pen {
    current: Option<CellStyle>,
}

impl Pen {
    fn set(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        let prev = self.current.replace(style);
        if prev == Some(style) {
            return Ok(());
        }

        if prev.map(|p| p.fg) != Some(style.fg) {
            out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        }
        if prev.map(|p| p.bg) != Some(style.bg) {
            out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        }

        let (was_bold, was_dim) = prev.map_or((false, false), |p| (p.bold, p.dim));
        // SGR 22 clears bold and dim together.
        let cleared = (was_bold && !style.bold) || (was_dim && !style.dim);
        if cleared {
            out.queue(SetAttribute(Attribute::NormalIntensity))?;
        }
        if style.bold && (cleared || !was_bold) {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim && (cleared || !was_dim) {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }

    /// Leave the terminal with default colors if anything was styled.
    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.current.is_some() {
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for each maximal horizontal run of changed cells.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    debug_assert_eq!((prev.width(), prev.height()), (next.width(), next.height()));
    let w = next.width() as usize;
    if w == 0 {
        return Ok(());
    }

    let rows = prev.cells().chunks_exact(w).zip(next.cells().chunks_exact(w));
    for (y, (old, new)) in rows.enumerate() {
        let mut x = 0;
        while x < w {
            if old[x] == new[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && old[x] != new[x] {
                x += 1;
            }
            f(start as u16, y as u16, (x - start) as u16)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;
    use crate::types::{BG_COLOR, BOX_COLOR};

    fn tile_style() -> CellStyle {
        CellStyle::new(BOX_COLOR, BOX_COLOR)
    }

    fn encoded(fb: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_full_into(fb, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_redraw_positions_each_row() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "abc", CellStyle::default());
        fb.put_str(0, 1, "def", CellStyle::default());

        let text = encoded(&fb);
        assert!(text.contains("\x1b[1;1H"));
        assert!(text.contains("abc"));
        assert!(text.contains("\x1b[2;1Hdef"));
        assert!(!text.contains("\r\n"));
        assert!(text.ends_with("\x1b[0m"));
    }

    #[test]
    fn identical_frames_emit_nothing() {
        let fb = FrameBuffer::new(4, 2);
        let mut out = Vec::new();
        encode_diff_into(&fb, &fb, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn shared_background_is_set_once() {
        let red = Rgb::new(255, 0, 0);
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_char(0, 0, 'o', CellStyle::new(red, BOX_COLOR));
        fb.put_char(1, 0, 'o', CellStyle::new(BG_COLOR, BOX_COLOR));
        fb.put_char(2, 0, 'o', CellStyle::new(red, BOX_COLOR));

        let text = encoded(&fb);
        assert_eq!(text.matches("48;2;").count(), 1);
        assert_eq!(text.matches("38;2;").count(), 3);
        assert_eq!(text.matches("\x1b[0m").count(), 1);
    }

    #[test]
    fn dropping_bold_uses_normal_intensity() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.put_char(0, 0, 'A', CellStyle::default().bold());
        fb.put_char(1, 0, 'b', CellStyle::default());

        let text = encoded(&fb);
        assert_eq!(text.matches("\x1b[1m").count(), 1);
        assert!(text.contains("\x1b[22mb"));
        assert_eq!(text.matches("38;2;").count(), 1);
    }

    #[test]
    fn style_conversion_keeps_channels() {
        assert_eq!(
            rgb_to_color(BG_COLOR),
            Color::Rgb {
                r: 60,
                g: 60,
                b: 100
            }
        );
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let a = FrameBuffer::new(8, 2);
        let mut b = FrameBuffer::new(8, 2);

        // One tile's worth of cover on the second row.
        b.fill_rect(2, 1, 4, 1, ' ', tile_style());
        b.set(
            7,
            0,
            Cell {
                ch: 'o',
                style: CellStyle::default(),
            },
        );

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(7, 0, 1), (2, 1, 4)]);
    }

    #[test]
    fn diff_moves_only_to_changed_runs() {
        let a = FrameBuffer::new(8, 2);
        let mut b = a.clone();
        b.put_str(5, 1, "xy", CellStyle::default());

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('H').count(), 1);
        assert!(text.contains("\x1b[2;6H"));
        assert!(text.ends_with("xy\x1b[0m"));
    }
}
