//! Reveal/cover sweep timing.
//!
//! A sweep slides a tile cover off (reveal) or over (cover) a group of tiles.
//! It only describes how much of each tile is hidden at a point in time; the
//! revealed/covered state it animates towards is already applied to the model.

use arrayvec::ArrayVec;

use crate::types::{CellPos, INTRO_GROUP_SIZE, SWEEP_MS};

/// Tiles animated by a single sweep
pub type SweepCells = ArrayVec<CellPos, INTRO_GROUP_SIZE>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepKind {
    /// The cover shrinks from full width to nothing.
    Reveal,
    /// The cover grows from nothing to full width.
    Cover,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sweep {
    kind: SweepKind,
    cells: SweepCells,
    elapsed_ms: u32,
}

impl Sweep {
    pub fn new(kind: SweepKind, cells: &[CellPos]) -> Self {
        let mut out = SweepCells::new();
        for &pos in cells.iter().take(out.capacity()) {
            out.push(pos);
        }
        Self {
            kind,
            cells: out,
            elapsed_ms: 0,
        }
    }

    pub fn reveal(cells: &[CellPos]) -> Self {
        Self::new(SweepKind::Reveal, cells)
    }

    pub fn cover(cells: &[CellPos]) -> Self {
        Self::new(SweepKind::Cover, cells)
    }

    pub fn kind(&self) -> SweepKind {
        self.kind
    }

    pub fn cells(&self) -> &[CellPos] {
        &self.cells
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        self.cells.contains(&pos)
    }

    /// Time until the sweep finishes.
    pub fn remaining_ms(&self) -> u32 {
        SWEEP_MS - self.elapsed_ms
    }

    /// Advance the sweep, returning the part of `elapsed_ms` past its end.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let step = elapsed_ms.min(self.remaining_ms());
        self.elapsed_ms += step;
        elapsed_ms - step
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= SWEEP_MS
    }

    /// Width of the cover drawn over the left side of each animated tile.
    pub fn cover_width(&self, tile_width: u16) -> u16 {
        let covered_ms = match self.kind {
            SweepKind::Reveal => SWEEP_MS - self.elapsed_ms,
            SweepKind::Cover => self.elapsed_ms,
        };
        let width = (tile_width as u32 * covered_ms).div_ceil(SWEEP_MS);
        width.min(tile_width as u32) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_shrinks_cover() {
        let mut sweep = Sweep::reveal(&[CellPos::new(0, 0)]);
        assert_eq!(sweep.cover_width(4), 4);

        sweep.advance(SWEEP_MS / 2);
        assert_eq!(sweep.cover_width(4), 2);
        assert!(!sweep.is_finished());

        assert_eq!(sweep.advance(SWEEP_MS), SWEEP_MS / 2);
        assert_eq!(sweep.cover_width(4), 0);
        assert_eq!(sweep.remaining_ms(), 0);
        assert!(sweep.is_finished());
    }

    #[test]
    fn cover_grows_cover() {
        let mut sweep = Sweep::cover(&[CellPos::new(1, 0), CellPos::new(2, 0)]);
        assert_eq!(sweep.cover_width(4), 0);

        sweep.advance(1);
        assert_eq!(sweep.cover_width(4), 1);

        sweep.advance(SWEEP_MS);
        assert_eq!(sweep.cover_width(4), 4);
        assert!(sweep.contains(CellPos::new(2, 0)));
        assert!(!sweep.contains(CellPos::new(0, 0)));
    }

    #[test]
    fn cells_are_capped_at_one_intro_group() {
        let cells: Vec<CellPos> = (0..12).map(|x| CellPos::new(x, 0)).collect();
        let sweep = Sweep::reveal(&cells);
        assert_eq!(sweep.cells().len(), INTRO_GROUP_SIZE);
    }
}
