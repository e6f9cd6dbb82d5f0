//! Which tiles are currently face up.

use crate::types::CellPos;

/// Per-cell revealed flags, same shape and traversal order as the [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevealedGrid {
    width: u8,
    height: u8,
    cells: Vec<bool>,
}

impl RevealedGrid {
    pub fn new(width: u8, height: u8, value: bool) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![value; len],
        }
    }

    #[inline(always)]
    fn index(&self, pos: CellPos) -> Option<usize> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        Some((pos.y as usize) * (self.width as usize) + (pos.x as usize))
    }

    /// Out-of-bounds cells read as covered.
    pub fn is_revealed(&self, pos: CellPos) -> bool {
        self.index(pos).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Returns false if out of bounds
    pub fn set(&mut self, pos: CellPos, value: bool) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn reveal(&mut self, pos: CellPos) -> bool {
        self.set(pos, true)
    }

    pub fn cover(&mut self, pos: CellPos) -> bool {
        self.set(pos, false)
    }

    pub fn set_all(&mut self, value: bool) {
        self.cells.fill(value);
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

/// True iff every tile is revealed.
pub fn has_won(revealed: &RevealedGrid) -> bool {
    revealed.cells.iter().all(|&v| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_covered() {
        let grid = RevealedGrid::new(4, 3, false);
        assert_eq!(grid.cells().len(), 12);
        assert_eq!(grid.revealed_count(), 0);
        assert!(!has_won(&grid));
    }

    #[test]
    fn has_won_needs_every_cell() {
        let mut grid = RevealedGrid::new(2, 1, false);
        grid.reveal(CellPos::new(0, 0));
        assert!(!has_won(&grid));

        grid.reveal(CellPos::new(1, 0));
        assert!(has_won(&grid));

        grid.cover(CellPos::new(1, 0));
        assert!(!has_won(&grid));
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut grid = RevealedGrid::new(2, 2, false);
        assert!(!grid.reveal(CellPos::new(2, 0)));
        assert!(!grid.is_revealed(CellPos::new(0, 5)));
        assert_eq!(grid.revealed_count(), 0);
    }

    #[test]
    fn set_all_resets_every_cell() {
        let mut grid = RevealedGrid::new(3, 2, true);
        assert!(has_won(&grid));
        grid.set_all(false);
        assert_eq!(grid.revealed_count(), 0);
    }
}
