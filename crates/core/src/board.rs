//! Board module - the grid of paired icons
//!
//! The board holds exactly one icon per cell and every icon it uses appears in
//! exactly two cells. Cells are stored in a flat vector in row-major order
//! (`y * width + x`); generation, lookups and the revealed grid all share this
//! traversal order.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::BoardConfig;
use crate::error::{ConfigError, Result};
use crate::types::{CellPos, Icon};

/// The icon grid for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    icons: Vec<Icon>,
}

impl Board {
    /// Generate a randomized board.
    ///
    /// Shuffles every possible icon, keeps the first `pair_count`, doubles that
    /// list and shuffles again before filling the grid row by row.
    pub fn generate<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> Self {
        let mut pool = Icon::all();
        pool.shuffle(rng);

        let pairs = &pool[..config.pair_count()];
        let mut icons = Vec::with_capacity(config.cell_count());
        icons.extend_from_slice(pairs);
        icons.extend_from_slice(pairs);
        icons.shuffle(rng);

        Self {
            config: *config,
            icons,
        }
    }

    /// Build a board from a fixed, row-major icon list.
    pub fn from_icons(config: &BoardConfig, icons: Vec<Icon>) -> Result<Self> {
        if icons.len() != config.cell_count() {
            return Err(ConfigError::CellCountMismatch {
                expected: config.cell_count(),
                actual: icons.len(),
            });
        }

        let mut sorted = icons.clone();
        sorted.sort_unstable();
        for run in sorted.chunk_by(|a, b| a == b) {
            if run.len() != 2 {
                return Err(ConfigError::UnpairedIcon {
                    shape: run[0].shape.as_str(),
                    color: run[0].color.as_str(),
                    count: run.len(),
                });
            }
        }

        Ok(Self {
            config: *config,
            icons,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn width(&self) -> u8 {
        self.config.width()
    }

    pub fn height(&self) -> u8 {
        self.config.height()
    }

    #[inline(always)]
    fn index(&self, pos: CellPos) -> Option<usize> {
        if pos.x >= self.width() || pos.y >= self.height() {
            return None;
        }
        Some((pos.y as usize) * (self.width() as usize) + (pos.x as usize))
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        self.index(pos).is_some()
    }

    /// Icon at `pos`, or `None` outside the board
    pub fn icon(&self, pos: CellPos) -> Option<Icon> {
        self.index(pos).map(|i| self.icons[i])
    }

    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    /// All cell positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = CellPos> {
        let (w, h) = (self.width(), self.height());
        (0..h).flat_map(move |y| (0..w).map(move |x| CellPos::new(x, y)))
    }

    /// The cells holding `icon` (two for any icon on the board, zero otherwise)
    pub fn cells_with_icon(&self, icon: Icon) -> impl Iterator<Item = CellPos> + '_ {
        self.positions()
            .filter(move |&pos| self.icon(pos) == Some(icon))
    }
}
