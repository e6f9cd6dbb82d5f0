//! Board configuration and its startup checks.

use crate::error::{ConfigError, Result};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, ICON_COUNT};

/// Validated board dimensions.
///
/// A `BoardConfig` can only be built through [`BoardConfig::new`], so holding one
/// proves the board has an even cell count and enough distinct icons to fill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    width: u8,
    height: u8,
}

impl BoardConfig {
    pub fn new(width: u8, height: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard { width, height });
        }

        let cells = (width as usize) * (height as usize);
        if cells % 2 != 0 {
            return Err(ConfigError::OddCellCount { width, height });
        }

        let available = ICON_COUNT * 2;
        if available < cells {
            return Err(ConfigError::NotEnoughIcons { cells, available });
        }

        Ok(Self { width, height })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Number of distinct icons placed on the board
    pub fn pair_count(&self) -> usize {
        self.cell_count() / 2
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_board() {
        let config = BoardConfig::default();
        assert_eq!(config.width(), 10);
        assert_eq!(config.height(), 7);
        assert_eq!(config.pair_count(), 35);
        assert_eq!(BoardConfig::new(10, 7), Ok(config));
    }

    #[test]
    fn rejects_odd_cell_count() {
        assert_eq!(
            BoardConfig::new(3, 3),
            Err(ConfigError::OddCellCount {
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    fn rejects_boards_larger_than_icon_universe() {
        assert_eq!(
            BoardConfig::new(12, 6),
            Err(ConfigError::NotEnoughIcons {
                cells: 72,
                available: 70
            })
        );
    }

    #[test]
    fn rejects_empty_board() {
        assert!(matches!(
            BoardConfig::new(0, 4),
            Err(ConfigError::EmptyBoard { .. })
        ));
    }

    #[test]
    fn smallest_board_is_one_pair() {
        let config = BoardConfig::new(2, 1).unwrap();
        assert_eq!(config.pair_count(), 1);
    }
}
