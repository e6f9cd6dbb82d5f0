use thiserror::Error;

/// Startup precondition failures.
///
/// These are checked once, before any board is generated. Nothing during play
/// returns an error: invalid clicks are no-ops.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must have at least one row and one column (got {width}x{height})")]
    EmptyBoard { width: u8, height: u8 },
    #[error("board needs an even number of cells for pairing (got {width}x{height})")]
    OddCellCount { width: u8, height: u8 },
    #[error(
        "not enough shape/color combinations for this board size ({cells} cells, at most {available})"
    )]
    NotEnoughIcons { cells: usize, available: usize },
    #[error("board has {actual} icons but the grid has {expected} cells")]
    CellCountMismatch { expected: usize, actual: usize },
    #[error("icon {shape}/{color} appears {count} times, expected exactly 2")]
    UnpairedIcon {
        shape: &'static str,
        color: &'static str,
        count: usize,
    },
    #[error("tiles must be at least one cell wide and tall")]
    ZeroTile,
    #[error("gap between tiles must be positive so tiles never overlap")]
    ZeroGap,
    #[error("board spans {width}x{height} terminal cells, more than 65535 per side")]
    GridTooLarge { width: u32, height: u32 },
}

pub type Result<T> = core::result::Result<T, ConfigError>;
