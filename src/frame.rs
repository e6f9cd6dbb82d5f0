//! Applying one frame of input to the game.

use crate::core::{GameState, Layout};
use crate::input::{FrameInput, Target};
use crate::types::CellPos;

/// Map an input target to a board cell, if it lands on one.
pub fn resolve(target: Target, layout: &Layout) -> Option<CellPos> {
    match target {
        Target::Pixel(x, y) => layout.cell_at(x, y),
        Target::Cell(pos) => Some(pos),
    }
}

/// Apply restart and selection from `frame` and return the hovered cell.
///
/// A restart consumes the frame: a selection made in the same frame was aimed
/// at the abandoned board and is dropped.
pub fn apply_frame(game: &mut GameState, frame: &FrameInput, layout: &Layout) -> Option<CellPos> {
    if frame.restart {
        game.restart();
    } else if let Some(pos) = frame.select.and_then(|target| resolve(target, layout)) {
        game.select(pos);
    }
    frame.hover.and_then(|target| resolve(target, layout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardConfig, TileGeometry, TurnState};

    fn setup() -> (GameState, Layout) {
        let config = BoardConfig::new(4, 4).unwrap();
        let mut game = GameState::new(config, 3);
        game.start();
        let layout = Layout::new(&config, TileGeometry::default(), 0, 0);
        (game, layout)
    }

    #[test]
    fn test_click_selects_tile_under_pointer() {
        let (mut game, layout) = setup();
        let frame = FrameInput {
            hover: Some(Target::Pixel(7, 3)),
            select: Some(Target::Pixel(7, 3)),
            ..FrameInput::default()
        };
        let hover = apply_frame(&mut game, &frame, &layout);
        assert_eq!(hover, Some(CellPos::new(1, 1)));
        assert_eq!(game.pending(), Some(CellPos::new(1, 1)));
    }

    #[test]
    fn test_click_in_gap_is_ignored() {
        let (mut game, layout) = setup();
        let frame = FrameInput {
            select: Some(Target::Pixel(4, 0)),
            ..FrameInput::default()
        };
        assert_eq!(apply_frame(&mut game, &frame, &layout), None);
        assert_eq!(game.turn(), &TurnState::Idle);
    }

    #[test]
    fn test_restart_drops_selection_in_same_frame() {
        let (mut game, layout) = setup();
        let frame = FrameInput {
            hover: Some(Target::Cell(CellPos::new(0, 0))),
            select: Some(Target::Cell(CellPos::new(0, 0))),
            restart: true,
            quit: false,
        };
        let hover = apply_frame(&mut game, &frame, &layout);
        assert_eq!(hover, Some(CellPos::new(0, 0)));
        assert_eq!(game.round(), 2);
        assert_eq!(game.turn(), &TurnState::Idle);
        assert!(game.sweep().is_none());
        assert_eq!(game.revealed().revealed_count(), 0);
    }
}
