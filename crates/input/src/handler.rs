//! Per-frame input accumulation.
//!
//! The pointer position persists across frames, so a tile stays hovered while
//! the mouse rests on it. Selections do not: each frame yields at most one, and
//! the latest click or cursor select wins.

use arrayvec::ArrayVec;

use crate::types::CellPos;
use crate::InputEvent;

/// Maximum number of events kept for a single frame.
pub const FRAME_EVENT_CAPACITY: usize = 32;

/// A screen position or a board cell chosen with the keyboard cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Pixel(u16, u16),
    Cell(CellPos),
}

/// Everything the frame loop needs from one frame of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub hover: Option<Target>,
    pub select: Option<Target>,
    pub restart: bool,
    pub quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Pointer,
    Cursor,
}

#[derive(Debug, Clone)]
pub struct InputState {
    cols: u8,
    rows: u8,
    pointer: Option<(u16, u16)>,
    cursor: CellPos,
    focus: Focus,
    restart: bool,
    quit: bool,
    events: ArrayVec<InputEvent, FRAME_EVENT_CAPACITY>,
}

impl InputState {
    pub fn new(cols: u8, rows: u8) -> Self {
        Self {
            cols,
            rows,
            pointer: None,
            cursor: CellPos::new(0, 0),
            focus: Focus::Pointer,
            restart: false,
            quit: false,
            events: ArrayVec::new(),
        }
    }

    /// Queue an event for the current frame.
    ///
    /// Restart and quit are flags and are never queued. When the queue is full
    /// the oldest pointer motion makes room; if there is none, new motion is
    /// dropped and anything else replaces the oldest event.
    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::Restart => self.restart = true,
            InputEvent::Quit => self.quit = true,
            _ => {
                if self.events.is_full() {
                    let motion = self
                        .events
                        .iter()
                        .position(|e| matches!(e, InputEvent::PointerMoved { .. }));
                    match (motion, event) {
                        (Some(i), _) => {
                            self.events.remove(i);
                        }
                        (None, InputEvent::PointerMoved { .. }) => return,
                        (None, _) => {
                            self.events.remove(0);
                        }
                    }
                }
                self.events.push(event);
            }
        }
    }

    pub fn cursor(&self) -> CellPos {
        self.cursor
    }

    pub fn pointer(&self) -> Option<(u16, u16)> {
        self.pointer
    }

    /// Consume the queued events and resolve them into one frame of input.
    pub fn take_frame(&mut self) -> FrameInput {
        let mut frame = FrameInput {
            restart: std::mem::take(&mut self.restart),
            quit: std::mem::take(&mut self.quit),
            ..FrameInput::default()
        };

        for event in self.events.drain(..) {
            match event {
                InputEvent::PointerMoved { x, y } => {
                    self.pointer = Some((x, y));
                    self.focus = Focus::Pointer;
                }
                InputEvent::PointerClicked { x, y } => {
                    self.pointer = Some((x, y));
                    self.focus = Focus::Pointer;
                    frame.select = Some(Target::Pixel(x, y));
                }
                InputEvent::CursorMove { dx, dy } => {
                    if self.focus == Focus::Cursor {
                        self.cursor = self.cursor.step(dx, dy, self.cols, self.rows);
                    }
                    self.focus = Focus::Cursor;
                }
                InputEvent::CursorSelect => {
                    self.focus = Focus::Cursor;
                    frame.select = Some(Target::Cell(self.cursor));
                }
                InputEvent::Restart | InputEvent::Quit => {}
            }
        }

        frame.hover = match self.focus {
            Focus::Pointer => self.pointer.map(|(x, y)| Target::Pixel(x, y)),
            Focus::Cursor => Some(Target::Cell(self.cursor)),
        };
        frame
    }
}
