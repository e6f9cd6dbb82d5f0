//! Mapping from terminal events to input events.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::InputEvent;

/// Map any terminal event to an input event.
///
/// Key repeats and releases are dropped; mouse motion and drags update the
/// pointer, and a left button release is a click.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(*key) {
                Some(InputEvent::Quit)
            } else {
                handle_key_event(*key)
            }
        }
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        _ => None,
    }
}

/// Map keyboard input to cursor and round actions.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
            Some(InputEvent::CursorMove { dx: -1, dy: 0 })
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            Some(InputEvent::CursorMove { dx: 1, dy: 0 })
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => {
            Some(InputEvent::CursorMove { dx: 0, dy: -1 })
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
            Some(InputEvent::CursorMove { dx: 0, dy: 1 })
        }

        KeyCode::Enter | KeyCode::Char(' ') => Some(InputEvent::CursorSelect),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Restart),

        _ => None,
    }
}

/// Map mouse input to pointer events.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<InputEvent> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_) => {
            Some(InputEvent::PointerMoved { x, y })
        }
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::PointerClicked { x, y }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
