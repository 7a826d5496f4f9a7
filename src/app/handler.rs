use crate::app::action::Action;
use crate::app::button::{ButtonState, PointerEvent};
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => {
            state.step_transition();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Mouse(mouse) => {
            handle_mouse(state, mouse);
            vec![]
        }
        CEvent::Resize(width, height) => {
            tracing::debug!(width, height, "terminal resized");
            state.viewport = Rect::new(0, 0, width, height);
            // The button moved; the next mouse event re-establishes hover
            state.button = ButtonState::Idle;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => vec![Action::Quit],
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        // The button is the only focusable control, so it always has focus.
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.activate();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let inside = state.button_hit(mouse.column, mouse.row);
    let event = match mouse.kind {
        MouseEventKind::Moved => {
            // Plain motion means no button is held; a release we never saw
            if state.button.is_held() {
                state.pointer(PointerEvent::Cancel);
            }
            if inside {
                PointerEvent::Enter
            } else {
                PointerEvent::Leave
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if inside {
                PointerEvent::Enter
            } else {
                PointerEvent::Leave
            }
        }
        MouseEventKind::Down(MouseButton::Left) if inside => PointerEvent::Down,
        MouseEventKind::Up(MouseButton::Left) => {
            if inside {
                PointerEvent::Up
            } else {
                PointerEvent::Cancel
            }
        }
        _ => return,
    };

    if state.pointer(event) {
        state.activate();
    }
}
