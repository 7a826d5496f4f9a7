mod counter_card;
pub mod layout;
mod status_bar;
pub mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let label = state.counter.label();
    let app_layout = layout::compute_layout(frame.area(), &label);

    counter_card::render(frame, &app_layout, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::button::PointerEvent;
    use crate::config::UiConfig;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn state() -> AppState {
        AppState::new(&UiConfig::default(), Rect::new(0, 0, 80, 24)).unwrap()
    }

    fn draw(state: &AppState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_initial_render() {
        let text = screen_text(&draw(&state()));
        assert!(text.contains("Count is 0"));
        assert!(text.contains("0 clicks"));
    }

    #[test]
    fn test_render_after_activations() {
        let mut s = state();
        s.activate();
        assert!(screen_text(&draw(&s)).contains("Count is 1"));
        for _ in 0..4 {
            s.activate();
        }
        let text = screen_text(&draw(&s));
        assert!(text.contains("Count is 5"));
        assert!(!text.contains("Count is 1"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut s = state();
        s.activate();
        s.activate();
        assert_eq!(draw(&s), draw(&s));
    }

    #[test]
    fn test_label_is_inside_button() {
        let s = state();
        let buffer = draw(&s);
        let button = layout::compute_layout(buffer.area, &s.counter.label()).button;
        let row = button.y + button.height / 2;
        let line: String = (button.x..button.right())
            .map(|x| buffer[(x, row)].symbol().to_string())
            .collect();
        assert!(line.contains("Count is 0"));
    }

    #[test]
    fn test_button_uses_palette_colors() {
        let mut s = state();
        let buffer = draw(&s);
        let button = layout::compute_layout(buffer.area, &s.counter.label()).button;
        let inside = (button.x + 1, button.y + 1);
        assert_eq!(buffer[inside].bg, s.palette.button);

        s.pointer(PointerEvent::Down);
        let pressed = draw(&s);
        assert_eq!(pressed[inside].bg, s.palette.button_hover);
    }

    #[test]
    fn test_shadow_toggle() {
        let mut s = state();
        let l = layout::compute_layout(Rect::new(0, 0, 80, 24), &s.counter.label());
        let corner = (l.shadow.right() - 1, l.shadow.bottom() - 1);
        assert_eq!(draw(&s)[corner].bg, Color::Black);

        s.palette.shadow = false;
        assert_ne!(draw(&s)[corner].bg, Color::Black);
    }
}
