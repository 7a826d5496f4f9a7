use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HINTS: [(&str, &str); 3] = [("Enter", "count"), ("Click", "count"), ("q", "quit")];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    for (key, what) in HINTS {
        parts.push(Span::styled(format!(" {} ", key), Theme::status_key()));
        parts.push(Span::styled(format!("{} ", what), Theme::status_bar()));
    }

    // Right-aligned click total
    let status = format!(" {} ", state.status_line());
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + status.len());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(status, Theme::status_bar()));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
