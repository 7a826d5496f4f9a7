use crate::app::button::ButtonState;
use crate::app::state::AppState;
use crate::ui::layout::{AppLayout, BUTTON_PADDING_X, BUTTON_PADDING_Y};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, layout: &AppLayout, state: &AppState) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    frame.render_widget(card, layout.card);

    if state.palette.shadow {
        frame.render_widget(Block::default().style(Theme::shadow()), layout.shadow);
    }

    // Pressing shows the full hover color without waiting for the transition
    let mix = if state.button == ButtonState::Pressed {
        1.0
    } else {
        state.hover_mix
    };
    let bg = state.palette.button_bg(mix);

    let button = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(state.palette.label).bg(bg))
        .padding(Padding::new(
            BUTTON_PADDING_X,
            BUTTON_PADDING_X,
            BUTTON_PADDING_Y,
            BUTTON_PADDING_Y,
        ))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(state.counter.label())
        .style(state.palette.label_style())
        .alignment(Alignment::Center)
        .block(button);
    frame.render_widget(paragraph, layout.button);
}
