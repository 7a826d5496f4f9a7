use ratatui::layout::{Constraint, Direction, Flex, Layout, Margin, Rect};
use unicode_width::UnicodeWidthStr;

/// Space between the label and the button's side borders.
pub const BUTTON_PADDING_X: u16 = 3;
/// Blank rows above and below the label.
pub const BUTTON_PADDING_Y: u16 = 1;
pub const CARD_PADDING_X: u16 = 4;
pub const CARD_PADDING_Y: u16 = 1;
/// Gap between children of the card's column.
pub const CARD_GAP: u16 = 1;
/// Rows left empty above the card.
pub const CARD_MARGIN_TOP: u16 = 1;
/// Offset of the drop shadow.
pub const SHADOW: u16 = 1;

pub struct AppLayout {
    pub card: Rect,
    pub shadow: Rect,
    pub button: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, label: &str) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    let label_w = label.width() as u16;
    let button_w = label_w + 2 * BUTTON_PADDING_X + 2;
    let button_h = 1 + 2 * BUTTON_PADDING_Y + 2;
    let card_w = button_w + SHADOW + 2 * CARD_PADDING_X + 2;
    let card_h = button_h + SHADOW + 2 * CARD_PADDING_Y + 2;

    // Center the card (plus its top margin) in the content area
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .flex(Flex::Center)
        .constraints([Constraint::Length(CARD_MARGIN_TOP + card_h)])
        .split(content);
    let slot = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([Constraint::Length(card_w)])
        .split(rows[0])[0];

    let margin = CARD_MARGIN_TOP.min(slot.height);
    let card = Rect {
        y: slot.y + margin,
        height: slot.height - margin,
        ..slot
    };

    // Card body: a column of children with centered items
    let body = card.inner(Margin::new(1 + CARD_PADDING_X, 1 + CARD_PADDING_Y));
    let item_row = Layout::default()
        .direction(Direction::Vertical)
        .spacing(CARD_GAP)
        .constraints([Constraint::Length(button_h + SHADOW)])
        .split(body)[0];
    let item = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([Constraint::Length(button_w + SHADOW)])
        .split(item_row)[0];

    let button = Rect {
        width: item.width.saturating_sub(SHADOW),
        height: item.height.saturating_sub(SHADOW),
        ..item
    };
    let shadow = Rect {
        x: button.x + SHADOW,
        y: button.y + SHADOW,
        ..button
    }
    .intersection(item);

    AppLayout {
        card,
        shadow,
        button,
        status_bar,
    }
}
