use crate::config::{ConfigError, UiConfig};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use std::str::FromStr;

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn shadow() -> Style {
        Style::default().bg(Color::Black)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_key() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }
}

/// Button colors resolved from config.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub button: Color,
    pub button_hover: Color,
    pub label: Color,
    pub shadow: bool,
}

impl Palette {
    pub fn from_config(ui: &UiConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            button: parse_color("button_color", &ui.button_color)?,
            button_hover: parse_color("button_hover_color", &ui.button_hover_color)?,
            label: parse_color("label_color", &ui.label_color)?,
            shadow: ui.shadow,
        })
    }

    /// Button background `mix` of the way from idle to hover.
    pub fn button_bg(&self, mix: f32) -> Color {
        blend(self.button, self.button_hover, mix)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.label).add_modifier(Modifier::BOLD)
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value.trim()).map_err(|_| ConfigError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

/// Linear blend between two colors. Only RGB colors can be mixed; anything
/// else switches over at the halfway point.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
