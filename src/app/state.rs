use crate::app::button::{ButtonState, PointerEvent};
use crate::app::counter::{Count, CounterWidget};
use crate::config::{ConfigError, UiConfig};
use crate::ui::layout;
use crate::ui::theme::Palette;
use ratatui::layout::{Position, Rect};

#[derive(Debug)]
pub struct AppState {
    pub counter: CounterWidget,
    pub button: ButtonState,
    /// Progress of the hover color transition, 0.0 (idle) to 1.0 (hover).
    pub hover_mix: f32,
    /// How far `hover_mix` moves per tick.
    pub mix_step: f32,
    /// Last known terminal size, used for hit testing.
    pub viewport: Rect,
    pub palette: Palette,
    pub dirty: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(ui: &UiConfig, viewport: Rect) -> Result<Self, ConfigError> {
        if ui.tick_rate_ms == 0 {
            return Err(ConfigError::ZeroDuration("tick_rate_ms"));
        }
        if ui.transition_ms == 0 {
            return Err(ConfigError::ZeroDuration("transition_ms"));
        }
        let mix_step = (ui.tick_rate_ms as f32 / ui.transition_ms as f32).min(1.0);

        Ok(Self {
            counter: CounterWidget::mount(),
            button: ButtonState::Idle,
            hover_mix: 0.0,
            mix_step,
            viewport,
            palette: Palette::from_config(ui)?,
            dirty: true,
            should_quit: false,
        })
    }

    pub fn activate(&mut self) -> Count {
        self.dirty = true;
        self.counter.activate()
    }

    /// Whether a terminal cell lies on the button as it is currently drawn.
    pub fn button_hit(&self, column: u16, row: u16) -> bool {
        let label = self.counter.label();
        layout::compute_layout(self.viewport, &label)
            .button
            .contains(Position::new(column, row))
    }

    /// Feed a pointer event to the button. Returns `true` when it completed a
    /// click, i.e. a release on the button that was also pressed there.
    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        let Some(next) = self.button.on_event(event) else {
            return false;
        };
        let clicked = self.button == ButtonState::Pressed && event == PointerEvent::Up;
        tracing::trace!(from = ?self.button, to = ?next, "button state");
        self.button = next;
        self.dirty = true;
        clicked
    }

    /// Advance the hover transition by one tick.
    pub fn step_transition(&mut self) {
        let target = if self.button.is_hot() { 1.0 } else { 0.0 };
        if self.hover_mix == target {
            return;
        }
        self.hover_mix = if self.hover_mix < target {
            (self.hover_mix + self.mix_step).min(target)
        } else {
            (self.hover_mix - self.mix_step).max(target)
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        format!("{} clicks", self.counter.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(&UiConfig::default(), Rect::new(0, 0, 80, 24)).unwrap()
    }

    #[test]
    fn test_new_is_fresh_and_dirty() {
        let s = state();
        assert_eq!(s.counter.count().get(), 0);
        assert_eq!(s.button, ButtonState::Idle);
        assert!(s.dirty);
        assert!(!s.should_quit);
        assert!((s.mix_step - 50.0 / 150.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_durations_rejected() {
        let mut ui = UiConfig::default();
        ui.transition_ms = 0;
        assert_eq!(
            AppState::new(&ui, Rect::new(0, 0, 80, 24)).unwrap_err(),
            ConfigError::ZeroDuration("transition_ms")
        );
        let mut ui = UiConfig::default();
        ui.tick_rate_ms = 0;
        assert!(AppState::new(&ui, Rect::new(0, 0, 80, 24)).is_err());
    }

    #[test]
    fn test_bad_color_rejected() {
        let mut ui = UiConfig::default();
        ui.button_color = "blurple".into();
        assert!(matches!(
            AppState::new(&ui, Rect::new(0, 0, 80, 24)),
            Err(ConfigError::InvalidColor { field: "button_color", .. })
        ));
    }

    #[test]
    fn test_click_requires_press_then_release() {
        let mut s = state();
        assert!(!s.pointer(PointerEvent::Enter));
        assert!(!s.pointer(PointerEvent::Up));
        assert!(!s.pointer(PointerEvent::Down));
        assert!(s.pointer(PointerEvent::Up));
        assert_eq!(s.button, ButtonState::Hovered);
    }

    #[test]
    fn test_transition_converges() {
        let mut s = state();
        s.pointer(PointerEvent::Enter);
        for _ in 0..4 {
            s.step_transition();
        }
        assert_eq!(s.hover_mix, 1.0);
        s.dirty = false;
        s.step_transition();
        assert!(!s.dirty);

        s.pointer(PointerEvent::Leave);
        s.step_transition();
        assert!(s.hover_mix < 1.0 && s.hover_mix > 0.0);
        for _ in 0..4 {
            s.step_transition();
        }
        assert_eq!(s.hover_mix, 0.0);
    }

    #[test]
    fn test_button_hit_matches_layout() {
        let s = state();
        let button = layout::compute_layout(s.viewport, &s.counter.label()).button;
        assert!(s.button_hit(button.x, button.y));
        assert!(s.button_hit(button.right() - 1, button.bottom() - 1));
        assert!(!s.button_hit(button.right(), button.y));
        assert!(!s.button_hit(0, 0));
    }
}
