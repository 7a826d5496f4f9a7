/// Pointer input as seen by the button, already hit-tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
    Down,
    Up,
    /// Left button released away from the button.
    Cancel,
}

/// Interaction state of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    Hovered,
    Pressed,
    /// Pressed on the button, then dragged off it with the mouse still held.
    /// Coming back before the release still completes the click.
    Armed,
}

impl ButtonState {
    /// Next state for `event`, or `None` when the event changes nothing.
    pub fn on_event(self, event: PointerEvent) -> Option<Self> {
        match (self, event) {
            (ButtonState::Idle, PointerEvent::Enter) => Some(ButtonState::Hovered),
            (ButtonState::Hovered, PointerEvent::Leave) => Some(ButtonState::Idle),
            (ButtonState::Pressed, PointerEvent::Leave) => Some(ButtonState::Armed),
            (ButtonState::Armed, PointerEvent::Enter) => Some(ButtonState::Pressed),
            (ButtonState::Idle | ButtonState::Hovered, PointerEvent::Down) => {
                Some(ButtonState::Pressed)
            }
            (ButtonState::Pressed, PointerEvent::Up) => Some(ButtonState::Hovered),
            (
                ButtonState::Hovered | ButtonState::Pressed | ButtonState::Armed,
                PointerEvent::Cancel,
            ) => Some(ButtonState::Idle),
            _ => None,
        }
    }

    /// Whether the hover styling applies.
    pub fn is_hot(self) -> bool {
        matches!(self, ButtonState::Hovered | ButtonState::Pressed)
    }

    /// Whether a left press that started on the button is still held.
    pub fn is_held(self) -> bool {
        matches!(self, ButtonState::Pressed | ButtonState::Armed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_cycle() {
        let s = ButtonState::Idle.on_event(PointerEvent::Enter).unwrap();
        assert_eq!(s, ButtonState::Hovered);
        assert_eq!(s.on_event(PointerEvent::Enter), None);
        assert_eq!(s.on_event(PointerEvent::Leave), Some(ButtonState::Idle));
    }

    #[test]
    fn test_press_release() {
        let s = ButtonState::Hovered.on_event(PointerEvent::Down).unwrap();
        assert_eq!(s, ButtonState::Pressed);
        assert_eq!(s.on_event(PointerEvent::Enter), None);
        assert_eq!(s.on_event(PointerEvent::Up), Some(ButtonState::Hovered));
    }

    #[test]
    fn test_press_without_prior_motion() {
        assert_eq!(
            ButtonState::Idle.on_event(PointerEvent::Down),
            Some(ButtonState::Pressed)
        );
    }

    #[test]
    fn test_drag_out_arms_then_release_outside_cancels() {
        let s = ButtonState::Pressed.on_event(PointerEvent::Leave).unwrap();
        assert_eq!(s, ButtonState::Armed);
        assert_eq!(s.on_event(PointerEvent::Up), None);
        assert_eq!(s.on_event(PointerEvent::Cancel), Some(ButtonState::Idle));
    }

    #[test]
    fn test_drag_out_and_back_presses_again() {
        let s = ButtonState::Armed.on_event(PointerEvent::Enter).unwrap();
        assert_eq!(s, ButtonState::Pressed);
        assert_eq!(s.on_event(PointerEvent::Up), Some(ButtonState::Hovered));
    }

    #[test]
    fn test_is_hot_and_held() {
        assert!(!ButtonState::Idle.is_hot());
        assert!(ButtonState::Hovered.is_hot());
        assert!(ButtonState::Pressed.is_hot());
        assert!(!ButtonState::Armed.is_hot());
        assert!(ButtonState::Armed.is_held());
        assert!(ButtonState::Pressed.is_held());
        assert!(!ButtonState::Hovered.is_held());
    }
}
