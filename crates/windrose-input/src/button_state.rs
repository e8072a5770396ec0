//! Edge-aware button state shared by every device snapshot.

/// Pressed state of a single key or button, paired with the previous
/// frame's state so press/release edges can be derived on the spot.
///
/// The device collaborator rebuilds these every frame: `pressed` from the
/// current poll, `was_pressed` carried over from the frame before. The
/// mapper only ever reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Control is held down this frame.
    pub pressed: bool,
    /// Control was held down last frame.
    pub was_pressed: bool,
}

impl ButtonState {
    /// A held-down state with no edge.
    pub const HELD: Self = Self {
        pressed: true,
        was_pressed: true,
    };

    /// Create a state from current and previous pressed flags.
    #[must_use]
    pub const fn new(pressed: bool, was_pressed: bool) -> Self {
        Self {
            pressed,
            was_pressed,
        }
    }

    /// Returns `true` on the frame the control went down.
    #[inline]
    #[must_use]
    pub const fn just_pressed(self) -> bool {
        self.pressed && !self.was_pressed
    }

    /// Returns `true` on the frame the control came back up.
    #[inline]
    #[must_use]
    pub const fn just_released(self) -> bool {
        !self.pressed && self.was_pressed
    }

    /// Advance one frame with a fresh pressed flag, shifting the current
    /// state into `was_pressed`.
    #[must_use]
    pub const fn advanced(self, pressed: bool) -> Self {
        Self {
            pressed,
            was_pressed: self.pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_from_flag_pair() {
        assert!(ButtonState::new(true, false).just_pressed());
        assert!(!ButtonState::new(true, true).just_pressed());
        assert!(ButtonState::new(false, true).just_released());
        assert!(!ButtonState::new(false, false).just_released());
    }

    #[test]
    fn default_is_idle() {
        let state = ButtonState::default();
        assert!(!state.pressed);
        assert!(!state.just_pressed());
        assert!(!state.just_released());
    }

    #[test]
    fn advanced_shifts_history() {
        let state = ButtonState::default().advanced(true);
        assert!(state.just_pressed());

        let held = state.advanced(true);
        assert!(held.pressed);
        assert!(!held.just_pressed());

        let released = held.advanced(false);
        assert!(released.just_released());
    }
}
