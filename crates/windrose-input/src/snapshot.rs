//! Per-frame raw device snapshots consumed by the mapper.
//!
//! A [`DeviceSnapshot`] is an immutable readout of every raw control for
//! one frame, assembled by whatever polls the OS or the controller layer.
//! Control names are opaque identifiers owned by that collaborator
//! (e.g. `"KeyA"`, `"left_x"`, `"wheel"`); lookups for names that were
//! never reported resolve to a neutral state rather than failing.

use glam::Vec2;
use hashbrown::HashMap;

use crate::button_state::ButtonState;

/// Keyboard keys by name.
#[derive(Debug, Clone, Default)]
pub struct KeyboardSnapshot {
    keys: HashMap<String, ButtonState>,
}

impl KeyboardSnapshot {
    /// Record the state of a key.
    pub fn set_key(&mut self, name: impl Into<String>, state: ButtonState) {
        self.keys.insert(name.into(), state);
    }

    /// State of a key; unknown names read as unpressed.
    #[must_use]
    pub fn key(&self, name: &str) -> ButtonState {
        self.keys.get(name).copied().unwrap_or_default()
    }

    /// Returns `true` if the key is currently held.
    #[must_use]
    pub fn is_down(&self, name: &str) -> bool {
        self.key(name).pressed
    }
}

/// Mouse buttons plus the frame's pointer and wheel readings.
#[derive(Debug, Clone, Default)]
pub struct MouseSnapshot {
    buttons: HashMap<String, ButtonState>,
    /// Cursor position in window coordinates.
    pub position: Vec2,
    /// Cursor movement since last frame.
    pub delta: Vec2,
    /// Wheel movement since last frame.
    pub wheel: f32,
}

impl MouseSnapshot {
    /// Record the state of a mouse button.
    pub fn set_button(&mut self, name: impl Into<String>, state: ButtonState) {
        self.buttons.insert(name.into(), state);
    }

    /// State of a button; unknown names read as unpressed.
    #[must_use]
    pub fn button(&self, name: &str) -> ButtonState {
        self.buttons.get(name).copied().unwrap_or_default()
    }

    /// Returns `true` if the button is currently held.
    #[must_use]
    pub fn is_down(&self, name: &str) -> bool {
        self.button(name).pressed
    }
}

/// Gamepad buttons and analog axes by name.
#[derive(Debug, Clone, Default)]
pub struct GamepadSnapshot {
    buttons: HashMap<String, ButtonState>,
    axes: HashMap<String, f32>,
}

impl GamepadSnapshot {
    /// Record the state of a gamepad button.
    pub fn set_button(&mut self, name: impl Into<String>, state: ButtonState) {
        self.buttons.insert(name.into(), state);
    }

    /// Record an axis reading.
    pub fn set_axis(&mut self, name: impl Into<String>, value: f32) {
        self.axes.insert(name.into(), value);
    }

    /// State of a button; unknown names read as unpressed.
    #[must_use]
    pub fn button(&self, name: &str) -> ButtonState {
        self.buttons.get(name).copied().unwrap_or_default()
    }

    /// Value of an axis; unknown names read as `0.0`.
    #[must_use]
    pub fn axis(&self, name: &str) -> f32 {
        self.axes.get(name).copied().unwrap_or_default()
    }

    /// Returns `true` if the button is currently held.
    #[must_use]
    pub fn is_down(&self, name: &str) -> bool {
        self.button(name).pressed
    }
}

/// Immutable readout of all raw controls for one frame.
#[derive(Debug, Clone, Default)]
pub struct DeviceSnapshot {
    /// Keyboard keys.
    pub keyboard: KeyboardSnapshot,
    /// Mouse buttons, pointer, and wheel.
    pub mouse: MouseSnapshot,
    /// Gamepad buttons and axes.
    pub gamepad: GamepadSnapshot,
    /// Elapsed time for this frame, in seconds. Never negative.
    pub delta_time: f32,
}

impl DeviceSnapshot {
    /// Create an empty snapshot for a frame of the given length.
    #[must_use]
    pub fn new(delta_time: f32) -> Self {
        Self {
            delta_time,
            ..Self::default()
        }
    }
}
