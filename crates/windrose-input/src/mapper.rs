//! The mapping engine: binding table in, action states out.

use hashbrown::HashMap;
use tracing::debug;

use crate::action::{ActionSnapshot, ActionState};
use crate::binding::{
    ActionBindingSpec, AxisInterpretation, BindingDescriptor, BindingKind, BindingTable, DeviceKind,
};
use crate::button_state::ButtonState;
use crate::error::{Error, Result};
use crate::snapshot::DeviceSnapshot;

/// Smoothed values below this magnitude no longer count as active.
const ACTIVE_EPSILON: f32 = 1e-3;

/// Per-action memory carried across frames.
#[derive(Debug)]
struct RuntimeAction {
    bindings: Vec<BindingDescriptor>,
    smoothing_window: f32,
    analog_threshold: f32,
    previous_value: f32,
    previous_active: bool,
    toggle_state: bool,
    toggle_scale: f32,
}

impl RuntimeAction {
    fn new(spec: ActionBindingSpec) -> Self {
        Self {
            bindings: spec.bindings,
            smoothing_window: spec.smoothing_window,
            analog_threshold: spec.analog_threshold,
            previous_value: 0.0,
            previous_active: false,
            toggle_state: false,
            toggle_scale: 1.0,
        }
    }
}

/// Maps raw device snapshots to named action states.
///
/// Owns one mutable memory cell per action (previous smoothed value,
/// toggle state); each `evaluate` call folds the frame's bindings, updates
/// that memory once per action, and emits an immutable [`ActionSnapshot`].
#[derive(Debug, Default)]
pub struct InputMapper {
    actions: HashMap<String, RuntimeAction>,
}

impl InputMapper {
    /// Create an empty mapper.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with a table already loaded.
    #[must_use]
    pub fn with_table(table: BindingTable) -> Self {
        let mut mapper = Self::new();
        mapper.load(table);
        mapper
    }

    /// Replace the full action set, resetting all per-action memory.
    pub fn load(&mut self, table: BindingTable) {
        debug!(actions = table.actions.len(), "loading binding table");
        self.actions.clear();
        for spec in table.actions {
            self.actions.insert(spec.id.clone(), RuntimeAction::new(spec));
        }
    }

    /// Replace one action's bindings in place, keeping its smoothing and
    /// threshold tuning and its toggle/previous-value memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAction`] if the id is not in the loaded
    /// table; a failed rebind changes nothing.
    pub fn rebind(&mut self, action: &str, bindings: Vec<BindingDescriptor>) -> Result<()> {
        let Some(runtime) = self.actions.get_mut(action) else {
            return Err(Error::UnknownAction(action.to_owned()));
        };
        debug!(action, count = bindings.len(), "rebinding action");
        runtime.bindings = bindings;
        Ok(())
    }

    /// Evaluate every action against this frame's snapshot.
    pub fn evaluate(&mut self, snapshot: &DeviceSnapshot) -> ActionSnapshot {
        let mut out = ActionSnapshot::default();
        for (id, runtime) in &mut self.actions {
            out.insert(id.clone(), compute_state(runtime, snapshot));
        }
        out
    }

    /// Evaluate a single action; unknown ids read as neutral.
    pub fn evaluate_one(&mut self, action: &str, snapshot: &DeviceSnapshot) -> ActionState {
        self.actions
            .get_mut(action)
            .map_or(ActionState::NEUTRAL, |runtime| {
                compute_state(runtime, snapshot)
            })
    }

    /// Bindings of an action, in declared order.
    #[must_use]
    pub fn bindings(&self, action: &str) -> Option<&[BindingDescriptor]> {
        self.actions.get(action).map(|a| a.bindings.as_slice())
    }

    /// Returns `true` if the action exists in the loaded table.
    #[must_use]
    pub fn contains(&self, action: &str) -> bool {
        self.actions.contains_key(action)
    }

    /// Returns `true` if the action was active on its last evaluation.
    #[must_use]
    pub fn was_active(&self, action: &str) -> bool {
        self.actions.get(action).is_some_and(|a| a.previous_active)
    }

    /// Iterate over the loaded action ids.
    pub fn action_ids(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// Number of loaded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no table is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Fold one action's bindings into this frame's state and commit the
/// action's memory. Memory is written exactly once, after the fold.
fn compute_state(action: &mut RuntimeAction, snapshot: &DeviceSnapshot) -> ActionState {
    let mut value = 0.0f32;
    let mut any_pressed = false;
    let mut any_triggered = false;
    let mut any_released = false;

    let mut has_toggle = false;
    let mut toggle_value = action.toggle_state;
    let mut toggle_scale = action.toggle_scale;
    let mut toggle_turned_on = false;
    let mut toggle_turned_off = false;

    for binding in &action.bindings {
        match binding.kind {
            BindingKind::Button if binding.toggle => {
                has_toggle = true;
                // Last toggle binding in declared order wins the magnitude.
                toggle_scale = binding.scale;
                if button_state(binding, snapshot).just_pressed() {
                    toggle_value = !toggle_value;
                    if toggle_value {
                        toggle_turned_on = true;
                    } else {
                        toggle_turned_off = true;
                    }
                }
            }
            BindingKind::Button => {
                let button = button_state(binding, snapshot);
                any_pressed |= button.pressed;
                any_triggered |= button.just_pressed();
                any_released |= button.just_released();
                if button.pressed {
                    value += binding.scale;
                }
            }
            BindingKind::Axis | BindingKind::Pointer => {
                let mut axis = axis_value(binding, snapshot);
                if axis.abs() <= binding.deadzone {
                    axis = 0.0;
                }
                match binding.interpretation {
                    AxisInterpretation::Digital => {
                        let engaged = axis.abs() > binding.deadzone;
                        any_pressed |= engaged;
                        // Edge reference is the action's previous smoothed
                        // output, not this binding's own history, so a
                        // digital binding mixed with other contributions
                        // can miss its own transition.
                        if engaged && action.previous_value.abs() <= binding.deadzone {
                            any_triggered = true;
                        }
                        if !engaged && action.previous_value.abs() > binding.deadzone {
                            any_released = true;
                        }
                        if engaged {
                            value += binding.scale * axis.signum();
                        }
                    }
                    AxisInterpretation::Analog => {
                        value += axis;
                        if axis.abs() > binding.deadzone {
                            any_pressed = true;
                        }
                    }
                }
            }
        }
    }

    if has_toggle {
        action.toggle_state = toggle_value;
        action.toggle_scale = toggle_scale;
        if toggle_value {
            value += toggle_scale;
            any_pressed = true;
        }
        any_triggered |= toggle_turned_on;
        any_released |= toggle_turned_off;
    } else {
        // An action whose bindings no longer include a toggle forgets it.
        action.toggle_state = false;
        action.toggle_scale = 1.0;
    }

    value = value.clamp(-1.0, 1.0);

    let smoothed = if action.smoothing_window > 0.0 && snapshot.delta_time > 0.0 {
        let t = (snapshot.delta_time / action.smoothing_window).clamp(0.0, 1.0);
        action.previous_value + (value - action.previous_value) * t
    } else {
        value
    };

    let active = any_pressed || smoothed.abs() > ACTIVE_EPSILON;

    let mut triggered = any_triggered;
    if !triggered && action.analog_threshold > 0.0 {
        triggered = smoothed.abs() >= action.analog_threshold
            && action.previous_value.abs() < action.analog_threshold;
    }

    let mut released = any_released;
    if !released && action.analog_threshold > 0.0 {
        let release_band = action.analog_threshold * 0.5;
        released =
            smoothed.abs() <= release_band && action.previous_value.abs() > release_band;
    }

    action.previous_value = smoothed;
    action.previous_active = active;

    ActionState {
        value: smoothed,
        active,
        triggered,
        released,
    }
}

fn button_state(binding: &BindingDescriptor, snapshot: &DeviceSnapshot) -> ButtonState {
    match binding.device {
        DeviceKind::Keyboard => snapshot.keyboard.key(&binding.control),
        DeviceKind::Mouse => snapshot.mouse.button(&binding.control),
        DeviceKind::Gamepad => snapshot.gamepad.button(&binding.control),
    }
}

/// Raw scaled reading for an axis/pointer binding, before the deadzone.
fn axis_value(binding: &BindingDescriptor, snapshot: &DeviceSnapshot) -> f32 {
    match binding.device {
        DeviceKind::Keyboard => {
            if snapshot.keyboard.key(&binding.control).pressed {
                binding.scale
            } else {
                0.0
            }
        }
        DeviceKind::Mouse => {
            let mouse = &snapshot.mouse;
            let raw = match binding.control.as_str() {
                "x" | "delta_x" => mouse.delta.x,
                "y" | "delta_y" => mouse.delta.y,
                "wheel" | "scroll" => mouse.wheel,
                "position_x" => mouse.position.x,
                "position_y" => mouse.position.y,
                _ => return 0.0,
            };
            raw * binding.scale
        }
        DeviceKind::Gamepad => snapshot.gamepad.axis(&binding.control) * binding.scale,
    }
}
