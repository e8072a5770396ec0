//! Per-frame action states emitted by the mapper.

use hashbrown::HashMap;

/// Resolved state of one action for the current frame.
///
/// `triggered` and `released` are edge flags: true for exactly one frame
/// per transition. `value` is always within `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActionState {
    /// Smoothed, clamped action value.
    pub value: f32,
    /// Any binding is engaged or the value is meaningfully non-zero.
    pub active: bool,
    /// Rising edge this frame.
    pub triggered: bool,
    /// Falling edge this frame.
    pub released: bool,
}

impl ActionState {
    /// The neutral state reported for unknown actions.
    pub const NEUTRAL: Self = Self {
        value: 0.0,
        active: false,
        triggered: false,
        released: false,
    };
}

/// All action states for one frame, keyed by action id.
///
/// Lookups are total: an id the table never defined reads as
/// [`ActionState::NEUTRAL`] rather than failing.
#[derive(Debug, Clone, Default)]
pub struct ActionSnapshot {
    states: HashMap<String, ActionState>,
}

impl ActionSnapshot {
    pub(crate) fn insert(&mut self, id: String, state: ActionState) {
        self.states.insert(id, state);
    }

    /// State of an action; unknown ids read as neutral.
    #[must_use]
    pub fn state(&self, id: &str) -> ActionState {
        self.states.get(id).copied().unwrap_or_default()
    }

    /// Returns `true` if the action was evaluated this frame.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Value of an action; unknown ids read as `0.0`.
    #[must_use]
    pub fn value(&self, id: &str) -> f32 {
        self.state(id).value
    }

    /// Value of an action, or `fallback` if the id is unknown.
    #[must_use]
    pub fn value_or(&self, id: &str, fallback: f32) -> f32 {
        self.states.get(id).map_or(fallback, |s| s.value)
    }

    /// Returns `true` if the action is active this frame.
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.state(id).active
    }

    /// Returns `true` on the action's rising-edge frame.
    #[must_use]
    pub fn just_triggered(&self, id: &str) -> bool {
        self.state(id).triggered
    }

    /// Returns `true` on the action's falling-edge frame.
    #[must_use]
    pub fn just_released(&self, id: &str) -> bool {
        self.state(id).released
    }

    /// Iterate over all evaluated actions.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ActionState)> {
        self.states.iter().map(|(id, state)| (id.as_str(), *state))
    }

    /// Number of evaluated actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if no actions were evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_id_reads_neutral() {
        let snapshot = ActionSnapshot::default();
        assert_eq!(snapshot.state("dash"), ActionState::NEUTRAL);
        assert!(!snapshot.is_active("dash"));
        assert_eq!(snapshot.value("dash"), 0.0);
    }

    #[test]
    fn value_or_falls_back_only_when_absent() {
        let mut snapshot = ActionSnapshot::default();
        snapshot.insert(
            "move_x".to_owned(),
            ActionState {
                value: 0.0,
                active: false,
                triggered: false,
                released: false,
            },
        );

        assert_eq!(snapshot.value_or("move_x", 0.5), 0.0);
        assert_eq!(snapshot.value_or("move_y", 0.5), 0.5);
        assert!(snapshot.contains("move_x"));
        assert!(!snapshot.contains("move_y"));
    }
}
