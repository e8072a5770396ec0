//! Declarative binding descriptions and binding-table ingestion.
//!
//! A [`BindingTable`] is the user-editable description of every action:
//! which physical controls feed it, how their readings are scaled and
//! filtered, and the action's smoothing/threshold tuning. Tables come from
//! a JSON document (see [`BindingTable::from_json`]) or from the fluent
//! [`BindingTableBuilder`].
//!
//! Ingestion is deliberately permissive about enum tokens: an unknown
//! `device`, `kind`, or `interpretation` string falls back to the default
//! variant instead of failing, so a hand-edited table degrades gracefully.
//! Missing required fields (`id`, `bindings`, `control`) are hard errors.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Physical device a binding reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// Keyboard keys.
    #[default]
    Keyboard,
    /// Mouse buttons, pointer, and wheel.
    Mouse,
    /// Gamepad buttons and axes.
    Gamepad,
}

impl<'de> Deserialize<'de> for DeviceKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(match text.as_str() {
            "mouse" => Self::Mouse,
            "gamepad" | "controller" => Self::Gamepad,
            "keyboard" => Self::Keyboard,
            other => {
                tracing::warn!(token = other, "unknown device token, using keyboard");
                Self::Keyboard
            }
        })
    }
}

/// How a binding samples its control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingKind {
    /// Discrete pressed/released control.
    #[default]
    Button,
    /// Continuous reading (stick axis, key treated as an axis).
    Axis,
    /// Pointer-style reading (mouse motion, wheel).
    Pointer,
}

impl<'de> Deserialize<'de> for BindingKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(match text.as_str() {
            "axis" => Self::Axis,
            "pointer" => Self::Pointer,
            "button" => Self::Button,
            other => {
                tracing::warn!(token = other, "unknown binding kind, using button");
                Self::Button
            }
        })
    }
}

/// How a continuous reading contributes to the action value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisInterpretation {
    /// Deadzone-filtered value contributes directly.
    #[default]
    Analog,
    /// Beyond the deadzone the axis acts like a held button, contributing
    /// the full scale with the reading's sign.
    Digital,
}

impl<'de> Deserialize<'de> for AxisInterpretation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(match text.as_str() {
            "digital" | "binary" => Self::Digital,
            "analog" => Self::Analog,
            other => {
                tracing::warn!(token = other, "unknown interpretation token, using analog");
                Self::Analog
            }
        })
    }
}

const fn default_scale() -> f32 {
    1.0
}

const fn default_deadzone() -> f32 {
    0.1
}

const fn default_analog_threshold() -> f32 {
    0.2
}

/// One rule mapping a physical control to a contribution toward an action.
///
/// Immutable once constructed. The `control` name is opaque to the mapper;
/// the device collaborator owns that namespace, and a name the snapshot
/// never reports simply reads as neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingDescriptor {
    /// Device the control lives on.
    #[serde(default)]
    pub device: DeviceKind,
    /// How the control is sampled.
    #[serde(default)]
    pub kind: BindingKind,
    /// Device-specific control name (e.g. `"KeyA"`, `"left_x"`, `"wheel"`).
    pub control: String,
    /// Contribution magnitude.
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Magnitude below which an axis/pointer reading is treated as zero.
    #[serde(default = "default_deadzone")]
    pub deadzone: f32,
    /// Press edges flip a persistent on/off state instead of contributing
    /// only while held.
    #[serde(default)]
    pub toggle: bool,
    /// Analog or digital contribution for axis/pointer readings.
    #[serde(default)]
    pub interpretation: AxisInterpretation,
}

impl Default for BindingDescriptor {
    fn default() -> Self {
        Self {
            device: DeviceKind::default(),
            kind: BindingKind::default(),
            control: String::new(),
            scale: default_scale(),
            deadzone: default_deadzone(),
            toggle: false,
            interpretation: AxisInterpretation::default(),
        }
    }
}

impl BindingDescriptor {
    /// Create a button binding.
    #[must_use]
    pub fn button(device: DeviceKind, control: impl Into<String>) -> Self {
        Self {
            device,
            control: control.into(),
            ..Self::default()
        }
    }

    /// Create an axis binding.
    #[must_use]
    pub fn axis(device: DeviceKind, control: impl Into<String>) -> Self {
        Self {
            device,
            kind: BindingKind::Axis,
            control: control.into(),
            ..Self::default()
        }
    }

    /// Create a pointer binding.
    #[must_use]
    pub fn pointer(device: DeviceKind, control: impl Into<String>) -> Self {
        Self {
            device,
            kind: BindingKind::Pointer,
            control: control.into(),
            ..Self::default()
        }
    }

    /// Set the contribution scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the deadzone.
    #[must_use]
    pub const fn with_deadzone(mut self, deadzone: f32) -> Self {
        self.deadzone = deadzone;
        self
    }

    /// Make this a toggle binding.
    #[must_use]
    pub const fn as_toggle(mut self) -> Self {
        self.toggle = true;
        self
    }

    /// Interpret the reading digitally.
    #[must_use]
    pub const fn digital(mut self) -> Self {
        self.interpretation = AxisInterpretation::Digital;
        self
    }
}

/// One action's bindings plus its per-action tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionBindingSpec {
    /// Unique action identifier.
    pub id: String,
    /// Bindings in declared order. Order matters: the last toggle binding
    /// wins the toggle magnitude.
    pub bindings: Vec<BindingDescriptor>,
    /// Smoothing window in seconds; `0` disables smoothing.
    #[serde(default, rename = "smoothing")]
    pub smoothing_window: f32,
    /// Hysteresis band for synthetic trigger/release on continuous actions.
    #[serde(default = "default_analog_threshold")]
    pub analog_threshold: f32,
}

impl ActionBindingSpec {
    /// Create an empty spec with default tuning.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self {
            id,
            bindings: Vec::new(),
            smoothing_window: 0.0,
            analog_threshold: default_analog_threshold(),
        }
    }
}

/// Declarative description of every action, unique by id.
///
/// Action order is not significant; binding order within an action is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BindingTable {
    /// Action specs in document order.
    pub actions: Vec<ActionBindingSpec>,
}

impl BindingTable {
    /// Create a table with a builder pattern.
    #[must_use]
    pub fn builder() -> BindingTableBuilder {
        BindingTableBuilder::new()
    }

    /// Parse a table from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTable`] when the document is missing
    /// `actions`, an action is missing `id` or `bindings`, or a binding is
    /// missing `control`; [`Error::DuplicateAction`] when two actions share
    /// an id. A failed parse applies nothing.
    pub fn from_json(text: &str) -> Result<Self> {
        let table: Self =
            serde_json::from_str(text).map_err(|e| Error::MalformedTable(e.to_string()))?;
        table.check_unique_ids()?;
        Ok(table)
    }

    /// Build a table from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::from_json`].
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let table: Self =
            serde_json::from_value(value).map_err(|e| Error::MalformedTable(e.to_string()))?;
        table.check_unique_ids()?;
        Ok(table)
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = hashbrown::HashSet::with_capacity(self.actions.len());
        for action in &self.actions {
            if !seen.insert(action.id.as_str()) {
                return Err(Error::DuplicateAction(action.id.clone()));
            }
        }
        Ok(())
    }
}

/// Builder for assembling a binding table in code.
#[derive(Debug, Default)]
pub struct BindingTableBuilder {
    actions: Vec<ActionBindingSpec>,
}

impl BindingTableBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding to an action, creating the action if needed.
    #[must_use]
    pub fn bind(mut self, action: impl Into<String>, binding: BindingDescriptor) -> Self {
        self.entry(action.into()).bindings.push(binding);
        self
    }

    /// Set an action's smoothing window, creating the action if needed.
    #[must_use]
    pub fn smoothing(mut self, action: impl Into<String>, window: f32) -> Self {
        self.entry(action.into()).smoothing_window = window;
        self
    }

    /// Set an action's hysteresis threshold, creating the action if needed.
    #[must_use]
    pub fn analog_threshold(mut self, action: impl Into<String>, threshold: f32) -> Self {
        self.entry(action.into()).analog_threshold = threshold;
        self
    }

    /// Build the table.
    #[must_use]
    pub fn build(self) -> BindingTable {
        BindingTable {
            actions: self.actions,
        }
    }

    fn entry(&mut self, id: String) -> &mut ActionBindingSpec {
        let index = match self.actions.iter().position(|a| a.id == id) {
            Some(index) => index,
            None => {
                self.actions.push(ActionBindingSpec::new(id));
                self.actions.len() - 1
            }
        };
        &mut self.actions[index]
    }
}
