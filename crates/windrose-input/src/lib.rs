//! Input mapping for the Windrose engine.
//!
//! This crate turns per-frame raw device samples (keyboard keys, mouse
//! buttons/axes, gamepad buttons/axes) into stable, named action states
//! that gameplay code consumes. Bindings are declarative: a table maps
//! each action to a list of physical controls with scales, deadzones,
//! toggle flags, and analog/digital interpretation, and can be reloaded
//! or rebound at runtime.
//!
//! Device polling lives elsewhere; this crate is a pure function of
//! (binding table, per-action memory, raw snapshot) → action states.
//!
//! # Core Types
//!
//! - [`InputMapper`]: Main entry point; owns the per-action memory
//! - [`BindingTable`]: Declarative action/binding description
//! - [`DeviceSnapshot`]: One frame's raw control readout
//! - [`ActionSnapshot`]: One frame's resolved action states
//!
//! # Usage
//!
//! ```ignore
//! use windrose_input::{BindingTable, DeviceSnapshot, InputMapper};
//!
//! // Load a user-editable binding table
//! let table = BindingTable::from_json(r#"{
//!     "actions": [
//!         { "id": "move_x", "smoothing": 0.15, "bindings": [
//!             { "control": "KeyA", "scale": -1.0 },
//!             { "control": "KeyD" },
//!             { "device": "gamepad", "kind": "axis", "control": "left_x" }
//!         ] },
//!         { "id": "dash", "bindings": [
//!             { "device": "gamepad", "control": "south" }
//!         ] }
//!     ]
//! }"#)?;
//! let mut mapper = InputMapper::with_table(table);
//!
//! // Each frame: the device collaborator hands over a snapshot
//! fn update(mapper: &mut InputMapper, snapshot: &DeviceSnapshot) {
//!     let actions = mapper.evaluate(snapshot);
//!
//!     let strafe = actions.value("move_x");
//!     if actions.just_triggered("dash") {
//!         // Start the dash
//!     }
//! }
//! ```

mod action;
mod binding;
mod button_state;
mod error;
mod mapper;
mod snapshot;

pub use action::{ActionSnapshot, ActionState};
pub use binding::{
    ActionBindingSpec, AxisInterpretation, BindingDescriptor, BindingKind, BindingTable,
    BindingTableBuilder, DeviceKind,
};
pub use button_state::ButtonState;
pub use error::{Error, Result};
pub use mapper::InputMapper;
pub use snapshot::{DeviceSnapshot, GamepadSnapshot, KeyboardSnapshot, MouseSnapshot};
