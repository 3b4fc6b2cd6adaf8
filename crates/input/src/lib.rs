//! Input Controller: raw key edges mapped to a control vector and buttons.
//!
//! # Invariants
//! - State changes only on press/release edges; key repeat is a no-op.
//! - Axis bindings accumulate, so opposing held keys cancel.
//! - Unbound keys and out-of-range buttons are ignored.

mod binding;
mod controller;
mod key;

pub use binding::{
    Binding, BindingError, bindings_from_json, bindings_from_yaml, load_bindings,
    standard_bindings,
};
pub use controller::{BUTTON_COUNT, Controller, Edge, InputSnapshot, KeyEvent, edge};
pub use key::KeyCode;
