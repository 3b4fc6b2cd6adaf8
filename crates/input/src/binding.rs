use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::key::KeyCode;

/// Static rule mapping one key code to axis deltas and/or a button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    /// Label for logs and config files.
    #[serde(default)]
    pub which: String,
    pub kc: KeyCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dx: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dy: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dz: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<usize>,
}

impl Binding {
    fn new(which: &str, kc: KeyCode) -> Self {
        Self {
            which: which.to_string(),
            kc,
            dx: None,
            dy: None,
            dz: None,
            button: None,
        }
    }

    pub fn axis_x(which: &str, kc: KeyCode, dx: f32) -> Self {
        Self {
            dx: Some(dx),
            ..Self::new(which, kc)
        }
    }

    pub fn axis_y(which: &str, kc: KeyCode, dy: f32) -> Self {
        Self {
            dy: Some(dy),
            ..Self::new(which, kc)
        }
    }

    pub fn axis_z(which: &str, kc: KeyCode, dz: f32) -> Self {
        Self {
            dz: Some(dz),
            ..Self::new(which, kc)
        }
    }

    pub fn button(which: &str, kc: KeyCode, button: usize) -> Self {
        Self {
            button: Some(button),
            ..Self::new(which, kc)
        }
    }
}

/// Errors from loading binding tables.
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The default table: arrows and WASD drive x/z, Q/E drive y, and Z/X/C/V
/// are buttons 0-3.
pub fn standard_bindings() -> Vec<Binding> {
    vec![
        // xz controls: arrow keys
        Binding::axis_x("left", KeyCode::LEFT, -1.0),
        Binding::axis_x("right", KeyCode::RIGHT, 1.0),
        Binding::axis_z("forward", KeyCode::UP, 1.0),
        Binding::axis_z("back", KeyCode::DOWN, -1.0),
        // xyz controls: w, a, s, d, q, e
        Binding::axis_x("a", KeyCode::ascii('a'), -1.0),
        Binding::axis_x("d", KeyCode::ascii('d'), 1.0),
        Binding::axis_z("s", KeyCode::ascii('s'), -1.0),
        Binding::axis_z("w", KeyCode::ascii('w'), 1.0),
        Binding::axis_y("q", KeyCode::ascii('q'), -1.0),
        Binding::axis_y("e", KeyCode::ascii('e'), 1.0),
        // buttons: z, x, c, v
        Binding::button("z", KeyCode::ascii('z'), 0),
        Binding::button("x", KeyCode::ascii('x'), 1),
        Binding::button("c", KeyCode::ascii('c'), 2),
        Binding::button("v", KeyCode::ascii('v'), 3),
    ]
}

pub fn bindings_from_yaml(s: &str) -> Result<Vec<Binding>, BindingError> {
    Ok(serde_yaml::from_str(s)?)
}

pub fn bindings_from_json(s: &str) -> Result<Vec<Binding>, BindingError> {
    Ok(serde_json::from_str(s)?)
}

/// Load a binding table; `.json` files are read as JSON, anything else as YAML.
pub fn load_bindings(path: impl AsRef<Path>) -> Result<Vec<Binding>, BindingError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)?;
    if path.extension().is_some_and(|e| e == "json") {
        bindings_from_json(&data)
    } else {
        bindings_from_yaml(&data)
    }
}
