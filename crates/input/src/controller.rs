use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::binding::{Binding, standard_bindings};
use crate::key::KeyCode;

/// Number of buttons a controller tracks.
pub const BUTTON_COUNT: usize = 6;

/// Transition of a single binding between held and released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Press,
    Release,
    /// Key repeat or an already-consistent state.
    Unchanged,
}

impl Edge {
    /// Signed effect on the bound axes: +1, -1 or 0.
    pub fn effect(self) -> f32 {
        match self {
            Self::Press => 1.0,
            Self::Release => -1.0,
            Self::Unchanged => 0.0,
        }
    }
}

/// Edge detection for one binding given its held state and the incoming event.
pub fn edge(held: bool, pressed: bool) -> Edge {
    match (held, pressed) {
        (false, true) => Edge::Press,
        (true, false) => Edge::Release,
        _ => Edge::Unchanged,
    }
}

/// A raw key transition from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn down(key: KeyCode) -> Self {
        Self { key, pressed: true }
    }

    pub fn up(key: KeyCode) -> Self {
        Self {
            key,
            pressed: false,
        }
    }
}

/// Copy of the controller state taken once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub vector: Vec3,
    pub buttons: [bool; BUTTON_COUNT],
}

impl InputSnapshot {
    /// +1 right, -1 left.
    pub fn right_left(&self) -> f32 {
        self.vector.x
    }

    /// +1 up, -1 down.
    pub fn up_down(&self) -> f32 {
        self.vector.y
    }

    /// +1 forward, -1 back.
    pub fn forward_back(&self) -> f32 {
        self.vector.z
    }

    pub fn is_button_pressed(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }
}

/// Joystick-style view of the keyboard.
///
/// The control vector is the signed sum of the deltas of every held axis
/// binding, so opposing keys cancel. Buttons hold the pressed state of the
/// last edge seen for their binding. State changes only on key edges.
#[derive(Debug, Clone)]
pub struct Controller {
    bindings: Vec<Binding>,
    held: Vec<bool>,
    vector: Vec3,
    buttons: [bool; BUTTON_COUNT],
}

impl Controller {
    pub fn new(bindings: Vec<Binding>) -> Self {
        let held = vec![false; bindings.len()];
        Self {
            bindings,
            held,
            vector: Vec3::ZERO,
            buttons: [false; BUTTON_COUNT],
        }
    }

    /// Controller over [`standard_bindings`].
    pub fn standard() -> Self {
        Self::new(standard_bindings())
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Feed one key transition. Returns true if any binding changed state.
    pub fn on_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let mut changed = false;
        let mut matched = false;
        for i in 0..self.bindings.len() {
            if self.bindings[i].kc != key {
                continue;
            }
            matched = true;
            let e = edge(self.held[i], pressed);
            if e != Edge::Unchanged {
                self.apply(i, e.effect());
                changed = true;
            }
            self.held[i] = pressed;
        }
        if !matched {
            tracing::trace!(%key, pressed, "no binding for key");
        }
        changed
    }

    pub fn handle(&mut self, event: KeyEvent) -> bool {
        self.on_key(event.key, event.pressed)
    }

    /// Release every held binding, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        for i in 0..self.bindings.len() {
            if self.held[i] {
                self.apply(i, Edge::Release.effect());
                self.held[i] = false;
            }
        }
    }

    fn apply(&mut self, index: usize, effect: f32) {
        let binding = &self.bindings[index];
        if let Some(button) = binding.button {
            if button < BUTTON_COUNT {
                self.buttons[button] = effect > 0.0;
            }
        }
        if let Some(dx) = binding.dx {
            self.vector.x += effect * dx;
        }
        if let Some(dy) = binding.dy {
            self.vector.y += effect * dy;
        }
        if let Some(dz) = binding.dz {
            self.vector.z += effect * dz;
        }
    }

    pub fn right_left(&self) -> f32 {
        self.vector.x
    }

    pub fn up_down(&self) -> f32 {
        self.vector.y
    }

    pub fn forward_back(&self) -> f32 {
        self.vector.z
    }

    pub fn control_vector(&self) -> Vec3 {
        self.vector
    }

    /// False for any index outside the button array.
    pub fn is_button_pressed(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            vector: self.vector,
            buttons: self.buttons,
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::standard()
    }
}
