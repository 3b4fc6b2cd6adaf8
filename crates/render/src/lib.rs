//! Rendering Adapter: scene description plus a renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers never mutate simulation state; they read a `Frame`.
//! - Scene setup (lights, camera, floor) is plain data fixed per demo.
//!
//! The GPU scene graph is an external collaborator. A debug text renderer
//! implements the trait so the frame loop can run headless.

mod frame;
mod material;
mod renderer;
mod scene;

pub use frame::{Drawable, Frame, Hud};
pub use material::Material;
pub use renderer::{DebugTextRenderer, JsonRenderer, NullRenderer, Renderer};
pub use scene::{Camera, Floor, FloorShape, HemisphereLight, SceneSetup, SpotLight};

pub fn crate_info() -> &'static str {
    "gamekit-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
