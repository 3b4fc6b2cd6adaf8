//! Tutorial scene scripts and the headless frame loop that drives them.
//!
//! # Invariants
//! - Scenes own their state; the only inputs are the per-frame snapshot and,
//!   for the arena, the seed.
//! - Key events for frame `n` reach the controller before scene step `n`.
//! - Rendering reads a `Frame`; it never feeds back into the scene.

mod arena;
mod basic;
mod controlled;
mod frame_loop;
mod scene;
mod script;
mod spinner;

pub use arena::ArenaDemo;
pub use basic::{LightsCamera, Nothing};
pub use controlled::ControlledThing;
pub use frame_loop::FrameLoop;
pub use scene::{Demo, DemoOptions, DemoScene, UnknownDemo};
pub use script::{InputScript, KeySpec, ScriptEntry, ScriptError};
pub use spinner::Spinner;

pub fn crate_info() -> &'static str {
    "gamekit-demos v0.1.0"
}
