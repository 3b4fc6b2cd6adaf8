//! Arena kernel: actor physics and the top-down shooter game state.
//!
//! # Invariants
//! - Actors integrate with forward Euler: force, acceleration, velocity,
//!   position, then friction.
//! - All randomness comes from the arena's seeded RNG.
//! - All game state mutations flow through `Arena::step`.

mod arena;
mod blob;
mod config;
mod gun;
mod physics;
mod thing;

pub use arena::{Arena, ArenaEvent};
pub use blob::Blob;
pub use config::{ArenaConfig, BlobConfig, ConfigError, GunConfig, ThingConfig};
pub use gun::{Bullet, Gun};
pub use physics::{Body, Spin, boundary_push};
pub use thing::Thing;
