//! Shared types and utilities for the gamekit crates.
//!
//! # Invariants
//! - Angles stored on actors are in degrees; conversions happen at the
//!   boundary where a `Quat`/`Mat4` is built.
//! - All randomness flows through [`Rng`] so runs are reproducible by seed.

mod math;
mod rng;
mod types;

pub use math::{forward_vector, to_rad, yaw_rotation};
pub use rng::Rng;
pub use types::Xyz;
