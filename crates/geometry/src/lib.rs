//! Geometry Assembler: builds one merged mesh from a declarative list of parts.
//!
//! # Invariants
//! - Each part is placed as `translation * rotation` (rotate locally, then move).
//! - Merged vertex count is the sum of the parts' primitive vertex counts.
//! - Unknown shapes and shapeless parts contribute nothing and never fail.

mod assemble;
mod mesh;
pub mod presets;
pub mod primitive;
mod spec;

pub use assemble::{Tessellation, make_geometry, make_geometry_with, part_matrix};
pub use mesh::{BoundingSphere, Mesh, Vertex};
pub use spec::{GeometryError, GeometrySpec, Part, Shape};
