use gamekit_common::to_rad;
use glam::{Mat4, Vec3};

use crate::mesh::Mesh;
use crate::primitive;
use crate::spec::{GeometrySpec, Part, Shape};

/// Fixed primitive resolution used when assembling a spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tessellation {
    pub sphere_segments: u32,
    pub cylinder_radial_segments: u32,
    pub cylinder_height_segments: u32,
    pub box_segments: u32,
}

impl Default for Tessellation {
    fn default() -> Self {
        Self {
            sphere_segments: 16,
            cylinder_radial_segments: 16,
            cylinder_height_segments: 8,
            box_segments: 8,
        }
    }
}

impl Tessellation {
    /// Surface of one shape in its own local space. `None` for
    /// [`Shape::Unknown`].
    pub fn primitive(&self, shape: &Shape) -> Option<Mesh> {
        match *shape {
            Shape::Sphere { r } => Some(primitive::sphere(
                r,
                self.sphere_segments,
                self.sphere_segments,
            )),
            Shape::Cylinder { r1, r2, h } => Some(primitive::cylinder(
                r1,
                r2,
                h,
                self.cylinder_radial_segments,
                self.cylinder_height_segments,
            )),
            Shape::Box { w, h, d } => Some(primitive::cuboid(
                w,
                h,
                d,
                self.box_segments,
                self.box_segments,
                self.box_segments,
            )),
            // Unrecognised shapes emit nothing.
            Shape::Unknown => None,
        }
    }
}

/// Placement of a part: `translation * rotation`, with rotation built from
/// XYZ Euler degrees as `Rx * Ry * Rz`. Absent offsets are identity.
pub fn part_matrix(part: &Part) -> Mat4 {
    let mut matrix = Mat4::IDENTITY;
    if let Some(pos) = part.position {
        matrix *= Mat4::from_translation(Vec3::from(pos));
    }
    if let Some(rot) = part.rotation {
        matrix *= Mat4::from_rotation_x(to_rad(rot.x))
            * Mat4::from_rotation_y(to_rad(rot.y))
            * Mat4::from_rotation_z(to_rad(rot.z));
    }
    matrix
}

/// Merge every part of `spec` into one mesh at the default tessellation.
pub fn make_geometry(spec: &GeometrySpec) -> Mesh {
    make_geometry_with(spec, &Tessellation::default())
}

pub fn make_geometry_with(spec: &GeometrySpec, tessellation: &Tessellation) -> Mesh {
    let mut merged = Mesh::new();
    for (i, part) in spec.parts.iter().enumerate() {
        let Some(shape) = &part.shape else {
            tracing::trace!(part = i, "part has no shape, skipping");
            continue;
        };
        let Some(surface) = tessellation.primitive(shape) else {
            tracing::trace!(part = i, "unknown shape type, skipping");
            continue;
        };
        merged.merge(&surface, part_matrix(part));
    }
    tracing::debug!(
        parts = spec.parts.len(),
        vertices = merged.vertex_count(),
        triangles = merged.triangle_count(),
        "assembled geometry"
    );
    merged
}
