use bytemuck::{Pod, Zeroable};
use gamekit_common::to_rad;
use glam::{Mat3, Mat4, Vec3};

/// Interleaved vertex layout handed to a GPU backend.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Sphere enclosing every vertex of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

/// Indexed triangle mesh in local space.
///
/// `positions` and `normals` always have the same length; `indices` holds
/// three entries per triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Append a vertex and return its index.
    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        index
    }

    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Append `other` transformed by `matrix`. Indices are rebased onto the
    /// vertices already present.
    pub fn merge(&mut self, other: &Mesh, matrix: Mat4) {
        let offset = self.positions.len() as u32;
        let normal_matrix = normal_matrix(matrix);

        self.positions.reserve(other.positions.len());
        self.normals.reserve(other.normals.len());
        for (p, n) in other.positions.iter().zip(&other.normals) {
            self.positions.push(matrix.transform_point3(*p));
            self.normals.push((normal_matrix * *n).normalize_or_zero());
        }
        self.indices.extend(other.indices.iter().map(|i| i + offset));
    }

    /// Apply `matrix` to every vertex in place.
    pub fn transform(&mut self, matrix: Mat4) {
        let normal_matrix = normal_matrix(matrix);
        for p in &mut self.positions {
            *p = matrix.transform_point3(*p);
        }
        for n in &mut self.normals {
            *n = (normal_matrix * *n).normalize_or_zero();
        }
    }

    pub fn rotate_x(&mut self, degrees: f32) {
        self.transform(Mat4::from_rotation_x(to_rad(degrees)));
    }

    pub fn rotate_y(&mut self, degrees: f32) {
        self.transform(Mat4::from_rotation_y(to_rad(degrees)));
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }

    /// Sphere centred on the bounding box, reaching the farthest vertex.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        let Some((lo, hi)) = self.bounding_box() else {
            return BoundingSphere {
                center: Vec3::ZERO,
                radius: 0.0,
            };
        };
        let center = (lo + hi) * 0.5;
        let radius = self
            .positions
            .iter()
            .map(|p| p.distance_squared(center))
            .fold(0.0_f32, f32::max)
            .sqrt();
        BoundingSphere { center, radius }
    }

    /// Interleaved position/normal vertices.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(p, n)| Vertex {
                position: p.to_array(),
                normal: n.to_array(),
            })
            .collect()
    }

    /// Raw bytes of [`Mesh::vertices`], ready for a vertex buffer upload.
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Inverse-transpose of the upper 3x3, falling back to the plain 3x3 for
/// degenerate (zero scale) matrices.
fn normal_matrix(matrix: Mat4) -> Mat3 {
    let m = Mat3::from_mat4(matrix);
    if m.determinant().abs() < f32::EPSILON {
        m
    } else {
        m.inverse().transpose()
    }
}
