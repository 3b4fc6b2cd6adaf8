//! Primitive surface tessellators.
//!
//! Vertex layout and winding follow the common scene-graph conventions:
//! spheres and cylinders are generated around +Y, boxes are six
//! independently subdivided planes.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::mesh::Mesh;

/// UV sphere centred on the origin.
///
/// Produces `(width_segments + 1) * (height_segments + 1)` vertices; the pole
/// rows emit one triangle per quad instead of two.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = Mesh::new();
    let mut grid = Vec::with_capacity(hs as usize + 1);

    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let mut row = Vec::with_capacity(ws as usize + 1);
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let position = Vec3::new(
                -radius * (u * TAU).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * TAU).sin() * (v * PI).sin(),
            );
            row.push(mesh.push_vertex(position, position.normalize_or_zero()));
        }
        grid.push(row);
    }

    for iy in 0..hs as usize {
        for ix in 0..ws as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];
            if iy != 0 {
                mesh.push_triangle(a, b, d);
            }
            if iy != hs as usize - 1 {
                mesh.push_triangle(b, c, d);
            }
        }
    }
    mesh
}

/// Closed (possibly conical) cylinder along +Y, centred on the origin.
///
/// A cap is only generated for an end whose radius is positive.
pub fn cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
) -> Mesh {
    let radial = radial_segments.max(3);
    let rows = height_segments.max(1);
    let half_height = height / 2.0;
    let slope = if height != 0.0 {
        (radius_bottom - radius_top) / height
    } else {
        0.0
    };
    let mut mesh = Mesh::new();
    let mut grid = Vec::with_capacity(rows as usize + 1);

    for y in 0..=rows {
        let v = y as f32 / rows as f32;
        let radius = v * (radius_bottom - radius_top) + radius_top;
        let mut row = Vec::with_capacity(radial as usize + 1);
        for x in 0..=radial {
            let theta = x as f32 / radial as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            let position = Vec3::new(radius * sin, -v * height + half_height, radius * cos);
            let normal = Vec3::new(sin, slope, cos).normalize();
            row.push(mesh.push_vertex(position, normal));
        }
        grid.push(row);
    }

    for x in 0..radial as usize {
        for y in 0..rows as usize {
            let a = grid[y][x];
            let b = grid[y + 1][x];
            let c = grid[y + 1][x + 1];
            let d = grid[y][x + 1];
            mesh.push_triangle(a, b, d);
            mesh.push_triangle(b, c, d);
        }
    }

    if radius_top > 0.0 {
        cap(&mut mesh, radius_top, half_height, radial, true);
    }
    if radius_bottom > 0.0 {
        cap(&mut mesh, radius_bottom, half_height, radial, false);
    }
    mesh
}

fn cap(mesh: &mut Mesh, radius: f32, half_height: f32, radial: u32, top: bool) {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = Vec3::new(0.0, sign, 0.0);
    let y = half_height * sign;

    // One centre vertex per segment keeps per-face attributes independent.
    let center_start = mesh.vertex_count() as u32;
    for _ in 0..radial {
        mesh.push_vertex(Vec3::new(0.0, y, 0.0), normal);
    }
    let ring_start = mesh.vertex_count() as u32;
    for x in 0..=radial {
        let theta = x as f32 / radial as f32 * TAU;
        mesh.push_vertex(Vec3::new(radius * theta.sin(), y, radius * theta.cos()), normal);
    }

    for x in 0..radial {
        let c = center_start + x;
        let i = ring_start + x;
        if top {
            mesh.push_triangle(i, i + 1, c);
        } else {
            mesh.push_triangle(i + 1, i, c);
        }
    }
}

/// Axis-aligned box centred on the origin, each face subdivided into a grid.
pub fn cuboid(
    width: f32,
    height: f32,
    depth: f32,
    width_segments: u32,
    height_segments: u32,
    depth_segments: u32,
) -> Mesh {
    let (ws, hs, ds) = (
        width_segments.max(1),
        height_segments.max(1),
        depth_segments.max(1),
    );
    let mut mesh = Mesh::new();
    // (u, v, w) axes, u/v direction, plane extents, grid resolution.
    plane(&mut mesh, [2, 1, 0], -1.0, -1.0, [depth, height, width], ds, hs);
    plane(&mut mesh, [2, 1, 0], 1.0, -1.0, [depth, height, -width], ds, hs);
    plane(&mut mesh, [0, 2, 1], 1.0, 1.0, [width, depth, height], ws, ds);
    plane(&mut mesh, [0, 2, 1], 1.0, -1.0, [width, depth, -height], ws, ds);
    plane(&mut mesh, [0, 1, 2], 1.0, -1.0, [width, height, depth], ws, hs);
    plane(&mut mesh, [0, 1, 2], -1.0, -1.0, [width, height, -depth], ws, hs);
    mesh
}

fn plane(
    mesh: &mut Mesh,
    axes: [usize; 3],
    u_dir: f32,
    v_dir: f32,
    extent: [f32; 3],
    grid_x: u32,
    grid_y: u32,
) {
    let [u, v, w] = axes;
    let [width, height, depth] = extent;
    let seg_w = width / grid_x as f32;
    let seg_h = height / grid_y as f32;
    let (half_w, half_h, half_d) = (width / 2.0, height / 2.0, depth / 2.0);
    let start = mesh.vertex_count() as u32;

    let mut normal = [0.0_f32; 3];
    normal[w] = if depth > 0.0 { 1.0 } else { -1.0 };
    for iy in 0..=grid_y {
        let y = iy as f32 * seg_h - half_h;
        for ix in 0..=grid_x {
            let x = ix as f32 * seg_w - half_w;
            let mut p = [0.0_f32; 3];
            p[u] = x * u_dir;
            p[v] = y * v_dir;
            p[w] = half_d;
            mesh.push_vertex(Vec3::from_array(p), Vec3::from_array(normal));
        }
    }

    let row = grid_x + 1;
    for iy in 0..grid_y {
        for ix in 0..grid_x {
            let a = start + ix + row * iy;
            let b = start + ix + row * (iy + 1);
            let c = start + (ix + 1) + row * (iy + 1);
            let d = start + (ix + 1) + row * iy;
            mesh.push_triangle(a, b, d);
            mesh.push_triangle(b, c, d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_counts() {
        let m = sphere(1.0, 16, 16);
        assert_eq!(m.vertex_count(), 17 * 17);
        assert_eq!(m.triangle_count(), 2 * 16 * 16 - 2 * 16);
    }

    #[test]
    fn sphere_vertices_lie_on_surface() {
        let m = sphere(0.6, 16, 16);
        for p in &m.positions {
            assert!((p.length() - 0.6).abs() < 1e-5);
        }
    }

    #[test]
    fn cylinder_counts_with_both_caps() {
        let m = cylinder(0.1, 0.4, 1.0, 16, 8);
        assert_eq!(m.vertex_count(), 17 * 9 + 2 * (16 + 17));
        assert_eq!(m.triangle_count(), 2 * 16 * 8 + 2 * 16);
    }

    #[test]
    fn cone_skips_pointed_cap() {
        let m = cylinder(0.0, 0.5, 1.0, 16, 8);
        assert_eq!(m.vertex_count(), 17 * 9 + 16 + 17);
    }

    #[test]
    fn cylinder_radius_top_is_at_plus_y() {
        let m = cylinder(0.1, 0.4, 1.0, 16, 8);
        let top = m.positions.iter().filter(|p| (p.y - 0.5).abs() < 1e-6);
        for p in top {
            assert!(p.length() <= (0.1_f32 * 0.1 + 0.25).sqrt() + 1e-5);
        }
    }

    #[test]
    fn cuboid_counts_and_extent() {
        let m = cuboid(1.0, 0.1, 0.5, 8, 8, 8);
        assert_eq!(m.vertex_count(), 6 * 9 * 9);
        assert_eq!(m.triangle_count(), 6 * 2 * 64);
        let (lo, hi) = m.bounding_box().unwrap();
        assert!((lo - Vec3::new(-0.5, -0.05, -0.25)).length() < 1e-5);
        assert!((hi - Vec3::new(0.5, 0.05, 0.25)).length() < 1e-5);
    }

    #[test]
    fn cuboid_normals_point_outward() {
        let m = cuboid(2.0, 2.0, 2.0, 1, 1, 1);
        for (p, n) in m.positions.iter().zip(&m.normals) {
            assert!(p.dot(*n) > 0.0);
        }
    }
}
