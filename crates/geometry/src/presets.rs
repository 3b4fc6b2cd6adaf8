//! Ready-made specs for the tutorial actors.

use crate::assemble::make_geometry;
use crate::mesh::Mesh;
use crate::primitive;
use crate::spec::{GeometrySpec, Part, Shape};

/// The player "thing": a body, two eyes, a nose cone, two wings and a fin.
pub fn thing_spec() -> GeometrySpec {
    GeometrySpec::new()
        .part(Part::new(Shape::Sphere { r: 0.6 }))
        .part(Part::new(Shape::Sphere { r: 0.3 }).at(-0.2, 0.3, 0.3))
        .part(Part::new(Shape::Sphere { r: 0.25 }).at(0.2, 0.3, 0.3))
        .part(
            Part::new(Shape::Cylinder { r1: 0.1, r2: 0.4, h: 1.0 })
                .at(0.0, 0.0, 0.6)
                .rotated(90.0, 0.0, 0.0),
        )
        .part(
            Part::new(Shape::Box { w: 1.0, h: 0.1, d: 0.5 })
                .at(0.9, 0.0, -0.2)
                .rotated(0.0, 20.0, -10.0),
        )
        .part(
            Part::new(Shape::Box { w: 1.0, h: 0.1, d: 0.5 })
                .at(-0.9, 0.0, -0.2)
                .rotated(0.0, -20.0, 10.0),
        )
        .part(
            Part::new(Shape::Box { w: 0.1, h: 1.0, d: 1.2 })
                .at(0.0, 0.2, -0.3)
                .rotated(30.0, 0.0, 0.0),
        )
}

/// Right half of the "M" logo that doubles as the blob body.
pub fn logo_half_spec() -> GeometrySpec {
    let (r1, r2, r3) = (0.6, 0.9, 0.6);
    GeometrySpec::new()
        // middle cone
        .part(
            Part::new(Shape::Cylinder { r1: 0.1, r2: 0.5, h: 1.0 })
                .at(0.4, 1.75, 0.0)
                .rotated(0.0, 0.0, 100.0),
        )
        // middle sphere
        .part(Part::new(Shape::Sphere { r: r1 }).at(0.0, 0.0, 0.0))
        .part(
            Part::new(Shape::Cylinder { r1: 0.4, r2: 0.15, h: 1.0 })
                .at(0.2, 0.5, 0.0)
                .rotated(0.0, 0.0, 140.0),
        )
        .part(
            Part::new(Shape::Cylinder { r1: 0.15, r2: 0.6, h: 1.0 })
                .at(0.75, 1.2, 0.0)
                .rotated(0.0, 0.0, 140.0),
        )
        // top right sphere
        .part(Part::new(Shape::Sphere { r: r2 }).at(1.5, 1.75, 0.0))
        .part(
            Part::new(Shape::Cylinder { r1: 0.75, r2: 0.15, h: 1.0 })
                .at(1.85, 1.2, 0.0)
                .rotated(0.0, 0.0, 30.0),
        )
        .part(
            Part::new(Shape::Cylinder { r1: 0.15, r2: 0.5, h: 0.75 })
                .at(2.25, 0.5, 0.0)
                .rotated(0.0, 0.0, 30.0),
        )
        // bottom right sphere
        .part(Part::new(Shape::Sphere { r: r3 }).at(2.5, 0.0, 0.0))
}

/// Full logo: the half merged with a copy mirrored by a half turn about Y.
pub fn logo_geometry() -> Mesh {
    let mut logo = make_geometry(&logo_half_spec());
    let mut left = logo.clone();
    left.rotate_y(180.0);
    logo.merge(&left, glam::Mat4::IDENTITY);
    logo
}

pub fn thing_geometry() -> Mesh {
    make_geometry(&thing_spec())
}

/// Bullet trail: a thin cone lying along +Z.
pub fn bullet_geometry() -> Mesh {
    const BULLET_SIZE: f32 = 0.01;
    let mut mesh = primitive::cylinder(BULLET_SIZE, BULLET_SIZE * 10.0, 3.0, 10, 1);
    mesh.rotate_x(90.0);
    mesh
}

/// Smooth ball used by the early lighting tutorials.
pub fn ball_geometry(radius: f32) -> Mesh {
    primitive::sphere(radius, 32, 32)
}

/// Small sphere marking the gun muzzle.
pub fn gun_geometry() -> Mesh {
    primitive::sphere(0.1, 32, 32)
}

/// Named presets selectable from the command line.
pub fn by_name(name: &str) -> Option<Mesh> {
    match name {
        "thing" => Some(thing_geometry()),
        "logo" | "blob" => Some(logo_geometry()),
        "bullet" => Some(bullet_geometry()),
        "ball" => Some(ball_geometry(2.0)),
        "gun" => Some(gun_geometry()),
        _ => None,
    }
}

pub const PRESET_NAMES: &[&str] = &["thing", "logo", "blob", "bullet", "ball", "gun"];
