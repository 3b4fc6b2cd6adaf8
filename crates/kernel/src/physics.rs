use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Point mass integrated with forward Euler and per-step friction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    pub mass: f32,
    /// Velocity multiplier applied after each step (< 1 damps).
    pub friction: f32,
}

impl Body {
    pub fn new(position: Vec3, mass: f32, friction: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            mass,
            friction,
        }
    }

    /// One step: `v += f / m; p += v; v *= friction`.
    pub fn integrate(&mut self, force: Vec3) {
        self.velocity += force / self.mass;
        self.position += self.velocity;
        self.velocity *= self.friction;
    }
}

/// Heading in degrees about +Y with its own angular velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    pub angle: f32,
    pub angular_vel: f32,
    pub rot_mass: f32,
    pub friction: f32,
}

impl Spin {
    pub fn new(rot_mass: f32, friction: f32) -> Self {
        Self {
            angle: 0.0,
            angular_vel: 0.0,
            rot_mass,
            friction,
        }
    }

    /// Undamped spin at a constant rate.
    pub fn constant(angular_vel: f32) -> Self {
        Self {
            angle: 0.0,
            angular_vel,
            rot_mass: 1.0,
            friction: 1.0,
        }
    }

    /// Positive torque turns clockwise seen from above (the angle decreases).
    pub fn apply(&mut self, torque: f32) {
        self.angular_vel += torque / self.rot_mass;
        self.angle -= self.angular_vel;
        self.angular_vel *= self.friction;
    }
}

/// Force pulling an actor back toward the arena centre once it is farther
/// than `radius` from the origin.
///
/// The force is the negated horizontal position, so it grows with distance.
pub fn boundary_push(position: Vec3, radius: f32) -> Vec3 {
    if position.length() > radius {
        Vec3::new(-position.x, 0.0, -position.z)
    } else {
        Vec3::ZERO
    }
}
