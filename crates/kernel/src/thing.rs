use gamekit_common::{forward_vector, yaw_rotation};
use gamekit_input::InputSnapshot;
use glam::{Quat, Vec3};

use crate::config::ThingConfig;
use crate::physics::{Body, Spin, boundary_push};

/// The player-controlled actor.
///
/// Left/right input is torque on the heading, forward/back input is thrust
/// along the heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Thing {
    pub body: Body,
    pub spin: Spin,
    config: ThingConfig,
}

impl Thing {
    pub fn new(config: ThingConfig, move_friction: f32, rot_friction: f32) -> Self {
        Self {
            body: Body::new(
                Vec3::new(0.0, config.ground_height, 0.0),
                config.mass,
                move_friction,
            ),
            spin: Spin::new(config.rot_mass, rot_friction),
            config,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    /// Heading in degrees.
    pub fn angle(&self) -> f32 {
        self.spin.angle
    }

    pub fn rotation(&self) -> Quat {
        yaw_rotation(self.spin.angle)
    }

    pub fn on_ground(&self) -> bool {
        self.body.position.y < self.config.ground_height + 0.01
    }

    /// Advance one step. `arena_radius` enables the boundary push-back.
    pub fn update(&mut self, input: &InputSnapshot, arena_radius: Option<f32>) {
        self.spin.apply(input.right_left());

        let mut force = forward_vector(self.rotation()) * input.forward_back();

        if self.config.can_jump {
            if input.is_button_pressed(self.config.jump_button) && self.on_ground() {
                force += Vec3::new(0.0, self.config.jump_force, 0.0);
            }
            if self.body.position.y > self.config.ground_height {
                force += Vec3::new(0.0, -self.config.gravity, 0.0);
            }
        }

        if let Some(radius) = arena_radius {
            force += boundary_push(self.body.position, radius);
        }

        self.body.integrate(force);

        if self.config.can_jump && self.body.position.y < self.config.ground_height {
            self.body.position.y = self.config.ground_height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamekit_input::{Controller, KeyCode};

    fn thing() -> Thing {
        Thing::new(ThingConfig::default(), 0.98, 0.95)
    }

    fn held(keys: &[KeyCode]) -> InputSnapshot {
        let mut c = Controller::standard();
        for k in keys {
            c.on_key(*k, true);
        }
        c.snapshot()
    }

    #[test]
    fn starts_on_the_ground_at_origin() {
        let t = thing();
        assert_eq!(t.position(), Vec3::new(0.0, 1.0, 0.0));
        assert!(t.on_ground());
    }

    #[test]
    fn idle_thing_stays_put() {
        let mut t = thing();
        for _ in 0..50 {
            t.update(&InputSnapshot::default(), Some(60.0));
        }
        assert_eq!(t.position(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(t.angle(), 0.0);
    }

    #[test]
    fn forward_moves_along_plus_z() {
        let mut t = thing();
        let input = held(&[KeyCode::UP]);
        for _ in 0..10 {
            t.update(&input, Some(60.0));
        }
        assert!(t.position().z > 0.0);
        assert!(t.position().x.abs() < 1e-6);
    }

    #[test]
    fn right_turns_heading_negative() {
        let mut t = thing();
        t.update(&held(&[KeyCode::RIGHT]), None);
        assert!(t.angle() < 0.0);
    }

    #[test]
    fn jump_leaves_ground_and_gravity_returns_it() {
        let mut t = thing();
        t.update(&held(&[KeyCode::ascii('z')]), None);
        assert!(t.position().y > 1.1);
        let mut peak = t.position().y;
        for _ in 0..500 {
            t.update(&InputSnapshot::default(), None);
            peak = peak.max(t.position().y);
        }
        assert!(peak > 1.5);
        assert_eq!(t.position().y, 1.0);
    }

    #[test]
    fn holding_jump_in_the_air_does_not_boost() {
        let mut t = thing();
        let jump = held(&[KeyCode::ascii('z')]);
        t.update(&jump, None);
        let v = t.body.velocity.y;
        t.update(&jump, None);
        assert!(t.body.velocity.y < v);
    }

    #[test]
    fn jump_disabled_keeps_height() {
        let mut t = Thing::new(
            ThingConfig {
                can_jump: false,
                ..ThingConfig::default()
            },
            0.98,
            0.95,
        );
        t.update(&held(&[KeyCode::ascii('z')]), None);
        assert_eq!(t.position().y, 1.0);
    }

    #[test]
    fn boundary_pulls_thing_back() {
        let mut t = thing();
        t.body.position = Vec3::new(70.0, 1.0, 0.0);
        t.update(&InputSnapshot::default(), Some(60.0));
        assert!(t.body.velocity.x < 0.0);
        assert!(t.position().x < 70.0);
    }
}
