use gamekit_common::{forward_vector, yaw_rotation};
use gamekit_input::InputSnapshot;
use glam::Vec3;

use crate::config::GunConfig;

/// Projectile flying straight along the heading it was fired with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub position: Vec3,
    /// Heading in degrees.
    pub angle: f32,
    pub speed: f32,
}

impl Bullet {
    pub fn new(position: Vec3, angle: f32, speed: f32) -> Self {
        Self {
            position,
            angle,
            speed,
        }
    }

    pub fn update(&mut self) {
        self.position += forward_vector(yaw_rotation(self.angle)) * self.speed;
    }

    /// Bullets die once they are twice the arena radius from the centre.
    pub fn is_expired(&self, arena_radius: f32) -> bool {
        self.position.length() > arena_radius * 2.0
    }
}

/// Gun mounted on the thing. Firing is rate-limited by an overheat counter
/// that cools by one each step.
#[derive(Debug, Clone, PartialEq)]
pub struct Gun {
    overheat: i32,
    config: GunConfig,
}

impl Gun {
    pub fn new(config: GunConfig) -> Self {
        Self {
            overheat: 0,
            config,
        }
    }

    pub fn overheat(&self) -> i32 {
        self.overheat
    }

    /// Cool down, then fire if the fire button is held.
    pub fn update(&mut self, input: &InputSnapshot, origin: Vec3, angle: f32) -> Option<Bullet> {
        self.overheat = self.overheat.saturating_sub(1);
        if input.is_button_pressed(self.config.fire_button) {
            self.fire(origin, angle)
        } else {
            None
        }
    }

    /// Spawn a bullet unless the gun is still hot.
    pub fn fire(&mut self, origin: Vec3, angle: f32) -> Option<Bullet> {
        if self.overheat > 0 {
            return None;
        }
        self.overheat = self.config.overheat_steps;
        Some(Bullet::new(origin, angle, self.config.bullet_speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamekit_input::{Controller, KeyCode};

    fn trigger() -> InputSnapshot {
        let mut c = Controller::standard();
        c.on_key(KeyCode::ascii('x'), true);
        c.snapshot()
    }

    #[test]
    fn fires_when_cool() {
        let mut gun = Gun::new(GunConfig::default());
        let b = gun.update(&trigger(), Vec3::new(1.0, 1.0, 0.0), 0.0).unwrap();
        assert_eq!(b.position, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(gun.overheat(), 10);
    }

    #[test]
    fn overheat_limits_rate() {
        let mut gun = Gun::new(GunConfig::default());
        let input = trigger();
        let shots = (0..100)
            .filter(|_| gun.update(&input, Vec3::ZERO, 0.0).is_some())
            .count();
        assert_eq!(shots, 10);
    }

    #[test]
    fn no_trigger_no_bullet() {
        let mut gun = Gun::new(GunConfig::default());
        assert!(gun.update(&InputSnapshot::default(), Vec3::ZERO, 0.0).is_none());
    }

    #[test]
    fn bullet_flies_along_heading() {
        let mut b = Bullet::new(Vec3::ZERO, 90.0, 1.2);
        b.update();
        assert!((b.position - Vec3::new(1.2, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn bullet_expires_past_twice_radius() {
        let mut b = Bullet::new(Vec3::ZERO, 0.0, 1.0);
        let mut steps = 0;
        while !b.is_expired(60.0) {
            b.update();
            steps += 1;
        }
        assert!((120..=121).contains(&steps), "steps {steps}");
    }
}
