use gamekit_common::{Rng, yaw_rotation};
use glam::{Quat, Vec3};

use crate::config::BlobConfig;
use crate::physics::{Body, Spin, boundary_push};

/// Wandering enemy. Hidden until placed; stomping it leaves it damaged for
/// a while, and only a damaged blob can be shot down.
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub body: Body,
    pub spin: Spin,
    active: bool,
    damage_timer: u32,
    radius: f32,
    max_force: f32,
    damage_steps: u32,
}

impl Blob {
    /// `radius` is the collision radius (the bounding sphere of the mesh).
    pub fn new(rng: &mut Rng, config: &BlobConfig, radius: f32, move_friction: f32) -> Self {
        let spin = rng.range(-config.max_spin, config.max_spin);
        Self {
            body: Body::new(Vec3::ZERO, config.mass, move_friction),
            spin: Spin::constant(spin),
            active: false,
            damage_timer: 0,
            radius,
            max_force: config.max_force,
            damage_steps: config.damage_steps,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    pub fn rotation(&self) -> Quat {
        yaw_rotation(self.spin.angle)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_damaged(&self) -> bool {
        self.damage_timer > 0
    }

    pub fn damage_timer(&self) -> u32 {
        self.damage_timer
    }

    /// Drop the blob at a random spot in `[-spread, spread]` on x/z and make
    /// it active. Velocity carries over from its previous life.
    pub fn place_randomly(&mut self, rng: &mut Rng, spread: f32) {
        let x = rng.range(-spread, spread);
        let z = rng.range(-spread, spread);
        self.body.position = Vec3::new(x, 1.0, z);
        self.active = true;
    }

    pub fn hide(&mut self) {
        self.active = false;
    }

    /// Mark as damaged, restarting the timer.
    pub fn damage(&mut self) {
        self.damage_timer = self.damage_steps;
    }

    /// Count down the damage timer by one step.
    pub fn tick_damage(&mut self) {
        self.damage_timer = self.damage_timer.saturating_sub(1);
    }

    /// Spin, wander with a random horizontal force, stay inside the arena.
    pub fn update(&mut self, rng: &mut Rng, arena_radius: f32) {
        self.spin.apply(0.0);

        let fx = rng.range(-self.max_force, self.max_force);
        let fz = rng.range(-self.max_force, self.max_force);
        let force = Vec3::new(fx, 0.0, fz) + boundary_push(self.body.position, arena_radius);

        self.body.integrate(force);
    }

    pub fn collides_with(&self, point: Vec3) -> bool {
        self.body.position.distance(point) < self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(rng: &mut Rng) -> Blob {
        Blob::new(rng, &BlobConfig::default(), 3.0, 0.98)
    }

    #[test]
    fn new_blob_is_hidden_and_spins_within_limits() {
        let mut rng = Rng::new(1);
        for _ in 0..50 {
            let b = blob(&mut rng);
            assert!(!b.is_active());
            assert!(b.spin.angular_vel.abs() <= 10.0);
        }
    }

    #[test]
    fn placement_is_within_spread() {
        let mut rng = Rng::new(2);
        let mut b = blob(&mut rng);
        for _ in 0..100 {
            b.place_randomly(&mut rng, 30.0);
            let p = b.position();
            assert!(p.x.abs() <= 30.0 && p.z.abs() <= 30.0);
            assert_eq!(p.y, 1.0);
        }
        assert!(b.is_active());
    }

    #[test]
    fn wandering_stays_on_the_floor_plane() {
        let mut rng = Rng::new(3);
        let mut b = blob(&mut rng);
        b.place_randomly(&mut rng, 30.0);
        for _ in 0..1000 {
            b.update(&mut rng, 60.0);
        }
        assert_eq!(b.position().y, 1.0);
        assert!(b.position().length() < 120.0);
    }

    #[test]
    fn damage_wears_off() {
        let mut rng = Rng::new(4);
        let mut b = Blob::new(
            &mut rng,
            &BlobConfig {
                damage_steps: 2,
                ..BlobConfig::default()
            },
            3.0,
            0.98,
        );
        b.damage();
        assert!(b.is_damaged());
        b.tick_damage();
        assert!(b.is_damaged());
        b.tick_damage();
        assert!(!b.is_damaged());
        b.tick_damage();
        assert_eq!(b.damage_timer(), 0);
    }

    #[test]
    fn collision_uses_radius() {
        let mut rng = Rng::new(5);
        let mut b = blob(&mut rng);
        b.body.position = Vec3::new(0.0, 1.0, 0.0);
        assert!(b.collides_with(Vec3::new(2.9, 1.0, 0.0)));
        assert!(!b.collides_with(Vec3::new(3.1, 1.0, 0.0)));
    }
}
