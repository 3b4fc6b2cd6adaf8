use gamekit_geometry::presets;
use gamekit_input::InputSnapshot;
use gamekit_kernel::{Arena, ArenaConfig, ArenaEvent};
use gamekit_render::{
    Camera, Drawable, Floor, Frame, HemisphereLight, Hud, Material, SceneSetup, SpotLight,
};
use glam::Vec3;

use crate::scene::DemoScene;

const DAMAGED_GLOW: u32 = 0xff9900;
const BULLET_GLOW: u32 = 0x33ff33;

/// The full game with a chase camera riding behind the thing.
#[derive(Debug)]
pub struct ArenaDemo {
    setup: SceneSetup,
    arena: Arena,
    thing: Drawable,
    gun: Drawable,
    blob: Drawable,
    bullet: Drawable,
}

impl ArenaDemo {
    pub fn new(config: ArenaConfig, seed: u64) -> Self {
        let blob_mesh = presets::logo_geometry();
        let blob_radius = blob_mesh.bounding_sphere().radius;

        let setup = SceneSetup {
            hemisphere: Some(HemisphereLight::new(0xffffff, 0x303030, 0.9)),
            spot: Some(
                SpotLight {
                    intensity: 0.2,
                    ..SpotLight::default()
                }
                .at(Vec3::new(10.0, 35.0, 0.0))
                .with_shadow_range(30.0, 100.0),
            ),
            camera: Camera::looking_at(Vec3::new(10.0, 20.0, 20.0), Vec3::ZERO),
            floor: Some(
                Floor::circle(
                    config.arena_radius,
                    64,
                    Material::colored(0x909090).with_shininess(1.0),
                )
                .with_shadows(),
            ),
            ..SceneSetup::default()
        }
        .with_size(1000, 500);

        Self {
            setup,
            arena: Arena::with_blob_radius(config, seed, blob_radius),
            thing: Drawable::from_mesh(
                "thing",
                &presets::thing_geometry(),
                Material::colored(0xffff00),
            ),
            gun: Drawable::from_mesh("gun", &presets::gun_geometry(), Material::colored(0xaaffff)),
            blob: Drawable::from_mesh("blob", &blob_mesh, Material::colored(0xff0000)),
            bullet: Drawable::from_mesh(
                "bullet",
                &presets::bullet_geometry(),
                Material::colored(0x000000).with_emissive(BULLET_GLOW),
            ),
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }
}

impl DemoScene for ArenaDemo {
    fn setup(&self) -> &SceneSetup {
        &self.setup
    }

    fn step(&mut self, input: &InputSnapshot) {
        self.arena.step(input);
        for event in self.arena.drain_events() {
            match event {
                ArenaEvent::Stepped { .. } => tracing::trace!(?event, "arena"),
                _ => tracing::debug!(?event, "arena"),
            }
        }
    }

    fn frame(&self, number: u64) -> Frame {
        let thing = self.arena.thing();
        let (position, angle) = (thing.position(), thing.angle());

        let mut frame = Frame::new(number, self.setup.camera.chase(position, angle));
        frame.spot_target = Some(position);
        frame.push(self.thing.clone().at(position, angle));
        frame.push(self.gun.clone().at(position, angle));

        for blob in self.arena.blobs() {
            let mut d = self
                .blob
                .clone()
                .at(blob.position(), blob.spin.angle)
                .visible(blob.is_active());
            if blob.is_damaged() {
                d.material = d.material.with_emissive(DAMAGED_GLOW);
            }
            frame.push(d);
        }
        for bullet in self.arena.bullets() {
            frame.push(self.bullet.clone().at(bullet.position, bullet.angle));
        }

        frame.hud = Some(Hud {
            score: self.arena.score(),
        });
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamekit_input::{Controller, KeyCode};

    #[test]
    fn first_frame_shows_a_full_wave() {
        let scene = ArenaDemo::new(ArenaConfig::default(), 42);
        let frame = scene.frame(0);
        assert_eq!(frame.drawable("thing").map(|d| d.position), Some(Vec3::new(0.0, 1.0, 0.0)));
        assert_eq!(frame.drawables.iter().filter(|d| d.name == "blob").count(), 10);
        assert_eq!(frame.visible_count(), 12);
        assert_eq!(frame.hud, Some(Hud { score: 0 }));
    }

    #[test]
    fn camera_rides_behind_the_thing() {
        let scene = ArenaDemo::new(ArenaConfig::default(), 1);
        let cam = scene.frame(0).camera;
        assert!((cam.eye - Vec3::new(0.0, 4.0, -5.0)).length() < 1e-5);
        assert!(cam.target.z > cam.eye.z);
    }

    #[test]
    fn bullets_appear_in_the_frame() {
        let mut scene = ArenaDemo::new(ArenaConfig::default(), 3);
        let mut c = Controller::standard();
        c.on_key(KeyCode::ascii('x'), true);
        scene.step(&c.snapshot());
        let frame = scene.frame(1);
        assert_eq!(frame.drawables.iter().filter(|d| d.name == "bullet").count(), 1);
    }

    #[test]
    fn event_log_stays_bounded_over_a_long_run() {
        let mut scene = ArenaDemo::new(ArenaConfig::default(), 42);
        let input = Controller::standard().snapshot();
        for _ in 0..5_000 {
            scene.step(&input);
            assert!(scene.arena().events().is_empty());
        }
        assert_eq!(scene.arena().tick(), 5_000);
    }

    #[test]
    fn spotlight_follows_the_thing() {
        let mut scene = ArenaDemo::new(ArenaConfig::default(), 7);
        let mut c = Controller::standard();
        c.on_key(KeyCode::UP, true);
        for _ in 0..30 {
            scene.step(&c.snapshot());
        }
        let frame = scene.frame(30);
        let thing = scene.arena().thing().position();
        assert_eq!(frame.spot_target, Some(thing));
        let spot = scene.setup().spot_for(&frame).expect("spot");
        assert_eq!(spot.target, thing);
        assert_eq!(spot.position, Vec3::new(10.0, 35.0, 0.0));
    }

    #[test]
    fn bullets_glow_green() {
        let scene = ArenaDemo::new(ArenaConfig::default(), 0);
        assert_eq!(scene.bullet.material.color, 0x000000);
        assert_eq!(scene.bullet.material.emissive, BULLET_GLOW);
    }

    #[test]
    fn damaged_blobs_glow() {
        let mut scene = ArenaDemo::new(ArenaConfig::default(), 5);
        scene.arena.blobs_mut()[0].damage();
        let frame = scene.frame(0);
        let glowing = frame
            .drawables
            .iter()
            .filter(|d| d.name == "blob" && d.material.emissive == DAMAGED_GLOW)
            .count();
        assert_eq!(glowing, 1);
    }

    #[test]
    fn floor_matches_arena_radius() {
        let config = ArenaConfig {
            arena_radius: 30.0,
            ..ArenaConfig::default()
        };
        let scene = ArenaDemo::new(config, 0);
        let floor = scene.setup().floor.expect("floor");
        assert_eq!(
            floor.shape,
            gamekit_render::FloorShape::Circle {
                radius: 30.0,
                segments: 64
            }
        );
    }
}
