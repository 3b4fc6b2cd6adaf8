use gamekit_geometry::presets;
use gamekit_input::InputSnapshot;
use gamekit_kernel::{ArenaConfig, Thing, ThingConfig};
use gamekit_render::{Camera, Drawable, Floor, Frame, Material, SceneSetup, SpotLight};
use glam::Vec3;

use crate::scene::{DemoScene, grass, tutorial_setup};

/// Keyboard-driven thing on the ground plane. The camera stays put and
/// tracks the thing.
#[derive(Debug)]
pub struct ControlledThing {
    setup: SceneSetup,
    thing: Thing,
    arena_radius: Option<f32>,
    model: Drawable,
}

impl ControlledThing {
    /// Open square floor, no boundary.
    pub fn sweet_controls(config: &ArenaConfig) -> Self {
        let setup = SceneSetup {
            spot: Some(SpotLight {
                exponent: 10.0,
                ..SpotLight::default()
            }
            .at(Vec3::new(0.0, 35.0, 0.0))),
            camera: Camera::looking_at(Vec3::new(3.0, 20.0, 20.0), Vec3::ZERO),
            floor: Some(Floor::plane(40.0, grass()).with_shadows()),
            ..tutorial_setup()
        };
        Self::new(setup, config, None)
    }

    /// Circular floor whose edge pushes the thing back.
    pub fn objectify(config: &ArenaConfig) -> Self {
        const RADIUS: f32 = 20.0;
        let setup = SceneSetup {
            spot: Some(
                SpotLight {
                    exponent: 10.0,
                    ..SpotLight::default()
                }
                .at(Vec3::new(10.0, 35.0, 0.0))
                .with_shadow_range(30.0, 100.0),
            ),
            camera: Camera::looking_at(Vec3::new(10.0, 20.0, 20.0), Vec3::ZERO),
            floor: Some(Floor::circle(RADIUS, 64, grass()).with_shadows()),
            ..tutorial_setup()
        };
        Self::new(setup, config, Some(RADIUS))
    }

    fn new(setup: SceneSetup, config: &ArenaConfig, arena_radius: Option<f32>) -> Self {
        let thing_config = ThingConfig {
            can_jump: false,
            ..config.thing.clone()
        };
        Self {
            setup,
            thing: Thing::new(thing_config, config.move_friction, config.rot_friction),
            arena_radius,
            model: Drawable::from_mesh("thing", &presets::thing_geometry(), Material::default()),
        }
    }

    pub fn thing(&self) -> &Thing {
        &self.thing
    }
}

impl DemoScene for ControlledThing {
    fn setup(&self) -> &SceneSetup {
        &self.setup
    }

    fn step(&mut self, input: &InputSnapshot) {
        self.thing.update(input, self.arena_radius);
    }

    fn frame(&self, number: u64) -> Frame {
        let position = self.thing.position();
        let camera = Camera {
            target: position,
            ..self.setup.camera
        };
        let mut frame = Frame::new(number, camera);
        frame.push(self.model.clone().at(position, self.thing.angle()));
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamekit_input::{Controller, KeyCode};

    fn forward() -> InputSnapshot {
        let mut c = Controller::standard();
        c.on_key(KeyCode::UP, true);
        c.snapshot()
    }

    #[test]
    fn camera_tracks_the_thing() {
        let mut scene = ControlledThing::sweet_controls(&ArenaConfig::default());
        for _ in 0..30 {
            scene.step(&forward());
        }
        let frame = scene.frame(30);
        assert_eq!(frame.camera.target, scene.thing().position());
        assert_eq!(frame.camera.eye, Vec3::new(3.0, 20.0, 20.0));
        assert!(scene.thing().position().z > 0.0);
    }

    #[test]
    fn no_jumping_in_early_demos() {
        let mut scene = ControlledThing::sweet_controls(&ArenaConfig::default());
        let mut c = Controller::standard();
        c.on_key(KeyCode::ascii('z'), true);
        scene.step(&c.snapshot());
        assert_eq!(scene.thing().position().y, 1.0);
    }

    #[test]
    fn open_floor_has_no_boundary() {
        let mut scene = ControlledThing::sweet_controls(&ArenaConfig::default());
        scene.thing.body.position = Vec3::new(100.0, 1.0, 0.0);
        scene.step(&InputSnapshot::default());
        assert_eq!(scene.thing().position().x, 100.0);
    }

    #[test]
    fn circular_arena_pushes_back() {
        let mut scene = ControlledThing::objectify(&ArenaConfig::default());
        scene.thing.body.position = Vec3::new(25.0, 1.0, 0.0);
        scene.step(&InputSnapshot::default());
        assert!(scene.thing().position().x < 25.0);
    }
}
