use gamekit_geometry::presets;
use gamekit_input::InputSnapshot;
use gamekit_render::{
    Camera, Drawable, Floor, Frame, HemisphereLight, Material, SceneSetup, SpotLight,
};
use glam::Vec3;

use crate::scene::{DemoScene, grass, tutorial_setup};

/// Nothing but the loop: shows the frame counter.
#[derive(Debug)]
pub struct Nothing {
    setup: SceneSetup,
    steps: u64,
}

impl Nothing {
    pub fn new() -> Self {
        Self {
            setup: SceneSetup::default(),
            steps: 0,
        }
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl Default for Nothing {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoScene for Nothing {
    fn setup(&self) -> &SceneSetup {
        &self.setup
    }

    fn step(&mut self, _input: &InputSnapshot) {
        self.steps += 1;
    }

    fn frame(&self, number: u64) -> Frame {
        let mut frame = Frame::new(number, self.setup.camera);
        frame.overlay = Some(number.to_string());
        frame
    }
}

/// Static ball on a square floor. With `spot` set the ball is glossy and
/// casts a shadow from a spotlight.
#[derive(Debug)]
pub struct LightsCamera {
    setup: SceneSetup,
    ball: Drawable,
}

impl LightsCamera {
    const FLOOR_SIZE: f32 = 20.0;
    const BALL_RADIUS: f32 = 2.0;

    pub fn new(spot: bool) -> Self {
        let mut setup = SceneSetup {
            camera: Camera::looking_at(Vec3::new(5.0, 10.0, 20.0), Vec3::ZERO),
            floor: Some(Floor::plane(Self::FLOOR_SIZE, grass())),
            ..tutorial_setup()
        };
        let shininess = if spot {
            setup.spot = Some(SpotLight::default());
            setup.floor = setup.floor.map(Floor::with_shadows);
            100.0
        } else {
            setup.hemisphere = Some(HemisphereLight {
                intensity: 1.0,
                ..HemisphereLight::default()
            });
            1.0
        };

        let mesh = presets::ball_geometry(Self::BALL_RADIUS);
        let ball = Drawable::from_mesh("ball", &mesh, Material::default().with_shininess(shininess))
            .at(Vec3::new(0.0, Self::BALL_RADIUS, 0.0), 0.0);
        Self { setup, ball }
    }
}

impl DemoScene for LightsCamera {
    fn setup(&self) -> &SceneSetup {
        &self.setup
    }

    fn step(&mut self, _input: &InputSnapshot) {}

    fn frame(&self, number: u64) -> Frame {
        let mut frame = Frame::new(number, self.setup.camera);
        frame.push(self.ball.clone());
        frame
    }
}
