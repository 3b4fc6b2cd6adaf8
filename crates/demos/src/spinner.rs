use gamekit_geometry::presets;
use gamekit_input::InputSnapshot;
use gamekit_render::{Camera, Drawable, Floor, Frame, Material, SceneSetup, SpotLight};
use glam::Vec3;

use crate::scene::{DemoScene, grass, tutorial_setup};

/// A single mesh turning one degree per frame about +Y.
#[derive(Debug)]
pub struct Spinner {
    setup: SceneSetup,
    model: Drawable,
    angle: f32,
}

impl Spinner {
    pub fn the_thing() -> Self {
        let setup = SceneSetup {
            spot: Some(SpotLight::default()),
            camera: Camera::looking_at(Vec3::new(3.0, 5.0, 7.0), Vec3::ZERO),
            floor: Some(Floor::plane(20.0, grass()).with_shadows()),
            ..tutorial_setup()
        };
        let model = Drawable::from_mesh("thing", &presets::thing_geometry(), Material::default())
            .at(Vec3::new(0.0, 1.0, 0.0), 0.0);
        Self {
            setup,
            model,
            angle: 0.0,
        }
    }

    pub fn logo() -> Self {
        let setup = SceneSetup {
            spot: Some(SpotLight::default()),
            camera: Camera::looking_at(Vec3::new(3.0, 5.0, 7.0), Vec3::ZERO),
            ..tutorial_setup()
        }
        .with_size(1000, 500);
        let model =
            Drawable::from_mesh("logo", &presets::logo_geometry(), Material::colored(0xcc0000));
        Self {
            setup,
            model,
            angle: 0.0,
        }
    }

    /// Heading in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }
}

impl DemoScene for Spinner {
    fn setup(&self) -> &SceneSetup {
        &self.setup
    }

    fn step(&mut self, _input: &InputSnapshot) {
        self.angle += 1.0;
    }

    fn frame(&self, number: u64) -> Frame {
        let mut frame = Frame::new(number, self.setup.camera);
        frame.push(self.model.clone().at(self.model.position, self.angle));
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spins_one_degree_per_step() {
        let mut scene = Spinner::the_thing();
        for _ in 0..90 {
            scene.step(&InputSnapshot::default());
        }
        assert_eq!(scene.angle(), 90.0);
        let thing = &scene.frame(90).drawables[0];
        assert_eq!(thing.yaw_degrees, 90.0);
        assert_eq!(thing.position, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn logo_scene_is_wide_and_red() {
        let scene = Spinner::logo();
        assert_eq!(scene.setup().width, 1000);
        assert!(scene.setup().floor.is_none());
        let logo = &scene.frame(0).drawables[0];
        assert_eq!(logo.name, "logo");
        assert_eq!(logo.material.color, 0xcc0000);
    }
}
