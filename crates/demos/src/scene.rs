use std::fmt;
use std::str::FromStr;

use gamekit_input::InputSnapshot;
use gamekit_kernel::ArenaConfig;
use gamekit_render::{Frame, HemisphereLight, Material, SceneSetup};
use thiserror::Error;

use crate::arena::ArenaDemo;
use crate::basic::{LightsCamera, Nothing};
use crate::controlled::ControlledThing;
use crate::spinner::Spinner;

/// A tutorial scene script. Owns all of its state; the frame loop feeds it
/// one input snapshot per frame and asks for a description to render.
pub trait DemoScene {
    /// Lights, camera and floor, fixed for the life of the scene.
    fn setup(&self) -> &SceneSetup;

    /// Advance one frame.
    fn step(&mut self, input: &InputSnapshot);

    /// Describe the current state as frame `number`.
    fn frame(&self, number: u64) -> Frame;
}

#[derive(Debug, Error)]
#[error("unknown demo: {0}")]
pub struct UnknownDemo(pub String);

/// Construction parameters shared by every demo.
#[derive(Debug, Clone, Default)]
pub struct DemoOptions {
    pub seed: u64,
    pub config: ArenaConfig,
}

/// The tutorial sequence, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    Nothing,
    LightsCamera,
    SpotTheShadow,
    TheThing,
    SweetControls,
    Objectify,
    Logo,
    Arena,
}

impl Demo {
    pub const ALL: [Demo; 8] = [
        Demo::Nothing,
        Demo::LightsCamera,
        Demo::SpotTheShadow,
        Demo::TheThing,
        Demo::SweetControls,
        Demo::Objectify,
        Demo::Logo,
        Demo::Arena,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Nothing => "nothing",
            Demo::LightsCamera => "lights-camera",
            Demo::SpotTheShadow => "spot-the-shadow",
            Demo::TheThing => "the-thing",
            Demo::SweetControls => "sweet-controls",
            Demo::Objectify => "objectify",
            Demo::Logo => "logo",
            Demo::Arena => "arena",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Demo::Nothing => "empty loop printing a frame counter",
            Demo::LightsCamera => "hemisphere light, camera, floor and a ball",
            Demo::SpotTheShadow => "adds a shadow-casting spotlight",
            Demo::TheThing => "the assembled thing spinning in place",
            Demo::SweetControls => "drive the thing with the keyboard",
            Demo::Objectify => "thing as an object inside a circular arena",
            Demo::Logo => "mirrored logo geometry spinning in place",
            Demo::Arena => "full game: jump on blobs, then shoot them",
        }
    }

    pub fn build(self, options: &DemoOptions) -> Box<dyn DemoScene> {
        tracing::debug!(demo = self.name(), seed = options.seed, "building demo");
        match self {
            Demo::Nothing => Box::new(Nothing::new()),
            Demo::LightsCamera => Box::new(LightsCamera::new(false)),
            Demo::SpotTheShadow => Box::new(LightsCamera::new(true)),
            Demo::TheThing => Box::new(Spinner::the_thing()),
            Demo::SweetControls => Box::new(ControlledThing::sweet_controls(&options.config)),
            Demo::Objectify => Box::new(ControlledThing::objectify(&options.config)),
            Demo::Logo => Box::new(Spinner::logo()),
            Demo::Arena => Box::new(ArenaDemo::new(options.config.clone(), options.seed)),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = UnknownDemo;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Demo::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| UnknownDemo(s.to_string()))
    }
}

/// Sky-blue backdrop with the standard sky/ground light.
pub(crate) fn tutorial_setup() -> SceneSetup {
    SceneSetup {
        hemisphere: Some(HemisphereLight::default()),
        ..SceneSetup::default()
    }
}

pub(crate) fn grass() -> Material {
    Material::colored(0x009f2f).with_shininess(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for demo in Demo::ALL {
            assert_eq!(demo.name().parse::<Demo>().unwrap(), demo);
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "pong".parse::<Demo>().unwrap_err();
        assert_eq!(err.to_string(), "unknown demo: pong");
    }

    #[test]
    fn every_demo_builds_and_renders_a_frame() {
        let options = DemoOptions::default();
        for demo in Demo::ALL {
            let mut scene = demo.build(&options);
            scene.step(&InputSnapshot::default());
            let frame = scene.frame(0);
            assert_eq!(frame.number, 0, "{demo}");
            assert!(scene.setup().width > 0);
        }
    }
}
