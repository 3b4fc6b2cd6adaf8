use gamekit_input::Controller;
use gamekit_render::Renderer;

use crate::scene::DemoScene;
use crate::script::InputScript;

/// Headless stand-in for the browser animation loop.
///
/// Each tick: deliver the script's key events for this frame, snapshot the
/// controller, step the scene, render. One tick completes before the next.
pub struct FrameLoop {
    scene: Box<dyn DemoScene>,
    controller: Controller,
    script: InputScript,
    frame: u64,
}

impl FrameLoop {
    pub fn new(scene: Box<dyn DemoScene>, controller: Controller, script: InputScript) -> Self {
        Self {
            scene,
            controller,
            script,
            frame: 0,
        }
    }

    /// Number of the next frame to run.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn scene(&self) -> &dyn DemoScene {
        self.scene.as_ref()
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Drop all held keys, as when the window loses focus.
    pub fn release_all(&mut self) {
        self.controller.release_all();
    }

    pub fn tick<R: Renderer>(&mut self, renderer: &R) -> R::Output {
        for event in self.script.events_at(self.frame) {
            self.controller.handle(event);
        }
        let input = self.controller.snapshot();
        self.scene.step(&input);

        let output = renderer.render(self.scene.setup(), &self.scene.frame(self.frame));
        tracing::trace!(frame = self.frame, "frame done");
        self.frame += 1;
        output
    }

    /// Run `frames` ticks, handing each rendered output to `sink`.
    pub fn run<R: Renderer>(&mut self, renderer: &R, frames: u64, mut sink: impl FnMut(R::Output)) {
        for _ in 0..frames {
            sink(self.tick(renderer));
        }
        tracing::debug!(frames, last = self.frame, "frame loop finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Demo, DemoOptions};
    use gamekit_input::KeyCode;
    use gamekit_render::{DebugTextRenderer, Frame, NullRenderer, SceneSetup};

    /// Captures the frame itself.
    struct Capture;

    impl Renderer for Capture {
        type Output = Frame;

        fn render(&self, _setup: &SceneSetup, frame: &Frame) -> Frame {
            frame.clone()
        }
    }

    fn frame_loop(demo: Demo, script: InputScript) -> FrameLoop {
        FrameLoop::new(demo.build(&DemoOptions::default()), Controller::standard(), script)
    }

    #[test]
    fn frames_are_numbered_from_zero() {
        let mut lp = frame_loop(Demo::Nothing, InputScript::new());
        let mut seen = Vec::new();
        lp.run(&Capture, 3, |f| seen.push(f.overlay));
        assert_eq!(seen, vec![Some("0".into()), Some("1".into()), Some("2".into())]);
        assert_eq!(lp.frame(), 3);
    }

    #[test]
    fn scripted_keys_drive_the_scene() {
        let script = InputScript::new().hold(KeyCode::UP, 0, 20);
        let mut lp = frame_loop(Demo::SweetControls, script);
        let mut last = None;
        lp.run(&Capture, 20, |f| last = Some(f));
        let thing = last.and_then(|f| f.drawable("thing").cloned()).unwrap();
        assert!(thing.position.z > 0.0);
        assert_eq!(lp.controller().forward_back(), 1.0);

        lp.tick(&Capture);
        assert_eq!(lp.controller().forward_back(), 0.0);
    }

    #[test]
    fn events_apply_before_the_step() {
        let script = InputScript::new().hold(KeyCode::LEFT, 0, 1);
        let mut lp = frame_loop(Demo::SweetControls, script);
        let first = lp.tick(&Capture);
        assert!(first.drawables[0].yaw_degrees > 0.0);
    }

    #[test]
    fn release_all_clears_held_keys() {
        let script = InputScript::new().hold(KeyCode::UP, 0, 100);
        let mut lp = frame_loop(Demo::SweetControls, script);
        lp.tick(&Capture);
        lp.release_all();
        assert_eq!(lp.controller().forward_back(), 0.0);
    }

    #[test]
    fn null_renderer_still_advances_the_scene() {
        let script = InputScript::new().hold(KeyCode::UP, 0, 50);
        let mut lp = frame_loop(Demo::SweetControls, script);
        let mut rendered = 0;
        lp.run(&NullRenderer, 10, |()| rendered += 1);
        assert_eq!(rendered, 10);
        assert_eq!(lp.frame(), 10);
        let thing = lp.scene().frame(10).drawable("thing").map(|d| d.position.z);
        assert!(thing.is_some_and(|z| z > 0.0));
    }

    #[test]
    fn text_renderer_output_per_frame() {
        let mut lp = frame_loop(Demo::Arena, InputScript::new());
        let mut outputs = Vec::new();
        lp.run(&DebugTextRenderer::new(), 2, |s| outputs.push(s));
        assert_eq!(outputs.len(), 2);
        assert!(outputs[1].contains("=== Frame 1"));
        assert!(outputs[1].contains("Score:"));
    }
}
