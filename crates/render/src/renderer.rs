use std::fmt::Write;

use crate::frame::Frame;
use crate::scene::SceneSetup;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the fixed scene setup and one frame, then produces
/// output. It never mutates simulation state.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, setup: &SceneSetup, frame: &Frame) -> Self::Output;
}

/// Human-readable frame dump for CLI output, logging and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    show_hidden: bool,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include hidden drawables in the listing.
    pub fn with_hidden(mut self) -> Self {
        self.show_hidden = true;
        self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, setup: &SceneSetup, frame: &Frame) -> String {
        tracing::trace!(frame = frame.number, drawables = frame.drawables.len(), "text render");
        let mut out = String::new();
        let cam = &frame.camera;
        let _ = writeln!(
            out,
            "=== Frame {} ({}x{}, {} drawables) ===",
            frame.number,
            setup.width,
            setup.height,
            frame.visible_count()
        );
        let _ = writeln!(
            out,
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}",
            cam.eye.x,
            cam.eye.y,
            cam.eye.z,
            cam.target.x,
            cam.target.y,
            cam.target.z,
            cam.fov_degrees
        );
        if let Some(spot) = setup.spot_for(frame) {
            let _ = writeln!(
                out,
                "Spot: target=({:.1}, {:.1}, {:.1})",
                spot.target.x, spot.target.y, spot.target.z
            );
        }
        if let Some(text) = &frame.overlay {
            let _ = writeln!(out, "Overlay: {text}");
        }
        if let Some(hud) = frame.hud {
            let _ = writeln!(out, "Score: {} ({})", hud.score, hud.status());
        }

        for d in &frame.drawables {
            if !d.visible && !self.show_hidden {
                continue;
            }
            let _ = writeln!(
                out,
                "  {:<8} pos=({:.2}, {:.2}, {:.2}) yaw={:.1} verts={}{}",
                d.name,
                d.position.x,
                d.position.y,
                d.position.z,
                d.yaw_degrees,
                d.vertex_count,
                if d.visible { "" } else { " [hidden]" }
            );
        }

        out
    }
}

/// Discards every frame. For runs where only the simulation matters.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    type Output = ();

    fn render(&self, _setup: &SceneSetup, _frame: &Frame) {}
}

/// Emits the frame as one JSON line.
#[derive(Debug, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    type Output = serde_json::Result<String>;

    fn render(&self, _setup: &SceneSetup, frame: &Frame) -> Self::Output {
        serde_json::to_string(frame)
    }
}
