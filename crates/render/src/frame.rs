use gamekit_geometry::Mesh;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::material::Material;
use crate::scene::Camera;

/// One scene object as the renderer sees it this frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub name: String,
    pub position: Vec3,
    pub yaw_degrees: f32,
    pub visible: bool,
    pub material: Material,
    pub vertex_count: usize,
    pub triangle_count: usize,
}

impl Drawable {
    pub fn from_mesh(name: impl Into<String>, mesh: &Mesh, material: Material) -> Self {
        Self {
            name: name.into(),
            position: Vec3::ZERO,
            yaw_degrees: 0.0,
            visible: true,
            material,
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
        }
    }

    pub fn at(mut self, position: Vec3, yaw_degrees: f32) -> Self {
        self.position = position;
        self.yaw_degrees = yaw_degrees;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Score overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: i64,
}

impl Hud {
    pub fn status(&self) -> &'static str {
        if self.score > 0 { "winning" } else { "losing" }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub number: u64,
    pub camera: Camera,
    pub drawables: Vec<Drawable>,
    pub hud: Option<Hud>,
    /// Plain text drawn over the viewport.
    pub overlay: Option<String>,
    /// Where the scene's spotlight points this frame, if it tracks something.
    #[serde(default)]
    pub spot_target: Option<Vec3>,
}

impl Frame {
    pub fn new(number: u64, camera: Camera) -> Self {
        Self {
            number,
            camera,
            drawables: Vec::new(),
            hud: None,
            overlay: None,
            spot_target: None,
        }
    }

    pub fn push(&mut self, drawable: Drawable) {
        self.drawables.push(drawable);
    }

    pub fn visible_count(&self) -> usize {
        self.drawables.iter().filter(|d| d.visible).count()
    }

    pub fn drawable(&self, name: &str) -> Option<&Drawable> {
        self.drawables.iter().find(|d| d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamekit_geometry::primitive;

    #[test]
    fn drawable_carries_mesh_counts() {
        let mesh = primitive::sphere(1.0, 16, 16);
        let d = Drawable::from_mesh("ball", &mesh, Material::default()).at(Vec3::X, 45.0);
        assert_eq!(d.vertex_count, 289);
        assert_eq!(d.triangle_count, 480);
        assert_eq!(d.position, Vec3::X);
        assert!(d.visible);
    }

    #[test]
    fn visible_count_skips_hidden() {
        let mesh = primitive::sphere(1.0, 4, 4);
        let mut frame = Frame::new(0, Camera::default());
        frame.push(Drawable::from_mesh("a", &mesh, Material::default()));
        frame.push(Drawable::from_mesh("b", &mesh, Material::default()).visible(false));
        assert_eq!(frame.visible_count(), 1);
        assert!(frame.drawable("b").is_some());
    }

    #[test]
    fn hud_status_follows_score() {
        assert_eq!(Hud { score: 3 }.status(), "winning");
        assert_eq!(Hud { score: 0 }.status(), "losing");
        assert_eq!(Hud { score: -5 }.status(), "losing");
    }
}
