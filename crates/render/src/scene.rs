use gamekit_common::{to_rad, yaw_rotation};
use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::frame::Frame;
use crate::material::Material;

/// Sky/ground ambient light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HemisphereLight {
    pub sky: u32,
    pub ground: u32,
    pub intensity: f32,
}

impl HemisphereLight {
    pub fn new(sky: u32, ground: u32, intensity: f32) -> Self {
        Self {
            sky,
            ground,
            intensity,
        }
    }
}

impl Default for HemisphereLight {
    fn default() -> Self {
        Self {
            sky: 0x66ccff,
            ground: 0x00aa00,
            intensity: 0.5,
        }
    }
}

/// Shadow-casting spotlight. `distance == 0` means no falloff.
///
/// `target` is the resting aim; a frame may override it with
/// [`Frame::spot_target`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotLight {
    pub color: u32,
    pub intensity: f32,
    pub distance: f32,
    pub angle_degrees: f32,
    pub exponent: f32,
    pub position: Vec3,
    #[serde(default)]
    pub target: Vec3,
    pub cast_shadow: bool,
    pub shadow_near: f32,
    pub shadow_far: f32,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            color: 0xffffff,
            intensity: 0.6,
            distance: 0.0,
            angle_degrees: 60.0,
            exponent: 20.0,
            position: Vec3::new(10.0, 20.0, 0.0),
            target: Vec3::ZERO,
            cast_shadow: true,
            shadow_near: 5.0,
            shadow_far: 50.0,
        }
    }
}

impl SpotLight {
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn aimed_at(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    pub fn with_shadow_range(mut self, near: f32, far: f32) -> Self {
        self.shadow_near = near;
        self.shadow_far = far;
        self
    }
}

/// Perspective camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(5.0, 10.0, 20.0),
            target: Vec3::ZERO,
            fov_degrees: 60.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub const CHASE_OFFSET: Vec3 = Vec3::new(0.0, 3.0, -5.0);
    pub const CHASE_PITCH_DEGREES: f32 = 20.0;

    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            ..Self::default()
        }
    }

    /// Camera parented to an actor: sits behind and above it and looks
    /// along its heading, pitched down.
    pub fn chase(&self, position: Vec3, yaw_degrees: f32) -> Self {
        let yaw = yaw_rotation(yaw_degrees);
        let eye = position + yaw * Self::CHASE_OFFSET;
        let pitch = Quat::from_rotation_x(to_rad(Self::CHASE_PITCH_DEGREES));
        let look = yaw * (pitch * Vec3::Z);
        Self {
            eye,
            target: eye + look,
            ..*self
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(to_rad(self.fov_degrees), self.aspect, self.near, self.far)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FloorShape {
    Plane { size: f32 },
    Circle { radius: f32, segments: u32 },
}

/// Ground surface lying in the x/z plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub shape: FloorShape,
    pub material: Material,
    pub receive_shadow: bool,
}

impl Floor {
    pub fn plane(size: f32, material: Material) -> Self {
        Self {
            shape: FloorShape::Plane { size },
            material,
            receive_shadow: false,
        }
    }

    pub fn circle(radius: f32, segments: u32, material: Material) -> Self {
        Self {
            shape: FloorShape::Circle { radius, segments },
            material,
            receive_shadow: false,
        }
    }

    pub fn with_shadows(mut self) -> Self {
        self.receive_shadow = true;
        self
    }
}

/// Fixed per-demo scene: viewport, lights, camera and floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSetup {
    pub width: u32,
    pub height: u32,
    pub clear_color: u32,
    pub hemisphere: Option<HemisphereLight>,
    pub spot: Option<SpotLight>,
    pub camera: Camera,
    pub floor: Option<Floor>,
}

impl Default for SceneSetup {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            clear_color: 0x1a80b3,
            hemisphere: None,
            spot: None,
            camera: Camera::default(),
            floor: None,
        }
    }
}

impl SceneSetup {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Resize the viewport, keeping the camera aspect in step.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self.camera.aspect = self.aspect();
        self
    }

    /// The spotlight as lit for `frame`, with the frame's aim applied.
    pub fn spot_for(&self, frame: &Frame) -> Option<SpotLight> {
        self.spot.map(|spot| match frame.spot_target {
            Some(target) => spot.aimed_at(target),
            None => spot,
        })
    }
}
