use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Three named components as written in declarative files: `{ x, y, z }`.
///
/// Missing components default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Xyz {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<Xyz> for Vec3 {
    fn from(v: Xyz) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Xyz {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_components_default_to_zero() {
        let v: Xyz = serde_json::from_str(r#"{ "y": 2 }"#).unwrap();
        assert_eq!(v, Xyz::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn xyz_converts_to_vec3() {
        let v: Vec3 = Xyz::new(1.0, 2.0, 3.0).into();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }
}
