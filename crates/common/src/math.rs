use glam::{Quat, Vec3};

/// Degrees to radians.
pub fn to_rad(deg: f32) -> f32 {
    deg * (std::f32::consts::PI / 180.0)
}

/// Rotation about +Y for a heading given in degrees.
pub fn yaw_rotation(angle_degrees: f32) -> Quat {
    Quat::from_rotation_y(to_rad(angle_degrees))
}

/// Direction an object is pointing at: local +Z rotated into world space.
pub fn forward_vector(rotation: Quat) -> Vec3 {
    rotation * Vec3::Z
}
