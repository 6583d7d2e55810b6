use bevy::math::{Quat, Vec3};

/// Read-only camera snapshot resolvers work against. Captured once per
/// frame after the camera controller has run, so every item in the
/// frame sees the same coherent value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
    /// Vertical field of view in radians.
    pub fov_y: f32,
}

impl CameraPose {
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Transform a camera-space point (x right, y up, -z forward) into
    /// world space using the camera's current transform.
    pub fn camera_to_world(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * local
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov_y: std::f32::consts::FRAC_PI_4,
        }
    }
}
