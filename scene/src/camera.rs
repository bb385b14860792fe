use glam::{Mat4, Vec3};

/// Camera orbiting the origin in the XZ plane at one radian per second.
pub struct Camera;

impl Camera {
    pub const FOV_Y_DEGREES: f32 = 45.0;
    pub const ASPECT: f32 = 1.0;
    pub const NEAR: f32 = 0.01;
    pub const FAR: f32 = 100.0;
    pub const ORBIT_RADIUS: f32 = 4.0;

    /// Position of the camera `t` seconds into the animation.
    pub fn eye(t: f32) -> Vec3 {
        Vec3::new(
            Self::ORBIT_RADIUS * t.cos(),
            0.0,
            Self::ORBIT_RADIUS * t.sin(),
        )
    }

    pub fn projection() -> Mat4 {
        Mat4::perspective_rh_gl(
            Self::FOV_Y_DEGREES.to_radians(),
            Self::ASPECT,
            Self::NEAR,
            Self::FAR,
        )
    }

    pub fn view(t: f32) -> Mat4 {
        Mat4::look_at_rh(Self::eye(t), Vec3::ZERO, Vec3::Y)
    }

    /// Combined view-perspective transform at time `t`, in seconds.
    pub fn perspective(t: f32) -> Mat4 {
        Self::projection() * Self::view(t)
    }
}

/// Values shared by every vertex in a draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Uniforms {
    pub perspective: Mat4,
}

impl Uniforms {
    pub fn at(t: f32) -> Self {
        Self {
            perspective: Camera::perspective(t),
        }
    }
}
