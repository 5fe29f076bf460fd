use crate::constants::{
    CAMERA_FOVY_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR, OBJECT_DISTANCE, PARALLAX_AMPLITUDE,
    PARALLAX_SMOOTHING_PER_SEC,
};
use crate::viewport::Viewport;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at `eye` looking straight down -Z, sized for `viewport`.
    pub fn looking_forward(eye: Vec3, viewport: &Viewport) -> Self {
        Self {
            eye,
            target: eye - Vec3::Z,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Clip-space quad extent for a distance-attenuated point of `size`.
    ///
    /// After the perspective divide a point at view depth `d` spans
    /// `size * (height_px / 2) / d` pixels, independent of field of view.
    pub fn point_clip_extent(&self, size: f32) -> Vec2 {
        Vec2::new(size / self.aspect.max(f32::EPSILON), size)
    }
}

/// Camera placement: a parallax group carrying a base camera.
///
/// The group follows the pointer with exponential smoothing; the base camera
/// inside it is translated directly by scroll. The two never overwrite each
/// other and add up in [`CameraRig::eye`].
#[derive(Clone, Debug)]
pub struct CameraRig {
    parallax_offset: Vec2,
    world_position: Vec3,
    base_offset: Vec3,
    object_spacing: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(OBJECT_DISTANCE)
    }
}

impl CameraRig {
    pub fn new(object_spacing: f32) -> Self {
        Self {
            parallax_offset: Vec2::ZERO,
            world_position: Vec3::ZERO,
            base_offset: Vec3::new(0.0, 0.0, CAMERA_Z),
            object_spacing,
        }
    }

    pub fn update(&mut self, dt_sec: f32, scroll_y: f32, viewport_height: f32, cursor: Vec2) {
        self.world_position = scroll_translation(scroll_y, viewport_height, self.object_spacing);
        self.parallax_offset = smooth_parallax(self.parallax_offset, parallax_target(cursor), dt_sec);
    }

    #[inline]
    pub fn parallax_offset(&self) -> Vec2 {
        self.parallax_offset
    }

    #[inline]
    pub fn world_position(&self) -> Vec3 {
        self.world_position
    }

    /// Effective rendered camera position.
    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.world_position + self.parallax_offset.extend(0.0) + self.base_offset
    }

    pub fn camera(&self, viewport: &Viewport) -> Camera {
        Camera::looking_forward(self.eye(), viewport)
    }
}

/// One viewport height of scroll moves the camera down by one object spacing.
#[inline]
pub fn scroll_translation(scroll_y: f32, viewport_height: f32, object_spacing: f32) -> Vec3 {
    Vec3::new(0.0, -(scroll_y / viewport_height.max(1.0)) * object_spacing, 0.0)
}

#[inline]
pub fn parallax_target(cursor: Vec2) -> Vec2 {
    Vec2::new(cursor.x * PARALLAX_AMPLITUDE, -cursor.y * PARALLAX_AMPLITUDE)
}

/// Exponential approach toward `target`; zero `dt_sec` leaves `current` as is.
#[inline]
pub fn smooth_parallax(current: Vec2, target: Vec2, dt_sec: f32) -> Vec2 {
    let alpha = 1.0 - (-dt_sec.max(0.0) * PARALLAX_SMOOTHING_PER_SEC).exp();
    current + (target - current) * alpha
}
