use glam::{Mat4, Vec3};

use super::matrix::{perspective_rh, rotation, translation, uniform_scale};
use crate::contract::TransformUniform;

/// Camera and model parameters for the spinning mesh.
///
/// Defaults reproduce the example scene: glyph outlines are in font units, so
/// the model is scaled down and pushed 8 units in front of the camera.
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Vertical field of view, in degrees.
    pub fov_y_degrees: f32,

    pub near: f32,
    pub far: f32,

    /// Axis the model rotates about. Normalized before use; a zero axis
    /// disables the spin.
    pub spin_axis: Vec3,

    pub model_scale: f32,

    /// Distance from the camera to the model origin along -Z.
    pub eye_distance: f32,

    /// Frame rate assumed when the display reports none.
    pub fallback_fps: u32,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 65.0,
            near: 0.1,
            far: 100.0,
            spin_axis: Vec3::new(1.0, 1.0, 0.0),
            model_scale: 0.02,
            eye_distance: 8.0,
            fallback_fps: 60,
        }
    }
}

/// Produces one `TransformUniform` per frame for a mesh rotating at 1 rad/s.
#[derive(Debug, Clone)]
pub struct SpinningTransform {
    config: TransformConfig,
    projection: Mat4,
    rotation: f32,
}

impl SpinningTransform {
    /// Creates the transform for a drawable of `width` x `height` pixels.
    ///
    /// A degenerate size falls back to a square aspect ratio.
    pub fn new(config: TransformConfig, width: f32, height: f32) -> Self {
        let projection = projection_for(&config, 1.0);
        let mut t = Self {
            config,
            projection,
            rotation: 0.0,
        };
        t.resize(width, height);
        t
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Current rotation angle in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Recomputes the projection for a new drawable size.
    ///
    /// A zero, negative or NaN width or height keeps the previous projection,
    /// as does a size whose aspect ratio overflows.
    pub fn resize(&mut self, width: f32, height: f32) {
        let aspect = width / height;
        if !(width > 0.0 && height > 0.0 && aspect.is_finite() && aspect > 0.0) {
            log::debug!("ignoring drawable size {width}x{height}");
            return;
        }
        self.projection = projection_for(&self.config, aspect);
    }

    /// Seconds per frame at `preferred_fps`; zero means "unknown".
    pub fn timestep(&self, preferred_fps: u32) -> f32 {
        let fps = if preferred_fps > 0 {
            preferred_fps
        } else {
            self.config.fallback_fps.max(1)
        };
        1.0 / fps as f32
    }

    pub fn advance(&mut self, dt: f32) {
        self.rotation += dt;
    }

    pub fn model_matrix(&self) -> Mat4 {
        rotation(self.rotation, self.config.spin_axis) * uniform_scale(self.config.model_scale)
    }

    pub fn view_matrix(&self) -> Mat4 {
        translation(0.0, 0.0, -self.config.eye_distance)
    }

    /// Builds this frame's uniform record.
    pub fn uniforms(&self) -> TransformUniform {
        TransformUniform::new(self.projection, self.view_matrix() * self.model_matrix())
    }
}

fn projection_for(config: &TransformConfig, aspect: f32) -> Mat4 {
    perspective_rh(config.fov_y_degrees.to_radians(), aspect, config.near, config.far)
}
