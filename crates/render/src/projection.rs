use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Perspective projection parameters, rebuilt whenever the window resizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            aspect: 800.0 / 600.0,
            near: 0.01,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn for_viewport(width: u32, height: u32) -> Self {
        let mut projection = Self::default();
        projection.resize(width, height);
        projection
    }

    /// Zero-sized viewports (minimized windows) keep the previous aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}
