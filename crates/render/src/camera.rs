use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};
use spincube_input::NavigationCommand;

/// First-person camera: a position and the direction it looks along.
///
/// Navigation is event-driven and never renormalizes `direction`, so its
/// length can drift slightly after many rotations. Forward motion normalizes
/// a copy, which keeps the step length exact regardless of drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub direction: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::NEG_Z,
        }
    }
}

impl Camera {
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Lateral axis derived from the current direction as `(-z, y, x)`.
    ///
    /// Perpendicular to `direction` only while `direction.y == 0`, which
    /// holds for every camera that starts level since turning is about +Y.
    pub fn strafe_axis(&self) -> Vec3 {
        Vec3::new(-self.direction.z, self.direction.y, self.direction.x)
    }

    /// Apply one navigation command in place: forward step, strafe step, then yaw.
    pub fn navigate(&mut self, cmd: &NavigationCommand) {
        let forward = self.direction.normalize_or_zero() * cmd.forward;
        let sideways = self.strafe_axis() * cmd.sideways;
        self.position += forward + sideways;
        self.direction = Quat::from_rotation_y(cmd.yaw_degrees.to_radians()) * self.direction;
    }

    /// Pure form of [`Camera::navigate`].
    pub fn navigated(mut self, cmd: &NavigationCommand) -> Self {
        self.navigate(cmd);
        self
    }

    pub fn target(&self) -> Vec3 {
        self.position + self.direction
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target(), Vec3::Y)
    }
}
