use crate::camera::Camera;
use crate::projection::Projection;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use spincube_common::Lesson;
use spincube_input::{Action, Key, KeyAction, NavigationSpeeds, translate};

/// Spin added to the model rotation every frame, in radians per axis.
pub const SPIN_STEP: Vec3 = Vec3::splat(0.01);

/// Everything a lesson needs between frames.
///
/// Owned by the event loop; mutated by key events and `advance_frame`, read
/// by renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub lesson: Lesson,
    pub camera: Camera,
    pub projection: Projection,
    /// Accumulated model rotation about X, Y and Z.
    pub spin: Vec3,
    pub wireframe: bool,
    pub show_hud: bool,
    close_requested: bool,
    screenshot_requested: bool,
}

impl Scene {
    pub fn new(lesson: Lesson) -> Self {
        let window = lesson.window();
        Self {
            lesson,
            camera: Camera::default(),
            projection: Projection::for_viewport(window.width, window.height),
            spin: Vec3::ZERO,
            wireframe: false,
            show_hud: true,
            close_requested: false,
            screenshot_requested: false,
        }
    }

    /// Feed one key event through the key map and apply the result.
    ///
    /// The triangle lesson only listens for Escape; the wireframe toggle and
    /// screenshots only exist in the experimental lesson.
    pub fn handle_key(&mut self, key: Key, action: KeyAction) -> Action {
        let action = translate(key, action, &NavigationSpeeds::default());
        self.apply(action)
    }

    /// Apply an already-translated action. Returns what was actually applied.
    pub fn apply(&mut self, action: Action) -> Action {
        let lesson = self.lesson;
        match action {
            Action::Close => {
                tracing::info!("close requested");
                self.close_requested = true;
            }
            Action::Navigate(cmd) if lesson.uses_camera() => {
                self.camera.navigate(&cmd);
                tracing::trace!(
                    position = ?self.camera.position,
                    direction = ?self.camera.direction,
                    "camera moved"
                );
            }
            Action::ToggleWireframe if lesson.experimental() => {
                self.wireframe = !self.wireframe;
                tracing::debug!(wireframe = self.wireframe, "wireframe toggled");
            }
            Action::Screenshot if lesson.experimental() => {
                self.screenshot_requested = true;
            }
            Action::ToggleHud => {
                self.show_hud = !self.show_hud;
            }
            _ => return Action::Noop,
        }
        action
    }

    /// Per-frame update: advance the spin of lessons that rotate their model.
    pub fn advance_frame(&mut self) {
        if self.lesson.spins() {
            self.spin += SPIN_STEP;
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Returns true once per requested screenshot.
    pub fn take_screenshot_request(&mut self) -> bool {
        std::mem::take(&mut self.screenshot_requested)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.spin.x)
            * Mat4::from_rotation_y(self.spin.y)
            * Mat4::from_rotation_z(self.spin.z)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection.matrix() * self.camera.view_matrix()
    }

    /// Full transform handed to the vertex shader. The triangle lesson draws
    /// straight into clip space.
    pub fn model_view_projection(&self) -> Mat4 {
        if self.lesson.uses_camera() {
            self.view_projection() * self.model_matrix()
        } else {
            Mat4::IDENTITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spincube_input::NavigationCommand;

    #[test]
    fn escape_release_closes() {
        let mut scene = Scene::new(Lesson::Cube);
        scene.handle_key(Key::Escape, KeyAction::Press);
        assert!(!scene.close_requested());
        scene.handle_key(Key::Escape, KeyAction::Release);
        assert!(scene.close_requested());
    }

    #[test]
    fn triangle_ignores_navigation_but_closes() {
        let mut scene = Scene::new(Lesson::Triangle);
        let before = scene.camera;
        assert_eq!(scene.handle_key(Key::W, KeyAction::Press), Action::Noop);
        assert_eq!(scene.camera, before);
        scene.handle_key(Key::Escape, KeyAction::Release);
        assert!(scene.close_requested());
        assert_eq!(scene.model_view_projection(), Mat4::IDENTITY);
    }

    #[test]
    fn wasd_moves_camera() {
        let mut scene = Scene::new(Lesson::Cube);
        scene.handle_key(Key::W, KeyAction::Press);
        scene.handle_key(Key::W, KeyAction::Repeat);
        assert!(
            scene
                .camera
                .position
                .abs_diff_eq(Vec3::new(0.0, 0.0, 9.0), 1e-5)
        );
        scene.handle_key(Key::S, KeyAction::Press);
        scene.handle_key(Key::S, KeyAction::Press);
        assert!(scene.camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-5));
    }

    #[test]
    fn wireframe_only_in_experimental_lesson() {
        let mut cube = Scene::new(Lesson::Cube);
        cube.handle_key(Key::Space, KeyAction::Release);
        assert!(!cube.wireframe);

        let mut indexed = Scene::new(Lesson::Indexed);
        indexed.handle_key(Key::Space, KeyAction::Release);
        assert!(indexed.wireframe);
        indexed.handle_key(Key::Space, KeyAction::Release);
        assert!(!indexed.wireframe);
    }

    #[test]
    fn screenshot_request_is_taken_once() {
        let mut scene = Scene::new(Lesson::Indexed);
        assert!(!scene.take_screenshot_request());
        scene.handle_key(Key::B, KeyAction::Release);
        assert!(scene.take_screenshot_request());
        assert!(!scene.take_screenshot_request());
    }

    #[test]
    fn spin_accumulates_per_frame() {
        let mut scene = Scene::new(Lesson::Texture);
        for _ in 0..100 {
            scene.advance_frame();
        }
        assert!(scene.spin.abs_diff_eq(Vec3::splat(1.0), 1e-4));

        let mut triangle = Scene::new(Lesson::Triangle);
        triangle.advance_frame();
        assert_eq!(triangle.spin, Vec3::ZERO);
    }

    #[test]
    fn model_matrix_starts_at_identity() {
        let scene = Scene::new(Lesson::Cube);
        assert_eq!(scene.model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let scene = Scene::new(Lesson::Cube);
        let clip = scene.model_view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn apply_navigation_directly() {
        let mut scene = Scene::new(Lesson::Indexed);
        let applied = scene.apply(Action::Navigate(NavigationCommand {
            sideways: 1.0,
            ..Default::default()
        }));
        assert!(matches!(applied, Action::Navigate(_)));
        assert!(scene.camera.position.abs_diff_eq(Vec3::new(1.0, 0.0, 10.0), 1e-5));
    }

    #[test]
    fn resize_updates_projection() {
        let mut scene = Scene::new(Lesson::Cube);
        scene.resize(1000, 500);
        assert_eq!(scene.projection.aspect, 2.0);
    }

    #[test]
    fn scene_serializes_camera() {
        let scene = Scene::new(Lesson::Cube);
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["lesson"], "cube");
        assert!(json["camera"]["position"].is_array());
    }
}
