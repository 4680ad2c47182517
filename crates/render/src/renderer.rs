use crate::scene::Scene;
use std::fmt::Write;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the scene and produces output; it never mutates the
/// camera or any other scene state.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the given scene.
    fn render(&self, scene: &Scene) -> Self::Output;
}

/// Text renderer for headless use: CLI output, logging and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene) -> String {
        let cam = &scene.camera;
        let mut out = String::new();
        let _ = writeln!(out, "=== Lesson: {} ===", scene.lesson);
        let _ = writeln!(
            out,
            "Camera: pos=({:.2}, {:.2}, {:.2}) dir=({:.3}, {:.3}, {:.3}) |dir|={:.4}",
            cam.position.x,
            cam.position.y,
            cam.position.z,
            cam.direction.x,
            cam.direction.y,
            cam.direction.z,
            cam.direction.length()
        );
        let _ = writeln!(
            out,
            "Projection: fov={:.0} aspect={:.3} near={} far={}",
            scene.projection.fov_degrees,
            scene.projection.aspect,
            scene.projection.near,
            scene.projection.far
        );
        let _ = writeln!(
            out,
            "Spin: ({:.2}, {:.2}, {:.2}) wireframe={} close={}",
            scene.spin.x,
            scene.spin.y,
            scene.spin.z,
            scene.wireframe,
            scene.close_requested()
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spincube_common::Lesson;
    use spincube_input::{Key, KeyAction};

    #[test]
    fn debug_renderer_default_scene() {
        let scene = Scene::new(Lesson::Cube);
        let output = DebugTextRenderer::new().render(&scene);

        assert!(output.contains("Lesson: cube"));
        assert!(output.contains("pos=(0.00, 0.00, 10.00)"));
        assert!(output.contains("|dir|=1.0000"));
        assert!(output.contains("close=false"));
    }

    #[test]
    fn debug_renderer_reflects_key_events() {
        let mut scene = Scene::new(Lesson::Indexed);
        scene.handle_key(Key::D, KeyAction::Press);
        scene.handle_key(Key::Space, KeyAction::Release);
        let output = DebugTextRenderer::new().render(&scene);

        assert!(output.contains("pos=(0.50, 0.00, 10.00)"));
        assert!(output.contains("wireframe=true"));
    }
}
