use egui::Context as EguiContext;
use spincube_render::Scene;

/// Read-only overlay describing the running lesson.
pub fn draw(ctx: &EguiContext, scene: &Scene) {
    if !scene.show_hud {
        return;
    }

    let cam = &scene.camera;
    egui::SidePanel::left("hud")
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading(format!("Lesson: {}", scene.lesson));
            ui.separator();

            if scene.lesson.uses_camera() {
                ui.label(format!(
                    "Position: ({:.2}, {:.2}, {:.2})",
                    cam.position.x, cam.position.y, cam.position.z
                ));
                ui.label(format!(
                    "Direction: ({:.3}, {:.3}, {:.3})",
                    cam.direction.x, cam.direction.y, cam.direction.z
                ));
                // Navigation never renormalizes, so drift shows up here.
                ui.label(format!("|dir|: {:.5}", cam.direction.length()));
                ui.label(format!(
                    "Spin: ({:.2}, {:.2}, {:.2})",
                    scene.spin.x, scene.spin.y, scene.spin.z
                ));
            }
            if scene.lesson.experimental() {
                ui.label(format!(
                    "Wireframe: {}",
                    if scene.wireframe { "on" } else { "off" }
                ));
            }

            ui.separator();
            ui.small(help_text(scene));
        });
}

fn help_text(scene: &Scene) -> &'static str {
    match (scene.lesson.uses_camera(), scene.lesson.experimental()) {
        (false, _) => "Esc: Quit | F1: HUD",
        (true, false) => "WASD: Move | Q/E: Turn | Esc: Quit | F1: HUD",
        (true, true) => {
            "WASD: Move | Q/E: Turn | Space: Wireframe | B: Screenshot | Esc: Quit | F1: HUD"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spincube_common::Lesson;

    #[test]
    fn help_lists_only_available_keys() {
        assert!(!help_text(&Scene::new(Lesson::Triangle)).contains("WASD"));
        assert!(!help_text(&Scene::new(Lesson::Cube)).contains("Wireframe"));
        assert!(help_text(&Scene::new(Lesson::Indexed)).contains("Screenshot"));
    }
}
