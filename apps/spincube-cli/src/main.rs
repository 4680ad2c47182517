use clap::{Parser, Subcommand};
use spincube_common::Lesson;
use spincube_input::{Action, Key, KeyAction};
use spincube_render::{DebugTextRenderer, Renderer, Scene};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spincube-cli", about = "Headless tools for the spincube lessons")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the lesson table
    Info,
    /// Replay a key script against a fresh scene and print the result
    Navigate {
        /// Keys to replay, one release event per character (w a s d q e,
        /// x for Escape)
        #[arg(short, long)]
        keys: String,
        /// Lesson whose scene receives the keys
        #[arg(short, long, default_value_t = Lesson::Cube)]
        lesson: Lesson,
        /// Print the final scene as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the indexed cube's wireframe edges
    Wireframe,
}

/// Feed each script character to `scene` as a key release. Replay stops at
/// the first close request, as the window would.
fn replay(scene: &mut Scene, script: &str) -> usize {
    let mut applied = 0;
    for c in script.chars() {
        if scene.handle_key(Key::from_char(c), KeyAction::Release) != Action::Noop {
            applied += 1;
        }
        if scene.close_requested() {
            tracing::debug!("close requested, replay stopped");
            break;
        }
    }
    applied
}

/// Replay `script` on a fresh scene and render the result as text or JSON.
fn navigate_report(lesson: Lesson, script: &str, json: bool) -> anyhow::Result<String> {
    let mut scene = Scene::new(lesson);
    let applied = replay(&mut scene, script);
    tracing::info!(applied, total = script.chars().count(), "key script replayed");
    if json {
        Ok(serde_json::to_string_pretty(&scene)? + "\n")
    } else {
        Ok(DebugTextRenderer::new().render(&scene))
    }
}

fn edge_list(indices: &[u32]) -> Vec<(u32, u32)> {
    spincube_assets::wireframe_indices(indices)
        .chunks_exact(2)
        .map(|edge| (edge[0], edge[1]))
        .collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("spincube-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", spincube_render::crate_info());
            println!("assets: {}", spincube_assets::crate_info());
            println!();
            println!(
                "{:<10} {:>9} {:<14} camera spin texture indexed",
                "lesson", "window", "title"
            );
            for lesson in Lesson::ALL {
                let w = lesson.window();
                println!(
                    "{:<10} {:>9} {:<14} {:<6} {:<4} {:<7} {}",
                    lesson.name(),
                    format!("{}x{}", w.width, w.height),
                    w.title,
                    lesson.uses_camera(),
                    lesson.spins(),
                    lesson.textured(),
                    lesson.indexed()
                );
            }
        }
        Commands::Navigate { keys, lesson, json } => {
            print!("{}", navigate_report(lesson, &keys, json)?);
        }
        Commands::Wireframe => {
            let cube = spincube_assets::mesh::indexed_cube();
            let edges = edge_list(&cube.indices);
            println!(
                "indexed cube: {} vertices, {} triangles, {} edges",
                cube.vertices.len(),
                cube.indices.len() / 3,
                edges.len()
            );
            for (a, b) in edges {
                println!("{a} -> {b}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_script_moves_camera() {
        let mut scene = Scene::new(Lesson::Cube);
        let applied = replay(&mut scene, "ww");
        assert_eq!(applied, 2);
        assert!((scene.camera.position.z - 9.0).abs() < 1e-5);
    }

    #[test]
    fn replay_stops_at_escape() {
        let mut scene = Scene::new(Lesson::Cube);
        replay(&mut scene, "wxw");
        assert!(scene.close_requested());
        assert!((scene.camera.position.z - 9.5).abs() < 1e-5);
    }

    #[test]
    fn unknown_characters_are_skipped() {
        let mut scene = Scene::new(Lesson::Cube);
        assert_eq!(replay(&mut scene, "zz?"), 0);
        assert_eq!(scene.camera.position.z, 10.0);
    }

    #[test]
    fn triangle_ignores_movement() {
        let mut scene = Scene::new(Lesson::Triangle);
        assert_eq!(replay(&mut scene, "wasdqe"), 0);
        assert_eq!(scene.camera.position.z, 10.0);
    }

    #[test]
    fn wireframe_has_three_edges_per_triangle() {
        let cube = spincube_assets::mesh::indexed_cube();
        let edges = edge_list(&cube.indices);
        assert_eq!(edges.len(), cube.indices.len());
        assert_eq!(edges[0], (cube.indices[0], cube.indices[1]));
        assert_eq!(edges[2], (cube.indices[2], cube.indices[0]));
    }

    #[test]
    fn json_report_is_plain_json() {
        let report = navigate_report(Lesson::Cube, "wx", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["lesson"], "cube");
        let z = value["camera"]["position"][2].as_f64().unwrap();
        assert!((z - 9.5).abs() < 1e-5);
    }

    #[test]
    fn text_report_describes_scene() {
        let report = navigate_report(Lesson::Indexed, "d", false).unwrap();
        assert!(report.starts_with("=== Lesson: indexed ==="));
        assert!(report.contains("pos=(0.50, 0.00, 10.00)"));
    }

    #[test]
    fn cli_parses_navigate() {
        let cli =
            Cli::try_parse_from(["spincube-cli", "navigate", "--keys", "wwq", "--json"]).unwrap();
        match cli.command {
            Commands::Navigate { keys, lesson, json } => {
                assert_eq!(keys, "wwq");
                assert_eq!(lesson, Lesson::Cube);
                assert!(json);
            }
            _ => panic!("expected navigate"),
        }
    }
}
