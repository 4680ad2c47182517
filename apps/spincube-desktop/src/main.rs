use anyhow::{Context, Result};
use clap::Parser;
use spincube_assets::{DEFAULT_CUBE_TEXTURE, TextureImage, decode_texture, load_texture};
use spincube_common::Lesson;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

mod app;
mod hud;
mod keys;

use app::GpuApp;

#[derive(Parser)]
#[command(name = "spincube-desktop", about = "Spinning cube lessons")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Lesson to run: triangle, cube, texture or indexed
    #[arg(short, long, default_value_t = Lesson::default())]
    lesson: Lesson,

    /// Cube atlas image; the bundled atlas is used when omitted
    #[arg(long)]
    texture: Option<PathBuf>,

    /// Where the indexed lesson writes screenshots
    #[arg(long, default_value = "Screenshot.png")]
    screenshot: PathBuf,

    /// Window width, overriding the lesson default
    #[arg(long)]
    width: Option<u32>,

    /// Window height, overriding the lesson default
    #[arg(long)]
    height: Option<u32>,
}

/// Decode the atlas up front so a bad image fails before any window opens.
fn lesson_texture(lesson: Lesson, path: Option<&PathBuf>) -> Result<Option<TextureImage>> {
    if !lesson.textured() {
        return Ok(None);
    }
    let image = match path {
        Some(path) => load_texture(path)
            .with_context(|| format!("loading texture for lesson '{lesson}'"))?,
        None => decode_texture(DEFAULT_CUBE_TEXTURE).context("decoding bundled cube texture")?,
    };
    tracing::info!(width = image.width, height = image.height, "texture loaded");
    Ok(Some(image))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!(lesson = %cli.lesson, "spincube-desktop starting");

    let texture = lesson_texture(cli.lesson, cli.texture.as_ref())?;

    let mut window = cli.lesson.window();
    if let Some(width) = cli.width {
        window.width = width;
    }
    if let Some(height) = cli.height {
        window.height = height;
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(cli.lesson, window, texture, cli.screenshot);
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.take_error() {
        return Err(err);
    }
    tracing::info!("spincube-desktop exiting");
    Ok(())
}
