//! Rendering adapter: camera, navigation and per-frame scene state.
//!
//! # Invariants
//! - Renderers read the scene; only key events and `advance_frame` mutate it.
//! - The camera direction is never renormalized by navigation.
//! - View and projection matrices are rebuilt from scene state every frame.

mod camera;
mod projection;
mod renderer;
mod scene;

pub use camera::Camera;
pub use projection::Projection;
pub use renderer::{DebugTextRenderer, Renderer};
pub use scene::{SPIN_STEP, Scene};

pub fn crate_info() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().starts_with("spincube-render v"));
        assert!(crate_info().ends_with(env!("CARGO_PKG_VERSION")));
    }
}
