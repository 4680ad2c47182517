use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the incremental rendering lessons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lesson {
    /// A single red triangle in clip space.
    Triangle,
    /// A spinning cube with one flat color per face.
    Cube,
    /// A spinning cube sampled from a texture atlas.
    Texture,
    /// Indexed textured cube with wireframe toggle, noise tint and screenshots.
    #[default]
    Indexed,
}

/// Initial window parameters for a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lesson '{0}' (expected one of: triangle, cube, texture, indexed)")]
pub struct LessonParseError(pub String);

impl Lesson {
    pub const ALL: [Lesson; 4] = [
        Lesson::Triangle,
        Lesson::Cube,
        Lesson::Texture,
        Lesson::Indexed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Lesson::Triangle => "triangle",
            Lesson::Cube => "cube",
            Lesson::Texture => "texture",
            Lesson::Indexed => "indexed",
        }
    }

    pub fn window(self) -> WindowSpec {
        match self {
            Lesson::Triangle => WindowSpec {
                title: "Hello World!",
                width: 300,
                height: 300,
            },
            _ => WindowSpec {
                title: "First Cube",
                width: 800,
                height: 600,
            },
        }
    }

    /// Whether the camera and projection apply. The triangle is drawn
    /// directly in clip space.
    pub fn uses_camera(self) -> bool {
        !matches!(self, Lesson::Triangle)
    }

    /// Whether the model rotates a little every frame.
    pub fn spins(self) -> bool {
        self.uses_camera()
    }

    pub fn textured(self) -> bool {
        matches!(self, Lesson::Texture | Lesson::Indexed)
    }

    pub fn indexed(self) -> bool {
        matches!(self, Lesson::Indexed)
    }

    /// Wireframe toggle, noise tint and screenshots are only wired up in the
    /// indexed lesson.
    pub fn experimental(self) -> bool {
        self.indexed()
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = LessonParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Lesson::ALL
            .into_iter()
            .find(|lesson| lesson.name() == wanted)
            .ok_or_else(|| LessonParseError(s.to_string()))
    }
}
