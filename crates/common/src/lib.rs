//! Shared types for the spincube lessons.
//!
//! # Invariants
//! - Every lesson has a stable lowercase name used on the command line.
//! - Lesson capabilities (camera, spin, texture, indexing) are fixed per variant.

mod lesson;

pub use lesson::{Lesson, LessonParseError, WindowSpec};
