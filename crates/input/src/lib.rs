//! Input mapping: raw key events translated into actions.
//!
//! # Invariants
//! - Translation is pure: the same key and action always yield the same `Action`.
//! - Only an Escape release ever produces `Action::Close`.
//! - Unknown keys map to `Action::Noop`.

pub mod action;
mod key;

pub use action::{Action, NavigationCommand, NavigationSpeeds, translate};
pub use key::{Key, KeyAction};
