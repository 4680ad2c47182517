use crate::key::{Key, KeyAction};

/// A high-level action produced from one key event.
///
/// The scene consumes actions, never raw key codes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Move and/or turn the camera.
    Navigate(NavigationCommand),
    /// Ask the render loop to shut down.
    Close,
    /// Switch between filled triangles and the wireframe edge list.
    ToggleWireframe,
    /// Capture the current frame to an image file.
    Screenshot,
    /// Show or hide the overlay panel.
    ToggleHud,
    /// Key or key/action pair with no binding.
    Noop,
}

/// Per-event camera motion. All fields are zero unless the key sets them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigationCommand {
    /// Distance along the facing direction.
    pub forward: f32,
    /// Distance along the strafe axis.
    pub sideways: f32,
    /// Rotation about +Y, in degrees.
    pub yaw_degrees: f32,
}

/// Fixed step sizes applied per key event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationSpeeds {
    pub linear: f32,
    pub angular_degrees: f32,
}

impl Default for NavigationSpeeds {
    fn default() -> Self {
        Self {
            linear: 0.5,
            angular_degrees: 2.0,
        }
    }
}

/// Translate one key event into an action.
///
/// Movement and rotation keys fire on every action kind, so holding a key
/// moves at the platform's key-repeat rate and the release adds one more step.
/// Toggles and Escape only fire on release.
pub fn translate(key: Key, action: KeyAction, speeds: &NavigationSpeeds) -> Action {
    let released = action == KeyAction::Release;
    let mut cmd = NavigationCommand::default();

    match key {
        Key::Escape if released => return Action::Close,
        Key::Space if released => return Action::ToggleWireframe,
        Key::B if released => return Action::Screenshot,
        Key::F1 if released => return Action::ToggleHud,
        Key::E => cmd.yaw_degrees = -speeds.angular_degrees,
        Key::Q => cmd.yaw_degrees = speeds.angular_degrees,
        Key::W => cmd.forward = speeds.linear,
        Key::S => cmd.forward = -speeds.linear,
        Key::A => cmd.sideways = -speeds.linear,
        Key::D => cmd.sideways = speeds.linear,
        _ => {
            tracing::trace!(?key, ?action, "unbound key event");
            return Action::Noop;
        }
    }

    Action::Navigate(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [Key; 11] = [
        Key::Escape,
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::Q,
        Key::E,
        Key::Space,
        Key::B,
        Key::F1,
        Key::Other,
    ];
    const ALL_ACTIONS: [KeyAction; 3] = [KeyAction::Press, KeyAction::Release, KeyAction::Repeat];

    fn nav(key: Key, action: KeyAction) -> NavigationCommand {
        match translate(key, action, &NavigationSpeeds::default()) {
            Action::Navigate(cmd) => cmd,
            other => panic!("expected navigation for {key:?}, got {other:?}"),
        }
    }

    #[test]
    fn only_escape_release_closes() {
        let speeds = NavigationSpeeds::default();
        for key in ALL_KEYS {
            for action in ALL_ACTIONS {
                let closes = translate(key, action, &speeds) == Action::Close;
                assert_eq!(
                    closes,
                    key == Key::Escape && action == KeyAction::Release,
                    "{key:?} {action:?}"
                );
            }
        }
    }

    #[test]
    fn movement_keys() {
        assert_eq!(nav(Key::W, KeyAction::Press).forward, 0.5);
        assert_eq!(nav(Key::S, KeyAction::Press).forward, -0.5);
        assert_eq!(nav(Key::A, KeyAction::Press).sideways, -0.5);
        assert_eq!(nav(Key::D, KeyAction::Press).sideways, 0.5);
    }

    #[test]
    fn rotation_keys() {
        assert_eq!(nav(Key::Q, KeyAction::Repeat).yaw_degrees, 2.0);
        assert_eq!(nav(Key::E, KeyAction::Repeat).yaw_degrees, -2.0);
    }

    #[test]
    fn movement_fires_on_every_action_kind() {
        for action in ALL_ACTIONS {
            assert_ne!(nav(Key::W, action), NavigationCommand::default());
        }
    }

    #[test]
    fn each_event_sets_a_single_component() {
        let cmd = nav(Key::D, KeyAction::Press);
        assert_eq!(cmd.forward, 0.0);
        assert_eq!(cmd.yaw_degrees, 0.0);
    }

    #[test]
    fn toggles_fire_on_release_only() {
        let speeds = NavigationSpeeds::default();
        assert_eq!(
            translate(Key::Space, KeyAction::Release, &speeds),
            Action::ToggleWireframe
        );
        assert_eq!(translate(Key::Space, KeyAction::Press, &speeds), Action::Noop);
        assert_eq!(
            translate(Key::B, KeyAction::Release, &speeds),
            Action::Screenshot
        );
        assert_eq!(translate(Key::B, KeyAction::Repeat, &speeds), Action::Noop);
        assert_eq!(translate(Key::F1, KeyAction::Release, &speeds), Action::ToggleHud);
        assert_eq!(translate(Key::Escape, KeyAction::Press, &speeds), Action::Noop);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        for action in ALL_ACTIONS {
            assert_eq!(
                translate(Key::Other, action, &NavigationSpeeds::default()),
                Action::Noop
            );
        }
    }

    #[test]
    fn custom_speeds_are_used() {
        let speeds = NavigationSpeeds {
            linear: 2.0,
            angular_degrees: 15.0,
        };
        assert_eq!(
            translate(Key::W, KeyAction::Press, &speeds),
            Action::Navigate(NavigationCommand {
                forward: 2.0,
                ..Default::default()
            })
        );
        assert_eq!(
            translate(Key::E, KeyAction::Press, &speeds),
            Action::Navigate(NavigationCommand {
                yaw_degrees: -15.0,
                ..Default::default()
            })
        );
    }
}
