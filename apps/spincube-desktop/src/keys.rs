use spincube_input::{Key, KeyAction};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Map a physical key to the lesson key set. Layout-independent, so `W` is
/// the key in the W position.
pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyE => Key::E,
        KeyCode::Space => Key::Space,
        KeyCode::KeyB => Key::B,
        KeyCode::F1 => Key::F1,
        _ => Key::Other,
    }
}

/// Convert a winit key event, or `None` for keys without a physical code.
pub fn from_event(event: &KeyEvent) -> Option<(Key, KeyAction)> {
    let PhysicalKey::Code(code) = event.physical_key else {
        return None;
    };
    let action = KeyAction::from_state(event.state == ElementState::Pressed, event.repeat);
    Some((map_key(code), action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_keys_map() {
        assert_eq!(map_key(KeyCode::KeyW), Key::W);
        assert_eq!(map_key(KeyCode::KeyE), Key::E);
        assert_eq!(map_key(KeyCode::Escape), Key::Escape);
        assert_eq!(map_key(KeyCode::Space), Key::Space);
        assert_eq!(map_key(KeyCode::F1), Key::F1);
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(map_key(KeyCode::KeyZ), Key::Other);
        assert_eq!(map_key(KeyCode::ArrowUp), Key::Other);
        assert_eq!(map_key(KeyCode::ShiftLeft), Key::Other);
    }
}
