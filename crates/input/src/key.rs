/// Keys the lessons react to. Anything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    W,
    A,
    S,
    D,
    Q,
    E,
    Space,
    B,
    F1,
    Other,
}

/// What happened to the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Press,
    Release,
    /// Auto-repeat while the key is held.
    Repeat,
}

impl Key {
    /// Map a script character to a key. `x` stands in for Escape and a blank
    /// for Space so that key scripts stay printable.
    pub fn from_char(c: char) -> Key {
        match c.to_ascii_lowercase() {
            'w' => Key::W,
            'a' => Key::A,
            's' => Key::S,
            'd' => Key::D,
            'q' => Key::Q,
            'e' => Key::E,
            'b' => Key::B,
            'x' => Key::Escape,
            ' ' => Key::Space,
            _ => Key::Other,
        }
    }
}

impl KeyAction {
    pub fn from_state(pressed: bool, repeat: bool) -> KeyAction {
        match (pressed, repeat) {
            (false, _) => KeyAction::Release,
            (true, true) => KeyAction::Repeat,
            (true, false) => KeyAction::Press,
        }
    }
}
