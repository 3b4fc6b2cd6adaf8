use serde::{Deserialize, Serialize};

/// Legacy keyboard key code (the numeric `which` value of a key event).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const SPACE: Self = Self(32);
    pub const LEFT: Self = Self(37);
    pub const UP: Self = Self(38);
    pub const RIGHT: Self = Self(39);
    pub const DOWN: Self = Self(40);

    /// Code for an ASCII letter (case-insensitive) or digit.
    pub const fn ascii(c: char) -> Self {
        Self(c.to_ascii_uppercase() as u32)
    }

    /// Resolve a human-readable key name.
    ///
    /// Accepts single letters, arrow names in both short (`"left"`) and DOM
    /// (`"ArrowLeft"`) form, `"space"`, and raw codes (`"37"`). Digits are
    /// always read as raw codes.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        match lower.as_str() {
            "left" | "arrowleft" => return Some(Self::LEFT),
            "right" | "arrowright" => return Some(Self::RIGHT),
            "up" | "forward" | "arrowup" => return Some(Self::UP),
            "down" | "back" | "arrowdown" => return Some(Self::DOWN),
            "space" => return Some(Self::SPACE),
            _ => {}
        }
        if let Ok(code) = lower.parse::<u32>() {
            return Some(Self(code));
        }
        let mut chars = lower.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Some(Self::ascii(c)),
            _ => None,
        }
    }
}

impl From<u32> for KeyCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
