use std::path::Path;

use gamekit_input::{KeyCode, KeyEvent};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unknown key '{key}' at frame {frame}")]
    UnknownKey { frame: u64, key: String },
}

/// A key written either as a legacy key code or as a name (`left`, `w`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeySpec {
    Code(u32),
    Name(String),
}

impl KeySpec {
    pub fn resolve(&self) -> Option<KeyCode> {
        match self {
            KeySpec::Code(code) => Some(KeyCode(*code)),
            KeySpec::Name(name) => KeyCode::from_name(name),
        }
    }
}

fn pressed_by_default() -> bool {
    true
}

/// One line of an input script file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub frame: u64,
    pub key: KeySpec,
    #[serde(default = "pressed_by_default")]
    pub pressed: bool,
}

/// Key events keyed by the frame they are delivered on.
///
/// Kept sorted by frame; events on the same frame keep their file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputScript {
    events: Vec<(u64, KeyEvent)>,
}

impl InputScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<ScriptEntry>) -> Result<Self, ScriptError> {
        let mut script = Self::new();
        for entry in entries {
            let key = entry.key.resolve().ok_or_else(|| ScriptError::UnknownKey {
                frame: entry.frame,
                key: match &entry.key {
                    KeySpec::Code(code) => code.to_string(),
                    KeySpec::Name(name) => name.clone(),
                },
            })?;
            script.push(entry.frame, KeyEvent { key, pressed: entry.pressed });
        }
        Ok(script)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ScriptError> {
        let entries: Vec<ScriptEntry> = serde_yaml::from_str(s)?;
        Self::from_entries(entries)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Queue `event` for `frame`, after anything already queued there.
    pub fn push(&mut self, frame: u64, event: KeyEvent) {
        let at = self.events.partition_point(|(f, _)| *f <= frame);
        self.events.insert(at, (frame, event));
    }

    /// Hold `key` down from frame `from` until frame `until`.
    pub fn hold(mut self, key: KeyCode, from: u64, until: u64) -> Self {
        self.push(from, KeyEvent::down(key));
        self.push(until, KeyEvent::up(key));
        self
    }

    /// Events delivered on `frame`, in order.
    pub fn events_at(&self, frame: u64) -> impl Iterator<Item = KeyEvent> + '_ {
        let start = self.events.partition_point(|(f, _)| *f < frame);
        let end = self.events.partition_point(|(f, _)| *f <= frame);
        self.events[start..end].iter().map(|(_, e)| *e)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last_frame(&self) -> Option<u64> {
        self.events.last().map(|(f, _)| *f)
    }
}
