use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors from loading arena configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Tuning for the player thing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThingConfig {
    pub mass: f32,
    pub rot_mass: f32,
    /// Rest height of the body above the floor.
    pub ground_height: f32,
    /// Jump and gravity are only simulated when enabled.
    pub can_jump: bool,
    pub jump_force: f32,
    pub gravity: f32,
    pub jump_button: usize,
}

impl Default for ThingConfig {
    fn default() -> Self {
        Self {
            mass: 50.0,
            rot_mass: 5.0,
            ground_height: 1.0,
            can_jump: true,
            jump_force: 30.0,
            gravity: 0.7,
            jump_button: 0,
        }
    }
}

/// Tuning for enemy blobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobConfig {
    pub count: usize,
    pub mass: f32,
    pub max_force: f32,
    /// Spin speed is drawn from `[-max_spin, max_spin]` degrees per step.
    pub max_spin: f32,
    /// Steps a blob stays damaged after being stomped.
    pub damage_steps: u32,
    /// The thing stomps a blob when above this height.
    pub stomp_height: f32,
    pub bump_impulse: f32,
    pub bump_penalty: i64,
    /// Destroying a blob awards `0..max_points` points.
    pub max_points: u32,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            count: 10,
            mass: 100.0,
            max_force: 1.0,
            max_spin: 10.0,
            damage_steps: 180,
            stomp_height: 1.1,
            bump_impulse: 0.4,
            bump_penalty: 5,
            max_points: 7,
        }
    }
}

/// Tuning for the gun and its bullets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GunConfig {
    pub overheat_steps: i32,
    pub fire_button: usize,
    pub bullet_speed: f32,
}

impl Default for GunConfig {
    fn default() -> Self {
        Self {
            overheat_steps: 10,
            fire_button: 1,
            bullet_speed: 1.2,
        }
    }
}

/// Full arena configuration. Every field is optional in YAML; missing
/// values keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub arena_radius: f32,
    pub move_friction: f32,
    pub rot_friction: f32,
    pub thing: ThingConfig,
    pub blob: BlobConfig,
    pub gun: GunConfig,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            arena_radius: 60.0,
            move_friction: 0.98,
            rot_friction: 0.95,
            thing: ThingConfig::default(),
            blob: BlobConfig::default(),
            gun: GunConfig::default(),
        }
    }
}

impl ArenaConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&data)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_config_file_restates_defaults() {
        let c = ArenaConfig::from_yaml_str(include_str!("../../../data/arena.yaml")).unwrap();
        assert_eq!(c, ArenaConfig::default());
    }

    #[test]
    fn defaults_match_the_arena_game() {
        let c = ArenaConfig::default();
        assert_eq!(c.arena_radius, 60.0);
        assert_eq!(c.thing.mass, 50.0);
        assert_eq!(c.blob.count, 10);
        assert_eq!(c.gun.overheat_steps, 10);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let c = ArenaConfig::from_yaml_str("arena_radius: 20\nblob:\n  count: 3\n").unwrap();
        assert_eq!(c.arena_radius, 20.0);
        assert_eq!(c.blob.count, 3);
        assert_eq!(c.blob.mass, 100.0);
        assert_eq!(c.thing, ThingConfig::default());
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(ArenaConfig::from_yaml_str("{}").unwrap(), ArenaConfig::default());
    }

    #[test]
    fn yaml_round_trip() {
        let c = ArenaConfig::default();
        let again = ArenaConfig::from_yaml_str(&c.to_yaml().unwrap()).unwrap();
        assert_eq!(c, again);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arena.yaml");
        std::fs::write(&path, "gun:\n  fire_button: 4\n").unwrap();
        assert_eq!(ArenaConfig::load(&path).unwrap().gun.fire_button, 4);
        assert!(matches!(
            ArenaConfig::load(dir.path().join("nope.yaml")),
            Err(ConfigError::Io(_))
        ));
    }
}
