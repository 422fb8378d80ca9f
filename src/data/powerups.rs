//! Powerup definitions loaded from `assets/data/powerups/`.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::loader::{data_id, read_ron_file, ron_files_in, DATA_ROOT};

/// What a collected powerup does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum PowerupKind {
    /// Paddle width multiplied by `effect_strength` for `duration`
    PaddleSize,
    /// Paddle move speed multiplied by `effect_strength` for `duration`
    PaddleSpeed,
    /// Ball speed multiplied by `effect_strength` for `duration`
    BallSpeed,
    /// Adds `extra_lives`, capped at the maximum
    ExtraLife,
    /// Adds `bonus_points`
    Points,
    /// Virtual time runs at `effect_strength` for `duration`
    SlowMotion,
}

impl PowerupKind {
    /// Whether the effect expires and must be reverted.
    pub fn is_timed(&self) -> bool {
        matches!(
            self,
            PowerupKind::PaddleSize
                | PowerupKind::PaddleSpeed
                | PowerupKind::BallSpeed
                | PowerupKind::SlowMotion
        )
    }
}

fn default_fall_speed() -> f32 {
    2.0
}

fn default_duration() -> f32 {
    10.0
}

fn default_strength() -> f32 {
    1.0
}

fn default_color() -> (f32, f32, f32) {
    (1.0, 1.0, 1.0)
}

/// A powerup type.
#[derive(Debug, Clone, Deserialize)]
pub struct PowerupData {
    pub name: String,
    pub kind: PowerupKind,
    #[serde(default = "default_color")]
    pub color: (f32, f32, f32),
    #[serde(default = "default_fall_speed")]
    pub fall_speed: f32,
    #[serde(default = "default_duration")]
    pub duration: f32,
    #[serde(default = "default_strength")]
    pub effect_strength: f32,
    #[serde(default)]
    pub bonus_points: u32,
    #[serde(default)]
    pub extra_lives: u32,
    #[serde(default)]
    pub collect_sound: Option<String>,
}

impl PowerupData {
    pub fn tint(&self) -> Color {
        Color::srgb(self.color.0, self.color.1, self.color.2)
    }
}

/// Resource holding every loaded powerup type, keyed by file id.
#[derive(Resource, Default, Debug)]
pub struct PowerupRegistry {
    pub types: HashMap<String, PowerupData>,
}

impl PowerupRegistry {
    pub fn get(&self, id: &str) -> Option<&PowerupData> {
        self.types.get(id)
    }
}

/// Load all powerup types from `assets/data/powerups/`.
pub fn load_powerup_types(mut commands: Commands) {
    let mut registry = PowerupRegistry::default();
    let dir = Path::new(DATA_ROOT).join("powerups");

    match ron_files_in(&dir) {
        Ok(files) => {
            for path in files {
                let id = data_id(&path);
                match read_ron_file::<PowerupData>(&path) {
                    Ok(data) => {
                        info!("Loaded powerup: {} ({})", data.name, id);
                        registry.types.insert(id, data);
                    }
                    Err(e) => error!("Failed to load powerup: {}", e),
                }
            }
        }
        Err(e) => info!("No powerups loaded: {}", e),
    }

    commands.insert_resource(registry);
}
