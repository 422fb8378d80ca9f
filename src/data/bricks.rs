//! Brick type definitions loaded from `assets/data/bricks/`.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::loader::{data_id, read_ron_file, ron_files_in, DATA_ROOT};

fn default_point_value() -> u32 {
    100
}

fn default_color() -> (f32, f32, f32) {
    (1.0, 1.0, 1.0)
}

fn default_drop_chance() -> f32 {
    0.1
}

/// A brick type. Shared by every brick instance that references its id.
#[derive(Debug, Clone, Deserialize)]
pub struct BrickData {
    pub name: String,
    /// Explicit strength. When absent the strength is taken from trailing
    /// digits in the name or id (see [`strength_from_name`]).
    #[serde(default)]
    pub max_health: Option<u32>,
    #[serde(default = "default_point_value")]
    pub point_value: u32,
    #[serde(default)]
    pub unbreakable: bool,
    /// Sprite paths; index `i` is shown at remaining health `i + 1`.
    #[serde(default)]
    pub health_states: Vec<String>,
    /// Tint applied on top of the health sprites.
    #[serde(default = "default_color")]
    pub color: (f32, f32, f32),
    #[serde(default)]
    pub spawns_powerup: bool,
    /// PowerupData id dropped by this brick.
    #[serde(default)]
    pub powerup: Option<String>,
    #[serde(default = "default_drop_chance")]
    pub powerup_drop_chance: f32,
    #[serde(default)]
    pub hit_sound: Option<String>,
    #[serde(default)]
    pub destroy_sound: Option<String>,
}

impl Default for BrickData {
    fn default() -> Self {
        Self {
            name: "Brick".to_string(),
            max_health: None,
            point_value: default_point_value(),
            unbreakable: false,
            health_states: Vec::new(),
            color: default_color(),
            spawns_powerup: false,
            powerup: None,
            powerup_drop_chance: default_drop_chance(),
            hit_sound: None,
            destroy_sound: None,
        }
    }
}

impl BrickData {
    /// Number of hits needed to destroy the brick. Always at least 1.
    pub fn strength(&self) -> u32 {
        self.max_health
            .or_else(|| strength_from_name(&self.name))
            .unwrap_or(1)
            .max(1)
    }

    /// Fill in `max_health` from the registry id when neither the file nor
    /// the display name carries a strength.
    pub fn with_resolved_strength(mut self, id: &str) -> Self {
        if self.max_health.is_none() {
            self.max_health = strength_from_name(&self.name).or_else(|| strength_from_name(id));
        }
        self
    }

    /// Powerup id to drop, if this brick can drop one at all.
    pub fn powerup_drop(&self) -> Option<&str> {
        if self.spawns_powerup {
            self.powerup.as_deref()
        } else {
            None
        }
    }

    pub fn tint(&self) -> Color {
        Color::srgb(self.color.0, self.color.1, self.color.2)
    }
}

/// Parse a strength from trailing digits: `"strong_8"` -> 8, `"Brick3"` -> 3.
pub fn strength_from_name(name: &str) -> Option<u32> {
    let trimmed = name.trim_end();
    let digits_start = trimmed
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    trimmed[digits_start..].parse().ok()
}

/// Resource holding every loaded brick type, keyed by file id.
#[derive(Resource, Default, Debug)]
pub struct BrickRegistry {
    pub types: HashMap<String, BrickData>,
}

impl BrickRegistry {
    /// Get a brick type by id.
    pub fn get(&self, id: &str) -> Option<&BrickData> {
        self.types.get(id)
    }

    pub fn insert(&mut self, id: impl Into<String>, data: BrickData) {
        let id = id.into();
        let data = data.with_resolved_strength(&id);
        self.types.insert(id, data);
    }
}

/// Load all brick types from `assets/data/bricks/`.
pub fn load_brick_types(mut commands: Commands) {
    let mut registry = BrickRegistry::default();
    let dir = Path::new(DATA_ROOT).join("bricks");

    match ron_files_in(&dir) {
        Ok(files) => {
            for path in files {
                let id = data_id(&path);
                match read_ron_file::<BrickData>(&path) {
                    Ok(data) => {
                        info!("Loaded brick type: {} ({}), strength {}", data.name, id, data.strength());
                        registry.insert(id, data);
                    }
                    Err(e) => error!("Failed to load brick type: {}", e),
                }
            }
        }
        Err(e) => warn!("Brick types directory unavailable: {}", e),
    }

    info!("Loaded {} brick type(s)", registry.types.len());
    commands.insert_resource(registry);
}
