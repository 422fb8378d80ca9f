//! Data plugin - reads settings and authored data files at startup.

use bevy::prelude::*;

use super::bricks::load_brick_types;
use super::levels::load_level_configurations;
use super::powerups::load_powerup_types;
use super::settings::load_game_settings;

/// Data plugin - inserts `GameSettings`, `BrickRegistry`, `PowerupRegistry`
/// and `LevelRegistry`.
pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        // Levels validate their brick references, so bricks load first
        app.add_systems(
            Startup,
            (
                load_game_settings,
                load_brick_types,
                load_powerup_types,
                load_level_configurations,
            )
                .chain(),
        );
    }
}
