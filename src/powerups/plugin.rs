//! Powerup plugin - drops, pickups and timed effects.

use bevy::prelude::*;

use super::components::ActivePowerups;
use super::systems::*;
use crate::core::{GameState, GameplaySet};

pub struct PowerupPlugin;

impl Plugin for PowerupPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActivePowerups>()
            .add_systems(
                Update,
                (
                    fall_powerups.in_set(GameplaySet::Input),
                    collect_powerups.in_set(GameplaySet::Collisions),
                    (spawn_dropped_powerups, tick_active_powerups, apply_powerup_effects)
                        .chain()
                        .in_set(GameplaySet::Rules),
                ),
            )
            .add_systems(OnExit(GameState::InGame), clear_powerup_effects);
    }
}
