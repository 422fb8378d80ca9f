//! Brick plugin - hit handling and the refresh tool.

use bevy::prelude::*;

use super::systems::*;
use crate::core::{GameState, GameplaySet};

pub struct BrickPlugin;

impl Plugin for BrickPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_brick_hits.in_set(GameplaySet::Collisions))
            .add_systems(
                Update,
                refresh_all_bricks.run_if(in_state(GameState::InGame)),
            );
    }
}
