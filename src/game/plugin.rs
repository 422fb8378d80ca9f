//! Game plugin - the session and the rules that drive it.

use bevy::prelude::*;

use super::session::GameSession;
use super::systems::*;
use crate::core::{GameState, GameplaySet};

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameSession>()
            // Leaving a menu always starts from scratch
            .add_systems(OnExit(GameState::MainMenu), start_new_game)
            .add_systems(OnExit(GameState::GameOver), start_new_game)
            .add_systems(
                Update,
                (handle_ball_missed, handle_brick_destroyed, apply_powerup_rewards)
                    .in_set(GameplaySet::Rules),
            );
    }
}
