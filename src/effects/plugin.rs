//! Effects plugin - particles and camera shake react to gameplay events.

use bevy::prelude::*;

use super::particles::*;
use super::shake::*;
use crate::core::{GameState, PlayState};

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenShake>()
            .add_systems(
                Update,
                (
                    burst_on_brick_destroyed,
                    burst_on_ball_miss,
                    burst_on_level_complete,
                    update_particles,
                    (
                        shake_on_ball_miss,
                        apply_camera_shake.run_if(in_state(PlayState::Playing)),
                    )
                        .chain(),
                ),
            )
            .add_systems(OnExit(GameState::InGame), reset_camera_shake);
    }
}
