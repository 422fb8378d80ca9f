//! Level plugin - camera, arena, level building and teardown.

use bevy::prelude::*;

use super::arena::detect_ball_miss;
use super::builder::{build_level, cleanup_level, rebuild_bricks};
use super::camera::{fit_camera_to_arena, spawn_camera};
use crate::core::{GameState, GameplaySet};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, fit_camera_to_arena)
            .add_systems(OnEnter(GameState::InGame), build_level)
            .add_systems(OnExit(GameState::InGame), cleanup_level)
            .add_systems(Update, detect_ball_miss.in_set(GameplaySet::Collisions))
            .add_systems(
                Update,
                rebuild_bricks.run_if(in_state(GameState::InGame)),
            );
    }
}
