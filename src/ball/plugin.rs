//! Ball plugin - launch, reset and constant speed.

use bevy::prelude::*;
use bevy_rapier2d::plugin::PhysicsSet;

use super::systems::*;
use crate::core::{GameplaySet, PlayState};

pub struct BallPlugin;

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (reset_ball, launch_balls).chain().in_set(GameplaySet::Input),
        )
        // Correct whatever the solver did to the speed before it is rendered
        .add_systems(
            PostUpdate,
            maintain_ball_speed
                .after(PhysicsSet::Writeback)
                .run_if(in_state(PlayState::Playing)),
        );
    }
}
