//! Paddle plugin - keyboard movement and angle-controlled bounces.

use bevy::prelude::*;

use super::systems::*;
use crate::core::GameplaySet;

pub struct PaddlePlugin;

impl Plugin for PaddlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                (reset_paddle, paddle_movement).chain().in_set(GameplaySet::Input),
                paddle_bounce.in_set(GameplaySet::Collisions),
                apply_paddle_size,
            ),
        );
    }
}
