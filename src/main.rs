//! Brick Breaker - Entry Point
//!
//! Controls:
//! - A/D or Left/Right: Move paddle
//! - Space: Launch ball
//! - Escape: Pause/Unpause
//! - F5: Refresh all bricks
//! - F6: Rebuild level

use bevy::prelude::*;
use bevy_kira_audio::AudioPlugin;
use bevy_rapier2d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins; kira replaces the built-in audio
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Brick Breaker".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::audio::AudioPlugin>(),
        )

        // Physics, in world units (1 unit = 1 brick width)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))

        // Audio
        .add_plugins(AudioPlugin)

        // Our game plugin
        .add_plugins(brick_breaker::BrickBreakerPlugin)

        .run();
}
