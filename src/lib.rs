//! Brick Breaker - a classic brick-breaking arcade game in Bevy.
//!
//! Bounce the ball off the paddle to break every brick in the level. Brick
//! types, levels, powerups and game settings are data files under
//! `assets/data/`.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, pause handling
//! - **Data**: RON loading for settings, brick types, powerups and levels
//! - **Ball**: Constant-speed ball, reset and delayed launch
//! - **Paddle**: Keyboard movement and angle-controlled bounces
//! - **Bricks**: Health, health visuals and destruction
//! - **Level**: Arena, camera fit and the brick grid builder
//! - **Game**: Score, lives and level progression
//! - **Powerups**: Drops from bricks and their timed effects
//! - **Effects**: Particle bursts and camera shake
//! - **Audio**: Sound effects and level music
//! - **UI**: Menus and HUD
//!
//! Gameplay systems announce what happened through events (see [`core`]);
//! HUD, audio and effects only listen.

pub mod audio;
pub mod ball;
pub mod bricks;
pub mod core;
pub mod data;
pub mod effects;
pub mod game;
pub mod level;
pub mod paddle;
pub mod powerups;
pub mod ui;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct BrickBreakerPlugin;

impl Plugin for BrickBreakerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Data files
            .add_plugins(data::DataPlugin)

            // Gameplay
            .add_plugins((
                ball::BallPlugin,
                paddle::PaddlePlugin,
                bricks::BrickPlugin,
                level::LevelPlugin,
                game::GamePlugin,
                powerups::PowerupPlugin,
            ))

            // Listeners
            .add_plugins((effects::EffectsPlugin, audio::GameAudioPlugin))

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
