//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Paddle input and
//! ball physics only run while `PlayState::Playing`, menus only run in
//! `MainMenu` and `GameOver`.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while data files are read
/// - Move to `MainMenu` when loading completes
/// - `InGame` owns the level: entering builds it, exiting tears it down
/// - `LevelTransition` is a one-frame bridge used to rebuild the level
///   when the level number changes
/// - `GameOver` when the last life is lost
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading settings and data files
    #[default]
    Loading,
    /// Title screen
    MainMenu,
    /// Active level
    InGame,
    /// Between two levels (or a reset); immediately returns to `InGame`
    LevelTransition,
    /// Out of lives
    GameOver,
}

/// Sub-states for gameplay - only exist while `GameState::InGame`.
///
/// Pausing is a sub-state so that the level is not rebuilt on resume.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Ball moving, paddle controllable
    #[default]
    Playing,
    /// Virtual time frozen, pause menu shown
    Paused,
}
