//! Global events used for cross-system communication.
//!
//! Gameplay systems announce what happened (a brick broke, the ball fell
//! out) and listeners (HUD, audio, particles, camera shake) react. Neither
//! side holds a reference to the other.

use bevy::prelude::*;

use crate::data::PowerupKind;

/// Sent every time the ball hits a breakable brick that survives the hit.
#[derive(Event, Debug, Clone)]
pub struct BrickHitEvent {
    pub brick: Entity,
    /// BrickData id, so listeners can look up sounds or colors
    pub brick_type: String,
    /// Health left after the hit
    pub remaining_health: u32,
    pub position: Vec2,
}

/// Sent when a brick's health reaches zero.
#[derive(Event, Debug, Clone)]
pub struct BrickDestroyedEvent {
    pub brick: Entity,
    pub brick_type: String,
    /// Points awarded for the destruction
    pub points: u32,
    pub position: Vec2,
}

/// Sent when the ball enters the reset zone below the paddle.
#[derive(Event, Debug, Clone)]
pub struct BallMissedEvent {
    pub position: Vec2,
}

/// Sent by the game session whenever the score changes.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChangedEvent {
    pub score: u32,
}

/// Sent by the game session whenever the number of lives changes.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LivesChangedEvent {
    pub lives: u32,
}

/// Sent when a level has been built and play is about to start.
#[derive(Event, Debug, Clone)]
pub struct LevelStartedEvent {
    pub level: u32,
    pub name: String,
}

/// Sent when the last breakable brick of a level is destroyed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCompletedEvent {
    pub level: u32,
}

/// Sent when the last life is lost.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverEvent {
    pub final_score: u32,
}

/// Sent when the paddle catches a falling powerup.
#[derive(Event, Debug, Clone)]
pub struct PowerupCollectedEvent {
    /// PowerupData id
    pub powerup: String,
    pub kind: PowerupKind,
    pub position: Vec2,
}

/// Put the ball back on its spawn point and recenter the paddle.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RoundResetEvent;

/// A destroyed brick rolled its drop chance successfully.
#[derive(Event, Debug, Clone)]
pub struct PowerupDropEvent {
    /// PowerupData id
    pub powerup: String,
    pub position: Vec2,
}
