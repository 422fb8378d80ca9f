//! Ball components and the pure math behind them.

use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

/// The ball. Its speed magnitude is held constant every physics step.
#[derive(Component, Debug)]
pub struct Ball {
    /// Speed from settings and level overrides
    pub base_speed: f32,
    /// Scaled by BallSpeed powerups; 1.0 when none is active
    pub speed_multiplier: f32,
}

impl Ball {
    pub fn new(base_speed: f32) -> Self {
        Self {
            base_speed,
            speed_multiplier: 1.0,
        }
    }

    pub fn speed(&self) -> f32 {
        self.base_speed * self.speed_multiplier
    }
}

/// Where the ball returns to on reset.
#[derive(Component, Debug, Clone, Copy)]
pub struct BallSpawn(pub Vec2);

/// Present while the ball waits on its spawn point for launch.
#[derive(Component, Debug)]
pub struct LaunchTimer(pub Timer);

impl LaunchTimer {
    pub fn new(delay: f32) -> Self {
        Self(Timer::from_seconds(delay, TimerMode::Once))
    }
}

/// Rescale a velocity to the given speed, keeping its direction.
/// A stopped ball stays stopped.
pub fn constant_speed(velocity: Vec2, speed: f32) -> Vec2 {
    velocity.normalize_or_zero() * speed
}

/// Launch direction for a horizontal component in [-1, 1] and a fixed
/// downward bias.
pub fn launch_direction(random_x: f32) -> Vec2 {
    Vec2::new(random_x.clamp(-1.0, 1.0), -1.0).normalize()
}

/// If a collision start involves a ball, return `(ball, other)`.
pub fn ball_contact(event: &CollisionEvent, is_ball: impl Fn(Entity) -> bool) -> Option<(Entity, Entity)> {
    let CollisionEvent::Started(a, b, _) = event else {
        return None;
    };
    if is_ball(*a) {
        Some((*a, *b))
    } else if is_ball(*b) {
        Some((*b, *a))
    } else {
        None
    }
}
