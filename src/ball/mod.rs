//! Ball module - the constant-speed projectile.

mod components;
mod plugin;
mod systems;

pub use components::{ball_contact, constant_speed, launch_direction, Ball, BallSpawn, LaunchTimer};
pub use plugin::BallPlugin;
pub use systems::{spawn_ball, BallSpawnParams};
