//! Powerup module - pickups dropped by bricks and their effects.

mod components;
mod plugin;
mod systems;

pub use components::{ActiveEffect, ActivePowerups, Powerup};
pub use plugin::PowerupPlugin;
