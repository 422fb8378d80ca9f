//! Brick module - health counters, destruction and health visuals.

mod components;
mod plugin;
mod systems;
mod visuals;

pub use components::{Brick, Destroyed, HitOutcome};
pub use plugin::BrickPlugin;
pub use systems::{reset_brick, spawn_brick};
pub use visuals::{brick_visual, evaluate_gradient, health_to_color, sprite_index_for_health, BrickVisual};
