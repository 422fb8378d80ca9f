//! Paddle module - the player's reflector.

mod components;
mod plugin;
mod systems;

pub use components::{bounce_angle, deflect, heading_from_up, Paddle};
pub use plugin::PaddlePlugin;
pub use systems::spawn_paddle;
