//! Game module - score, lives and level progression.

mod plugin;
mod session;
mod systems;

pub use plugin::GamePlugin;
pub use session::{level_cleared, GameSession};
