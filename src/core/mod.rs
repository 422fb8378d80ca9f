//! Core game module - states, events, and fundamental systems.
//!
//! This module provides the foundation that all other game systems build upon.

mod events;
mod plugin;
mod sets;
mod states;

pub use events::*;
pub use plugin::{CorePlugin, LevelEntity};
pub use sets::GameplaySet;
pub use states::*;
