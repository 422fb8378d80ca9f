//! Level module - builds the arena and brick grid from level data.

mod arena;
mod builder;
mod camera;
mod placement;
mod plugin;

pub use arena::{paddle_y, ResetZone, Wall};
pub use builder::{spawn_bricks, BrickLayout, BrickRow};
pub use camera::{fit_half_height, viewport_bounds, GameCamera};
pub use placement::{anchored_origin, clamp_to_viewport, resolve_placement, GridPlacement};
pub use plugin::LevelPlugin;
