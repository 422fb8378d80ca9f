//! Data module - brick types, level configurations, powerups and settings.

mod bricks;
mod error;
mod levels;
mod loader;
mod patterns;
mod plugin;
mod powerups;
mod settings;

pub use bricks::{strength_from_name, BrickData, BrickRegistry};
pub use error::DataLoadError;
pub use levels::{LayoutSource, LevelConfiguration, LevelConfigurationRaw, LevelRegistry};
pub use patterns::{count_bricks, PatternKind};
pub use plugin::DataPlugin;
pub use powerups::{PowerupData, PowerupKind, PowerupRegistry};
pub use settings::{
    AnchorMode, ArenaSettings, BrickVisualProfile, Difficulty, GameSettings, GradientKey,
    LevelBuilderSettings,
};
