//! Audio listener.

mod plugin;
mod systems;

pub use plugin::GameAudioPlugin;
pub use systems::{music_volume, MusicChannel};
