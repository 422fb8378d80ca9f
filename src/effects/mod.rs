//! Visual feedback listeners.

mod particles;
mod plugin;
mod shake;

pub use particles::{burst_velocities, spawn_burst, Burst, Particle};
pub use plugin::EffectsPlugin;
pub use shake::ScreenShake;
