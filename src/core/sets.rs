//! System ordering for one gameplay frame.

use bevy::prelude::*;

/// Gameplay systems run in this order while the level is playing.
///
/// Rapier reports collisions in `PostUpdate`, so `Collisions` sees the
/// previous step's contacts. `Rules` reads the events `Collisions` sends in
/// the same frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    /// Player input: paddle movement, launch key
    Input,
    /// Contact handling: bricks, paddle bounce, reset zone, pickups
    Collisions,
    /// Score, lives and level progression
    Rules,
}
