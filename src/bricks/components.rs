//! Brick component and its health counter.

use bevy::prelude::*;

use crate::data::BrickData;

/// A destructible (or unbreakable) grid cell.
///
/// `health` is the only mutable state. Everything else is copied from the
/// brick's `BrickData` on reset.
#[derive(Component, Debug, Clone)]
pub struct Brick {
    /// BrickData id
    pub brick_type: String,
    pub health: u32,
    pub max_health: u32,
    pub unbreakable: bool,
    pub points: u32,
}

/// Inactive brick: hidden and without a live collider.
#[derive(Component, Debug, Default)]
pub struct Destroyed;

/// What a single ball hit did to a brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Unbreakable or already destroyed
    Ignored,
    Damaged { remaining: u32 },
    Destroyed,
}

impl Brick {
    pub fn from_data(brick_type: impl Into<String>, data: &BrickData) -> Self {
        let mut brick = Self {
            brick_type: brick_type.into(),
            health: 0,
            max_health: 1,
            unbreakable: false,
            points: 0,
        };
        brick.reset(data);
        brick
    }

    /// Restore full strength from the brick's data.
    pub fn reset(&mut self, data: &BrickData) {
        self.max_health = data.strength();
        self.health = self.max_health;
        self.unbreakable = data.unbreakable;
        self.points = data.point_value;
    }

    pub fn hit(&mut self) -> HitOutcome {
        if self.unbreakable || self.health == 0 {
            return HitOutcome::Ignored;
        }
        self.health -= 1;
        if self.health == 0 {
            HitOutcome::Destroyed
        } else {
            HitOutcome::Damaged {
                remaining: self.health,
            }
        }
    }

    /// Still in play. Unbreakable bricks are always active.
    pub fn is_active(&self) -> bool {
        self.unbreakable || self.health > 0
    }
}
