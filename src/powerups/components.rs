//! Falling pickups and the effects they leave behind.

use bevy::prelude::*;
use std::time::Duration;

use crate::data::{PowerupData, PowerupKind};

/// A falling pickup.
#[derive(Component, Debug, Clone)]
pub struct Powerup {
    /// PowerupData id
    pub id: String,
    pub kind: PowerupKind,
    pub fall_speed: f32,
}

/// A timed effect that is still running.
#[derive(Debug, Clone)]
pub struct ActiveEffect {
    pub kind: PowerupKind,
    pub strength: f32,
    pub timer: Timer,
}

/// Timed effects currently in force. Collecting a powerup of a kind that
/// is already active restarts it with the new strength.
#[derive(Resource, Debug, Default)]
pub struct ActivePowerups {
    pub effects: Vec<ActiveEffect>,
}

impl ActivePowerups {
    pub fn start(&mut self, data: &PowerupData) {
        if !data.kind.is_timed() {
            return;
        }
        let effect = ActiveEffect {
            kind: data.kind,
            strength: data.effect_strength.max(0.01),
            timer: Timer::from_seconds(data.duration.max(0.0), TimerMode::Once),
        };
        match self.effects.iter_mut().find(|e| e.kind == data.kind) {
            Some(existing) => *existing = effect,
            None => self.effects.push(effect),
        }
    }

    /// Advance all timers and drop expired effects. Returns what expired.
    pub fn tick(&mut self, delta: Duration) -> Vec<PowerupKind> {
        let mut expired = Vec::new();
        self.effects.retain_mut(|effect| {
            effect.timer.tick(delta);
            if effect.timer.finished() {
                expired.push(effect.kind);
                false
            } else {
                true
            }
        });
        expired
    }

    /// Strength of the active effect of `kind`, or 1.0 if none is running.
    pub fn multiplier(&self, kind: PowerupKind) -> f32 {
        self.effects
            .iter()
            .find(|e| e.kind == kind)
            .map_or(1.0, |e| e.strength)
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}
