//! Score, lives and the current level.

use bevy::prelude::*;

use crate::bricks::Brick;
use crate::data::GameSettings;

/// State of the running game. Listeners learn about changes through
/// `ScoreChangedEvent` and `LivesChangedEvent`.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub score: u32,
    pub lives: u32,
    /// 1-based level number
    pub level: u32,
    /// Next score at which a bonus life is awarded (0 = never)
    pub next_bonus_life: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&GameSettings::default())
    }
}

impl GameSession {
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            score: 0,
            lives: settings.starting_lives,
            level: 1,
            next_bonus_life: settings.bonus_life_score,
        }
    }

    /// Add points and award bonus lives for every threshold crossed.
    /// Returns true when the number of lives changed.
    pub fn add_points(&mut self, points: u32, settings: &GameSettings) -> bool {
        self.score = self.score.saturating_add(points);
        let before = self.lives;
        if settings.bonus_life_score == 0 {
            return false;
        }
        while self.next_bonus_life > 0 && self.score >= self.next_bonus_life {
            self.lives = (self.lives + 1).min(settings.max_lives);
            self.next_bonus_life = self.next_bonus_life.saturating_add(settings.bonus_life_score);
        }
        self.lives != before
    }

    /// Add lives up to the maximum. Returns true when anything changed.
    pub fn gain_lives(&mut self, amount: u32, settings: &GameSettings) -> bool {
        let before = self.lives;
        self.lives = self.lives.saturating_add(amount).min(settings.max_lives);
        self.lives != before
    }

    /// Take one life. Returns true when none are left.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }
}

/// True when no active breakable brick remains. Unbreakable bricks never
/// keep a level open.
pub fn level_cleared<'a>(bricks: impl IntoIterator<Item = &'a Brick>) -> bool {
    !bricks
        .into_iter()
        .any(|brick| !brick.unbreakable && brick.is_active())
}
