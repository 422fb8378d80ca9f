//! Game settings loaded from an external RON file.
//!
//! Allows tweaking ball, paddle, placement and feedback parameters without
//! recompilation. Every field has a default so a settings file only needs
//! to list what it changes.

use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

use super::loader::{read_ron_file, DATA_ROOT};

/// Difficulty presets that pick a ball speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// How the brick grid is positioned in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum AnchorMode {
    /// Top-left cell at the configured start position
    #[default]
    Config,
    /// Centered horizontally, hanging from the top of the camera viewport
    CameraTop,
    /// Bottom row a fixed gap above the paddle
    AbovePaddle,
    /// Vertically centered between the paddle and the viewport top
    PaddleCameraMidpoint,
}

/// Placement overrides applied to the level builder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelBuilderSettings {
    /// When false, the level's own placement values are used untouched.
    pub apply_to_level_builders: bool,
    pub anchor_mode: AnchorMode,
    /// Take the start position from the level configuration.
    pub use_config_placement: bool,
    /// Take the brick spacing from the level configuration.
    pub use_spacing_from_config: bool,
    /// Size cells from the level's brick size instead of `cell_width`/`cell_height`.
    pub auto_cell_size_from_prefab: bool,
    pub start_position: (f32, f32),
    pub cell_width: f32,
    pub cell_height: f32,
    pub spacing: f32,
    /// Parent each row of bricks under its own entity.
    pub group_by_rows: bool,
    pub vertical_gap_above_paddle: f32,
    pub clamp_to_camera_viewport: bool,
    pub camera_top_margin: f32,
    pub camera_side_margin: f32,
    /// Log the computed placement origin and grid size.
    pub debug_placement: bool,
}

impl Default for LevelBuilderSettings {
    fn default() -> Self {
        Self {
            apply_to_level_builders: false,
            anchor_mode: AnchorMode::Config,
            use_config_placement: true,
            use_spacing_from_config: true,
            auto_cell_size_from_prefab: true,
            start_position: (-7.5, 4.0),
            cell_width: 1.0,
            cell_height: 0.5,
            spacing: 0.1,
            group_by_rows: true,
            vertical_gap_above_paddle: 3.0,
            clamp_to_camera_viewport: false,
            camera_top_margin: 0.5,
            camera_side_margin: 0.5,
            debug_placement: false,
        }
    }
}

/// A color stop of the brick strength gradient.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GradientKey {
    /// Position in [0, 1]
    pub time: f32,
    pub color: (f32, f32, f32),
}

/// Controls how brick strength is shown when no health sprites exist.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrickVisualProfile {
    pub strength_gradient: Vec<GradientKey>,
    pub unbreakable_color: (f32, f32, f32),
    /// Use health sprites when a brick type has them; colors otherwise.
    pub prefer_sprites_when_available: bool,
}

impl Default for BrickVisualProfile {
    fn default() -> Self {
        Self {
            strength_gradient: vec![
                GradientKey { time: 0.0, color: (1.0, 0.0, 0.0) },
                GradientKey { time: 0.33, color: (1.0, 0.5, 0.0) },
                GradientKey { time: 0.66, color: (0.0, 1.0, 0.0) },
                GradientKey { time: 1.0, color: (0.0, 1.0, 1.0) },
            ],
            unbreakable_color: (0.5, 0.5, 0.5),
            prefer_sprites_when_available: true,
        }
    }
}

/// Play area dimensions, centered on the world origin.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArenaSettings {
    /// Inner width between the side walls
    pub width: f32,
    /// Inner height from the reset zone to the top wall
    pub height: f32,
    pub wall_thickness: f32,
    /// Distance of the paddle above the bottom edge
    pub paddle_elevation: f32,
    /// Extra world units shown around the arena by the camera
    pub camera_padding: f32,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            width: 16.0,
            height: 12.0,
            wall_thickness: 0.5,
            paddle_elevation: 1.0,
            camera_padding: 0.5,
        }
    }
}

/// Global tunables, loaded from `assets/data/settings.ron`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    // Player progression
    pub starting_lives: u32,
    pub max_lives: u32,
    /// A life is awarded every time the score crosses a multiple of this (0 = off)
    pub bonus_life_score: u32,
    // Ball
    pub ball_speed: f32,
    pub use_difficulty_speed: bool,
    pub difficulty: Difficulty,
    pub easy_ball_speed: f32,
    pub normal_ball_speed: f32,
    pub hard_ball_speed: f32,
    /// Seconds between a ball reset and its launch
    pub launch_delay: f32,
    pub ball_radius: f32,
    // Paddle
    pub paddle_move_speed: f32,
    /// Degrees, 0..=85
    pub paddle_max_bounce_angle: f32,
    pub paddle_size: (f32, f32),
    // Feedback
    pub screen_shake_enabled: bool,
    pub screen_shake_intensity: f32,
    pub screen_shake_duration: f32,
    pub particle_effects_enabled: bool,
    // Audio
    pub master_volume: f32,
    pub sfx_volume: f32,
    pub music_volume: f32,
    pub ball_miss_sound: Option<String>,
    pub level_complete_sound: Option<String>,
    pub game_over_sound: Option<String>,
    // Layout
    pub arena: ArenaSettings,
    /// `None` uses the fixed red/orange/green/cyan steps
    pub visual_profile: Option<BrickVisualProfile>,
    pub level_builder: LevelBuilderSettings,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            max_lives: 5,
            bonus_life_score: 10_000,
            ball_speed: 10.0,
            use_difficulty_speed: false,
            difficulty: Difficulty::Normal,
            easy_ball_speed: 4.0,
            normal_ball_speed: 6.0,
            hard_ball_speed: 8.0,
            launch_delay: 1.0,
            ball_radius: 0.25,
            paddle_move_speed: 12.0,
            paddle_max_bounce_angle: 75.0,
            paddle_size: (2.5, 0.4),
            screen_shake_enabled: true,
            screen_shake_intensity: 0.1,
            screen_shake_duration: 0.3,
            particle_effects_enabled: true,
            master_volume: 1.0,
            sfx_volume: 0.8,
            music_volume: 0.6,
            ball_miss_sound: None,
            level_complete_sound: None,
            game_over_sound: None,
            arena: ArenaSettings::default(),
            visual_profile: Some(BrickVisualProfile::default()),
            level_builder: LevelBuilderSettings::default(),
        }
    }
}

impl GameSettings {
    /// Path of the settings file.
    pub fn path() -> std::path::PathBuf {
        Path::new(DATA_ROOT).join("settings.ron")
    }

    /// Load settings from RON file, falling back to defaults.
    pub fn load() -> Self {
        let path = Self::path();
        match read_ron_file::<GameSettings>(&path) {
            Ok(settings) => {
                info!("Loaded game settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                warn!("{}. Using default settings.", e);
                Self::default()
            }
        }
    }

    /// Clamp values into the ranges the game logic relies on.
    pub fn sanitized(mut self) -> Self {
        self.paddle_max_bounce_angle = self.paddle_max_bounce_angle.clamp(0.0, 85.0);
        self.max_lives = self.max_lives.max(1);
        self.starting_lives = self.starting_lives.clamp(1, self.max_lives);
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self.launch_delay = self.launch_delay.max(0.0);
        self
    }

    pub fn ball_speed_for_difficulty(&self) -> f32 {
        match self.difficulty {
            Difficulty::Easy => self.easy_ball_speed,
            Difficulty::Normal => self.normal_ball_speed,
            Difficulty::Hard => self.hard_ball_speed,
        }
    }

    /// Ball speed before any level override or powerup.
    pub fn base_ball_speed(&self) -> f32 {
        if self.use_difficulty_speed {
            self.ball_speed_for_difficulty()
        } else {
            self.ball_speed
        }
    }

    /// Effective volume for one-shot effects.
    pub fn effects_volume(&self) -> f64 {
        f64::from(self.master_volume * self.sfx_volume)
    }
}

/// System to load game settings at startup.
pub fn load_game_settings(mut commands: Commands) {
    commands.insert_resource(GameSettings::load());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings: GameSettings =
            ron::from_str("(ball_speed: 7.5, difficulty: Hard)").expect("valid settings RON");
        assert_eq!(settings.ball_speed, 7.5);
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.starting_lives, 3);
        assert_eq!(settings.level_builder.anchor_mode, AnchorMode::Config);
    }

    #[test]
    fn difficulty_speed_used_only_when_enabled() {
        let mut settings = GameSettings {
            difficulty: Difficulty::Easy,
            ..default()
        };
        assert_eq!(settings.base_ball_speed(), settings.ball_speed);
        settings.use_difficulty_speed = true;
        assert_eq!(settings.base_ball_speed(), settings.easy_ball_speed);
    }

    #[test]
    fn sanitize_clamps_ranges() {
        let settings = GameSettings {
            paddle_max_bounce_angle: 120.0,
            starting_lives: 9,
            max_lives: 5,
            sfx_volume: 2.0,
            ..default()
        }
        .sanitized();
        assert_eq!(settings.paddle_max_bounce_angle, 85.0);
        assert_eq!(settings.starting_lives, 5);
        assert_eq!(settings.sfx_volume, 1.0);
    }

    #[test]
    fn level_builder_overrides_parse() {
        let settings: GameSettings = ron::from_str(
            "(level_builder: (apply_to_level_builders: true, anchor_mode: AbovePaddle, spacing: 0.2))",
        )
        .unwrap();
        assert!(settings.level_builder.apply_to_level_builders);
        assert_eq!(settings.level_builder.anchor_mode, AnchorMode::AbovePaddle);
        assert_eq!(settings.level_builder.spacing, 0.2);
        assert!(settings.level_builder.group_by_rows);
    }
}
