//! Audio plugin - event-driven sound effects and level music.

use bevy::prelude::*;
use bevy_kira_audio::AudioApp;

use super::systems::*;
use crate::core::{GameState, PlayState};

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_audio_channel::<MusicChannel>()
            .add_systems(
                Update,
                (
                    play_brick_sounds,
                    play_ball_miss_sound,
                    play_level_complete_sound,
                    play_game_over_sound,
                    play_powerup_sound,
                    start_level_music,
                ),
            )
            .add_systems(OnEnter(GameState::MainMenu), stop_music)
            .add_systems(OnEnter(GameState::GameOver), stop_music)
            .add_systems(OnEnter(PlayState::Paused), pause_music)
            .add_systems(OnExit(PlayState::Paused), resume_music);
    }
}
