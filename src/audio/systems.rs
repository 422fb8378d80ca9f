//! Plays sounds in response to gameplay events.
//!
//! Sound paths come from the data files. A sound that is not assigned is
//! simply not played.

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioChannel, AudioControl};

use crate::core::*;
use crate::data::{BrickRegistry, GameSettings, LevelRegistry, PowerupRegistry};
use crate::game::GameSession;

/// Channel for level music, kept apart from one-shot effects.
#[derive(Resource, Debug, Default)]
pub struct MusicChannel;

/// Volume for level music: master, music and the level's own volume.
pub fn music_volume(settings: &GameSettings, level_volume: f32) -> f64 {
    f64::from(settings.master_volume * settings.music_volume * level_volume.clamp(0.0, 1.0))
}

fn play_effect(audio: &Audio, asset_server: &AssetServer, path: Option<&str>, volume: f64) {
    let Some(path) = path else {
        return;
    };
    audio.play(asset_server.load(path.to_string())).with_volume(volume);
}

pub fn play_brick_sounds(
    mut hit_events: EventReader<BrickHitEvent>,
    mut destroyed_events: EventReader<BrickDestroyedEvent>,
    registry: Res<BrickRegistry>,
    settings: Res<GameSettings>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
) {
    let volume = settings.effects_volume();
    for event in hit_events.read() {
        let sound = registry.get(&event.brick_type).and_then(|d| d.hit_sound.as_deref());
        play_effect(&audio, &asset_server, sound, volume);
    }
    for event in destroyed_events.read() {
        let sound = registry
            .get(&event.brick_type)
            .and_then(|d| d.destroy_sound.as_deref());
        play_effect(&audio, &asset_server, sound, volume);
    }
}

pub fn play_ball_miss_sound(
    mut missed_events: EventReader<BallMissedEvent>,
    settings: Res<GameSettings>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
) {
    for _ in missed_events.read() {
        play_effect(
            &audio,
            &asset_server,
            settings.ball_miss_sound.as_deref(),
            settings.effects_volume(),
        );
    }
}

pub fn play_level_complete_sound(
    mut completed_events: EventReader<LevelCompletedEvent>,
    settings: Res<GameSettings>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
) {
    for _ in completed_events.read() {
        play_effect(
            &audio,
            &asset_server,
            settings.level_complete_sound.as_deref(),
            settings.effects_volume(),
        );
    }
}

pub fn play_game_over_sound(
    mut game_over_events: EventReader<GameOverEvent>,
    settings: Res<GameSettings>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
) {
    for _ in game_over_events.read() {
        play_effect(
            &audio,
            &asset_server,
            settings.game_over_sound.as_deref(),
            settings.effects_volume(),
        );
    }
}

pub fn play_powerup_sound(
    mut collected_events: EventReader<PowerupCollectedEvent>,
    registry: Res<PowerupRegistry>,
    settings: Res<GameSettings>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
) {
    for event in collected_events.read() {
        let sound = registry
            .get(&event.powerup)
            .and_then(|d| d.collect_sound.as_deref());
        play_effect(&audio, &asset_server, sound, settings.effects_volume());
    }
}

/// Start the level's music track, replacing whatever was playing.
pub fn start_level_music(
    mut started_events: EventReader<LevelStartedEvent>,
    session: Res<GameSession>,
    levels: Res<LevelRegistry>,
    settings: Res<GameSettings>,
    music: Res<AudioChannel<MusicChannel>>,
    asset_server: Res<AssetServer>,
) {
    if started_events.read().count() == 0 {
        return;
    }
    music.stop();
    let Some(level) = levels.get(session.level) else {
        return;
    };
    let Some(track) = level.music.as_deref() else {
        return;
    };
    debug!("Playing level music {}", track);
    music
        .play(asset_server.load(track.to_string()))
        .looped()
        .with_volume(music_volume(&settings, level.music_volume));
}

pub fn stop_music(music: Res<AudioChannel<MusicChannel>>) {
    music.stop();
}

pub fn pause_music(music: Res<AudioChannel<MusicChannel>>) {
    music.pause();
}

pub fn resume_music(music: Res<AudioChannel<MusicChannel>>) {
    music.resume();
}
