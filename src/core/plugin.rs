//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::prelude::*;

use super::events::*;
use super::sets::GameplaySet;
use super::states::*;
use crate::data::{BrickRegistry, LevelRegistry};

/// Marker for everything that belongs to the running level.
///
/// Ball, paddle, bricks, walls and powerups carry it and are despawned
/// together when the level is torn down.
#[derive(Component, Debug, Default)]
pub struct LevelEntity;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, MainMenu, InGame, etc.)
/// - Global events (BrickDestroyedEvent, BallMissedEvent, etc.)
/// - Pause handling and the level transition bridge
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()

            // Register global events
            .add_event::<BrickHitEvent>()
            .add_event::<BrickDestroyedEvent>()
            .add_event::<BallMissedEvent>()
            .add_event::<ScoreChangedEvent>()
            .add_event::<LivesChangedEvent>()
            .add_event::<LevelStartedEvent>()
            .add_event::<LevelCompletedEvent>()
            .add_event::<GameOverEvent>()
            .add_event::<PowerupCollectedEvent>()
            .add_event::<PowerupDropEvent>()
            .add_event::<RoundResetEvent>()

            .configure_sets(
                Update,
                (GameplaySet::Input, GameplaySet::Collisions, GameplaySet::Rules)
                    .chain()
                    .run_if(in_state(PlayState::Playing)),
            )

            // Leave Loading once the data registries exist
            .add_systems(Update, finish_loading.run_if(in_state(GameState::Loading)))

            // The transition state only exists to re-run OnExit/OnEnter(InGame)
            .add_systems(OnEnter(GameState::LevelTransition), return_to_game)

            // Pause/unpause with Escape key
            .add_systems(Update, handle_pause_input.run_if(in_state(GameState::InGame)))
            .add_systems(OnEnter(PlayState::Paused), pause_virtual_time)
            .add_systems(OnExit(PlayState::Paused), resume_virtual_time);
    }
}

/// Move to the main menu once the data plugin has inserted its registries.
fn finish_loading(
    bricks: Option<Res<BrickRegistry>>,
    levels: Option<Res<LevelRegistry>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if bricks.is_none() || levels.is_none() {
        return;
    }
    next_state.set(GameState::MainMenu);
}

fn return_to_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<PlayState>>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            PlayState::Playing => next_state.set(PlayState::Paused),
            PlayState::Paused => next_state.set(PlayState::Playing),
        }
    }
}

/// Physics, timers and controllers all read virtual time, so freezing it
/// freezes the whole level.
fn pause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

fn resume_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin, CorePlugin));
        app.init_resource::<ButtonInput<KeyCode>>();
        app
    }

    #[test]
    fn stays_loading_until_registries_exist() {
        let mut app = test_app();
        app.update();
        app.update();
        assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::Loading);

        app.insert_resource(BrickRegistry::default());
        app.insert_resource(LevelRegistry::default());
        app.update();
        app.update();
        assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::MainMenu);
    }

    #[test]
    fn level_transition_returns_to_game() {
        let mut app = test_app();
        app.update();
        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::LevelTransition);
        app.update();
        app.update();
        assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::InGame);
    }
}
