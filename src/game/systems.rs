//! Game rules: lives, score, level progression.

use bevy::prelude::*;

use super::session::{level_cleared, GameSession};
use crate::bricks::Brick;
use crate::core::*;
use crate::data::{GameSettings, LevelRegistry, PowerupKind, PowerupRegistry};

/// Reset score, lives and level before a fresh game.
pub fn start_new_game(
    mut session: ResMut<GameSession>,
    settings: Res<GameSettings>,
    mut score_events: EventWriter<ScoreChangedEvent>,
    mut lives_events: EventWriter<LivesChangedEvent>,
) {
    *session = GameSession::new(&settings);
    info!("New game: {} lives", session.lives);
    score_events.send(ScoreChangedEvent { score: session.score });
    lives_events.send(LivesChangedEvent { lives: session.lives });
}

/// Take a life for a lost ball; reset the round or end the game.
pub fn handle_ball_missed(
    mut missed_events: EventReader<BallMissedEvent>,
    mut session: ResMut<GameSession>,
    mut lives_events: EventWriter<LivesChangedEvent>,
    mut reset_events: EventWriter<RoundResetEvent>,
    mut game_over_events: EventWriter<GameOverEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    // Several contacts in one step are still one lost ball
    if missed_events.read().count() == 0 {
        return;
    }

    let out_of_lives = session.lose_life();
    lives_events.send(LivesChangedEvent { lives: session.lives });

    if out_of_lives {
        info!("Game over with {} points", session.score);
        game_over_events.send(GameOverEvent {
            final_score: session.score,
        });
        next_state.set(GameState::GameOver);
    } else {
        reset_events.send(RoundResetEvent);
    }
}

/// Score destroyed bricks and advance when the level is cleared.
///
/// The clear check also runs once per level start, so a level built with
/// no breakable bricks moves on instead of stalling.
#[allow(clippy::too_many_arguments)]
pub fn handle_brick_destroyed(
    mut destroyed_events: EventReader<BrickDestroyedEvent>,
    mut started_events: EventReader<LevelStartedEvent>,
    bricks: Query<&Brick>,
    mut session: ResMut<GameSession>,
    settings: Res<GameSettings>,
    levels: Res<LevelRegistry>,
    mut score_events: EventWriter<ScoreChangedEvent>,
    mut lives_events: EventWriter<LivesChangedEvent>,
    mut completed_events: EventWriter<LevelCompletedEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let mut any_destroyed = false;
    for event in destroyed_events.read() {
        any_destroyed = true;
        if session.add_points(event.points, &settings) {
            info!("Bonus life! {} lives", session.lives);
            lives_events.send(LivesChangedEvent { lives: session.lives });
        }
        score_events.send(ScoreChangedEvent { score: session.score });
    }

    let level_started = started_events.read().count() > 0;
    if !(any_destroyed || level_started) || !level_cleared(bricks.iter()) {
        return;
    }
    if level_started && !any_destroyed {
        warn!("Level {} has no breakable bricks", session.level);
    }

    let finished = session.level;
    completed_events.send(LevelCompletedEvent { level: finished });
    session.level = levels.next_level(finished);
    info!("Level {} complete, loading level {}", finished, session.level);
    next_state.set(GameState::LevelTransition);
}

/// Rewards from instant powerups: extra lives and bonus points.
pub fn apply_powerup_rewards(
    mut collected_events: EventReader<PowerupCollectedEvent>,
    powerups: Res<PowerupRegistry>,
    settings: Res<GameSettings>,
    mut session: ResMut<GameSession>,
    mut score_events: EventWriter<ScoreChangedEvent>,
    mut lives_events: EventWriter<LivesChangedEvent>,
) {
    for event in collected_events.read() {
        let Some(data) = powerups.get(&event.powerup) else {
            continue;
        };
        match event.kind {
            PowerupKind::ExtraLife => {
                if session.gain_lives(data.extra_lives, &settings) {
                    lives_events.send(LivesChangedEvent { lives: session.lives });
                }
            }
            PowerupKind::Points => {
                let bonus_life = session.add_points(data.bonus_points, &settings);
                score_events.send(ScoreChangedEvent { score: session.score });
                if bonus_life {
                    lives_events.send(LivesChangedEvent { lives: session.lives });
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BrickData, LevelConfiguration, LevelConfigurationRaw, PowerupData};
    use bevy::ecs::system::RunSystemOnce;
    use bevy::state::app::StatesPlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin, CorePlugin))
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(GameSettings {
                starting_lives: 2,
                bonus_life_score: 0,
                ..default()
            })
            .init_resource::<GameSession>()
            .init_resource::<PowerupRegistry>()
            .insert_resource(LevelRegistry {
                levels: vec![level("one"), level("two")],
            })
            .add_systems(
                Update,
                (handle_ball_missed, handle_brick_destroyed, apply_powerup_rewards),
            );
        let _ = app.world_mut().run_system_once(start_new_game);
        app
    }

    fn level(id: &str) -> LevelConfiguration {
        let raw: LevelConfigurationRaw =
            ron::from_str("(name: \"L\", layout: Pattern(Empty))").unwrap();
        LevelConfiguration::from_raw(id, raw).unwrap()
    }

    fn state(app: &App) -> GameState {
        *app.world().resource::<State<GameState>>().get()
    }

    fn brick(app: &mut App, health: u32) -> Entity {
        let data = BrickData {
            max_health: Some(health.max(1)),
            ..default()
        };
        let mut brick = Brick::from_data("basic", &data);
        brick.health = health;
        app.world_mut().spawn(brick).id()
    }

    fn destroy(app: &mut App, entity: Entity, points: u32) {
        app.world_mut().get_mut::<Brick>(entity).unwrap().health = 0;
        app.world_mut().send_event(BrickDestroyedEvent {
            brick: entity,
            brick_type: "basic".into(),
            points,
            position: Vec2::ZERO,
        });
    }

    #[test]
    fn missed_ball_costs_a_life_then_ends_game() {
        let mut app = test_app();
        app.world_mut().send_event(BallMissedEvent { position: Vec2::ZERO });
        app.update();
        assert_eq!(app.world().resource::<GameSession>().lives, 1);

        app.world_mut().send_event(BallMissedEvent { position: Vec2::ZERO });
        app.update();
        app.update();
        assert_eq!(app.world().resource::<GameSession>().lives, 0);
        assert_eq!(state(&app), GameState::GameOver);
    }

    #[test]
    fn points_awarded_on_destruction() {
        let mut app = test_app();
        let a = brick(&mut app, 1);
        brick(&mut app, 2);
        destroy(&mut app, a, 150);
        app.update();

        let session = app.world().resource::<GameSession>();
        assert_eq!(session.score, 150);
        assert_eq!(session.level, 1);
    }

    #[test]
    fn clearing_breakables_advances_level() {
        let mut app = test_app();
        let a = brick(&mut app, 1);
        app.world_mut().spawn(Brick::from_data(
            "steel",
            &BrickData {
                unbreakable: true,
                ..default()
            },
        ));
        destroy(&mut app, a, 100);
        app.update();
        assert_eq!(app.world().resource::<GameSession>().level, 2);

        app.update();
        assert_eq!(state(&app), GameState::LevelTransition);
    }

    #[test]
    fn level_without_breakables_is_skipped() {
        let mut app = test_app();
        app.world_mut().spawn(Brick::from_data(
            "steel",
            &BrickData {
                unbreakable: true,
                ..default()
            },
        ));
        for _ in 0..3 {
            app.update();
        }
        assert_eq!(app.world().resource::<GameSession>().level, 1);

        app.world_mut().send_event(LevelStartedEvent {
            level: 1,
            name: "Walls".into(),
        });
        app.update();
        assert_eq!(app.world().resource::<GameSession>().level, 2);
        app.update();
        assert_eq!(state(&app), GameState::LevelTransition);
    }

    #[test]
    fn level_start_with_breakables_keeps_playing() {
        let mut app = test_app();
        brick(&mut app, 3);
        app.world_mut().send_event(LevelStartedEvent {
            level: 1,
            name: "One".into(),
        });
        app.update();
        app.update();
        assert_eq!(app.world().resource::<GameSession>().level, 1);
        assert_eq!(state(&app), GameState::Loading);
    }

    #[test]
    fn last_level_wraps_to_first() {
        let mut app = test_app();
        app.world_mut().resource_mut::<GameSession>().level = 2;
        let a = brick(&mut app, 1);
        destroy(&mut app, a, 100);
        app.update();
        assert_eq!(app.world().resource::<GameSession>().level, 1);
    }

    #[test]
    fn extra_life_powerup_capped_at_max() {
        let mut app = test_app();
        let mut registry = PowerupRegistry::default();
        registry.types.insert(
            "life".into(),
            PowerupData {
                name: "Extra Life".into(),
                kind: PowerupKind::ExtraLife,
                color: (1.0, 0.2, 0.2),
                fall_speed: 2.0,
                duration: 0.0,
                effect_strength: 1.0,
                bonus_points: 0,
                extra_lives: 10,
                collect_sound: None,
            },
        );
        app.insert_resource(registry);
        app.world_mut().send_event(PowerupCollectedEvent {
            powerup: "life".into(),
            kind: PowerupKind::ExtraLife,
            position: Vec2::ZERO,
        });
        app.update();
        let max = app.world().resource::<GameSettings>().max_lives;
        assert_eq!(app.world().resource::<GameSession>().lives, max);
    }
}
