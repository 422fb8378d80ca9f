//! In-game HUD - score, lives and level display.
//!
//! The HUD never reads gameplay state after it is spawned; it only follows
//! the session events.

use bevy::prelude::*;

use crate::core::{GameState, LevelStartedEvent, LivesChangedEvent, ScoreChangedEvent};
use crate::game::GameSession;

const HUD_TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.95);

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct LivesText;

#[derive(Component)]
pub struct LevelText;

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn lives_label(lives: u32) -> String {
    format!("Lives: {}", lives)
}

pub fn level_label(level: u32, name: &str) -> String {
    if name.is_empty() {
        format!("Level {}", level)
    } else {
        format!("Level {} - {}", level, name)
    }
}

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(Update, (update_score_text, update_lives_text, update_level_text));
}

/// Spawn the HUD UI across the top of the screen.
pub fn spawn_hud(mut commands: Commands, session: Res<GameSession>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::axes(Val::Px(20.0), Val::Px(10.0)),
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_label(parent, score_label(session.score), ScoreText);
            spawn_label(parent, level_label(session.level, ""), LevelText);
            spawn_label(parent, lives_label(session.lives), LivesText);
        });
}

fn spawn_label<M: Component>(parent: &mut ChildBuilder, text: String, marker: M) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(HUD_TEXT_COLOR),
        marker,
    ));
}

fn update_score_text(
    mut score_events: EventReader<ScoreChangedEvent>,
    mut texts: Query<&mut Text, With<ScoreText>>,
) {
    let Some(event) = score_events.read().last() else {
        return;
    };
    for mut text in &mut texts {
        text.0 = score_label(event.score);
    }
}

fn update_lives_text(
    mut lives_events: EventReader<LivesChangedEvent>,
    mut texts: Query<&mut Text, With<LivesText>>,
) {
    let Some(event) = lives_events.read().last() else {
        return;
    };
    for mut text in &mut texts {
        text.0 = lives_label(event.lives);
    }
}

fn update_level_text(
    mut started_events: EventReader<LevelStartedEvent>,
    mut texts: Query<&mut Text, With<LevelText>>,
) {
    let Some(event) = started_events.read().last() else {
        return;
    };
    for mut text in &mut texts {
        text.0 = level_label(event.level, &event.name);
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn text_of<M: Component>(app: &mut App) -> String {
        let world = app.world_mut();
        world
            .query_filtered::<&Text, With<M>>()
            .single(world)
            .0
            .clone()
    }

    #[test]
    fn labels() {
        assert_eq!(score_label(1200), "Score: 1200");
        assert_eq!(lives_label(3), "Lives: 3");
        assert_eq!(level_label(2, "Diamonds"), "Level 2 - Diamonds");
        assert_eq!(level_label(2, ""), "Level 2");
    }

    #[test]
    fn hud_follows_events() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<GameSession>()
            .add_event::<ScoreChangedEvent>()
            .add_event::<LivesChangedEvent>()
            .add_event::<LevelStartedEvent>()
            .add_systems(Update, (update_score_text, update_lives_text, update_level_text));
        let _ = app.world_mut().run_system_once(spawn_hud);
        assert_eq!(text_of::<ScoreText>(&mut app), "Score: 0");

        app.world_mut().send_event(ScoreChangedEvent { score: 100 });
        app.world_mut().send_event(ScoreChangedEvent { score: 250 });
        app.world_mut().send_event(LivesChangedEvent { lives: 1 });
        app.world_mut().send_event(LevelStartedEvent {
            level: 3,
            name: "Fortress".into(),
        });
        app.update();

        assert_eq!(text_of::<ScoreText>(&mut app), "Score: 250");
        assert_eq!(text_of::<LivesText>(&mut app), "Lives: 1");
        assert_eq!(text_of::<LevelText>(&mut app), "Level 3 - Fortress");
    }
}
