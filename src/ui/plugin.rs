//! UI plugin - menus, HUD, and interface elements.

use bevy::prelude::*;

use super::hud;
use crate::core::{GameState, PlayState};
use crate::game::GameSession;

const BUTTON_COLOR: Color = Color::srgb(0.15, 0.15, 0.2);
const BUTTON_HOVER_COLOR: Color = Color::srgb(0.25, 0.25, 0.3);
const BUTTON_PRESSED_COLOR: Color = Color::srgb(0.3, 0.3, 0.35);

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app
            // Main menu
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), despawn_all::<MainMenuUi>)

            // Pause menu
            .add_systems(OnEnter(PlayState::Paused), setup_pause_menu)
            .add_systems(OnExit(PlayState::Paused), despawn_all::<PauseMenuUi>)

            // Game over
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(OnExit(GameState::GameOver), despawn_all::<GameOverUi>)

            .add_systems(Update, (menu_button_input, menu_keyboard_input));
    }
}

/// Marker for main menu UI entities.
#[derive(Component)]
struct MainMenuUi;

/// Marker for pause menu UI entities.
#[derive(Component)]
struct PauseMenuUi;

/// Marker for game over UI entities.
#[derive(Component)]
struct GameOverUi;

/// Marker for menu buttons.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    NewGame,
    Quit,
    Resume,
    MainMenu,
    Retry,
}

/// What pressing a menu button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Game(GameState),
    Play(PlayState),
    Exit,
}

impl MenuButton {
    pub fn action(self) -> MenuAction {
        match self {
            MenuButton::NewGame | MenuButton::Retry => MenuAction::Game(GameState::InGame),
            MenuButton::Resume => MenuAction::Play(PlayState::Playing),
            MenuButton::MainMenu => MenuAction::Game(GameState::MainMenu),
            MenuButton::Quit => MenuAction::Exit,
        }
    }
}

/// Set up the main menu.
fn setup_main_menu(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.05, 0.05, 0.08)),
            MainMenuUi,
        ))
        .with_children(|parent| {
            spawn_title(parent, "BRICK BREAKER", 80.0, Color::srgb(0.3, 0.8, 1.0), 30.0);
            spawn_title(
                parent,
                "A/D or arrows to move, Space to launch, Esc to pause",
                20.0,
                Color::srgb(0.5, 0.5, 0.55),
                50.0,
            );

            spawn_menu_button(parent, "New Game", MenuButton::NewGame);
            spawn_menu_button(parent, "Quit", MenuButton::Quit);
        });
}

fn spawn_title(parent: &mut ChildBuilder, text: &str, size: f32, color: Color, margin: f32) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(margin)),
            ..default()
        },
    ));
}

/// Helper to spawn a menu button.
fn spawn_menu_button(parent: &mut ChildBuilder, text: &str, button: MenuButton) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(200.0),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_COLOR),
            button,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}

/// Set up the pause menu.
fn setup_pause_menu(mut commands: Commands) {
    // Semi-transparent overlay
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            PauseMenuUi,
        ))
        .with_children(|parent| {
            spawn_title(parent, "PAUSED", 48.0, Color::srgb(0.8, 0.8, 0.85), 40.0);
            spawn_menu_button(parent, "Resume", MenuButton::Resume);
            spawn_menu_button(parent, "Main Menu", MenuButton::MainMenu);
        });
}

/// Set up the game over screen.
fn setup_game_over(mut commands: Commands, session: Res<GameSession>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.0, 0.0, 0.9)),
            GameOverUi,
        ))
        .with_children(|parent| {
            spawn_title(parent, "GAME OVER", 72.0, Color::srgb(0.8, 0.2, 0.2), 20.0);
            spawn_title(
                parent,
                &format!("Final score: {}", session.score),
                32.0,
                Color::srgb(0.8, 0.8, 0.85),
                50.0,
            );
            spawn_menu_button(parent, "Retry", MenuButton::Retry);
            spawn_menu_button(parent, "Main Menu", MenuButton::MainMenu);
        });
}

fn apply_action(
    action: MenuAction,
    game_state: &mut NextState<GameState>,
    play_state: &mut NextState<PlayState>,
    exit: &mut EventWriter<AppExit>,
) {
    match action {
        MenuAction::Game(state) => game_state.set(state),
        MenuAction::Play(state) => play_state.set(state),
        MenuAction::Exit => {
            exit.send(AppExit::Success);
        }
    }
}

/// Handle button interactions for whichever menu is showing.
fn menu_button_input(
    mut interaction_query: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut game_state: ResMut<NextState<GameState>>,
    mut play_state: ResMut<NextState<PlayState>>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = BUTTON_PRESSED_COLOR.into();
                apply_action(button.action(), &mut game_state, &mut play_state, &mut exit);
            }
            Interaction::Hovered => {
                *bg_color = BUTTON_HOVER_COLOR.into();
            }
            Interaction::None => {
                *bg_color = BUTTON_COLOR.into();
            }
        }
    }
}

/// Enter starts a game from the title screen or retries after a game over.
fn menu_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::Enter) {
        return;
    }
    if matches!(state.get(), GameState::MainMenu | GameState::GameOver) {
        next_state.set(GameState::InGame);
    }
}

fn despawn_all<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_map_to_actions() {
        assert_eq!(MenuButton::NewGame.action(), MenuAction::Game(GameState::InGame));
        assert_eq!(MenuButton::Retry.action(), MenuAction::Game(GameState::InGame));
        assert_eq!(MenuButton::Resume.action(), MenuAction::Play(PlayState::Playing));
        assert_eq!(MenuButton::MainMenu.action(), MenuAction::Game(GameState::MainMenu));
        assert_eq!(MenuButton::Quit.action(), MenuAction::Exit);
    }
}
