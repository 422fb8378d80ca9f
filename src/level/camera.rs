//! Orthographic camera that always shows the whole arena.

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::window::PrimaryWindow;

use crate::data::{ArenaSettings, GameSettings};

/// The single 2D camera, shared by the level and the menus.
#[derive(Component, Debug, Default)]
pub struct GameCamera;

/// Half extents of the arena including its walls.
pub fn arena_half_extents(arena: &ArenaSettings) -> Vec2 {
    Vec2::new(
        arena.width * 0.5 + arena.wall_thickness,
        arena.height * 0.5 + arena.wall_thickness,
    )
}

/// Smallest half height that shows `half_extents` at the given aspect
/// ratio, plus padding.
pub fn fit_half_height(half_extents: Vec2, aspect: f32, padding: f32) -> f32 {
    let aspect = if aspect > 0.0 { aspect } else { 1.0 };
    half_extents.y.max(half_extents.x / aspect) + padding
}

/// World-space rectangle visible through a camera at the origin.
pub fn viewport_bounds(half_height: f32, aspect: f32) -> Rect {
    Rect::from_center_half_size(Vec2::ZERO, Vec2::new(half_height * aspect, half_height))
}

/// Visible world rectangle for the current window, if there is a window
/// and a game camera.
pub fn current_viewport(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(), With<GameCamera>>,
    settings: &GameSettings,
) -> Option<Rect> {
    let window = windows.get_single().ok()?;
    if cameras.is_empty() || window.height() <= 0.0 {
        return None;
    }
    let aspect = window.width() / window.height();
    let half_height = fit_half_height(
        arena_half_extents(&settings.arena),
        aspect,
        settings.arena.camera_padding,
    );
    Some(viewport_bounds(half_height, aspect))
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Game Camera"),
        Camera2d,
        GameCamera,
        OrthographicProjection::default_2d(),
    ));
}

/// Refit the camera's vertical size to the arena and the window aspect.
pub fn fit_camera_to_arena(
    windows: Query<&Window, With<PrimaryWindow>>,
    settings: Option<Res<GameSettings>>,
    mut cameras: Query<&mut OrthographicProjection, With<GameCamera>>,
) {
    let (Some(settings), Ok(window)) = (settings, windows.get_single()) else {
        return;
    };
    if window.height() <= 0.0 {
        return;
    }
    let aspect = window.width() / window.height();
    let half_height = fit_half_height(
        arena_half_extents(&settings.arena),
        aspect,
        settings.arena.camera_padding,
    );
    let scaling_mode = ScalingMode::FixedVertical {
        viewport_height: half_height * 2.0,
    };

    for mut projection in &mut cameras {
        let unchanged = matches!(
            projection.scaling_mode,
            ScalingMode::FixedVertical { viewport_height } if viewport_height == half_height * 2.0
        );
        if !unchanged {
            projection.scaling_mode = scaling_mode;
        }
    }
}
