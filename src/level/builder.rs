//! Builds a level: arena, paddle, ball and the brick grid.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::arena::{paddle_y, spawn_arena};
use super::camera::{current_viewport, GameCamera};
use super::placement::{anchored_origin, clamp_to_viewport, resolve_placement};
use crate::ball::{spawn_ball, BallSpawnParams};
use crate::bricks::{spawn_brick, Brick};
use crate::core::{LevelEntity, LevelStartedEvent};
use crate::data::{BrickRegistry, GameSettings, LevelConfiguration, LevelRegistry};
use crate::game::GameSession;
use crate::paddle::{spawn_paddle, Paddle};

/// Height of the ball's spawn point above the paddle.
const BALL_START_HEIGHT: f32 = 2.0;

/// Parent of one row of bricks when rows are grouped.
#[derive(Component, Debug)]
pub struct BrickRow(pub usize);

/// What the brick grid is built from.
pub struct BrickLayout<'a> {
    pub config: &'a LevelConfiguration,
    pub registry: &'a BrickRegistry,
    pub settings: &'a GameSettings,
    /// Visible world rectangle, if a camera exists
    pub viewport: Option<Rect>,
    /// Paddle center height, if a paddle exists
    pub paddle_y: Option<f32>,
}

/// Spawn one brick per non-empty cell. Returns the number spawned.
pub fn spawn_bricks(commands: &mut Commands, layout: &BrickLayout, asset_server: &AssetServer) -> usize {
    let config = layout.config;
    let overrides = &layout.settings.level_builder;

    let (placement, mode) = resolve_placement(config, overrides);
    let size = placement.grid_size(config.rows, config.columns);

    let mut origin = anchored_origin(mode, &placement, size, layout.viewport, layout.paddle_y, overrides)
        .unwrap_or_else(|| {
            warn!(
                "Anchor mode {:?} needs a camera and paddle; using the configured start position",
                mode
            );
            placement.start
        });
    if overrides.apply_to_level_builders && overrides.clamp_to_camera_viewport {
        match layout.viewport {
            Some(viewport) => {
                origin = clamp_to_viewport(
                    origin,
                    &placement,
                    size,
                    viewport,
                    overrides.camera_side_margin,
                    overrides.camera_top_margin,
                );
            }
            None => warn!("No camera viewport to clamp the brick grid to"),
        }
    }
    if overrides.debug_placement {
        info!(
            "Placement: mode {:?}, origin {:?}, cell {:?}, spacing {}, grid size {:?}",
            mode, origin, placement.cell, placement.spacing, size
        );
    }

    info!(
        "Building level '{}': {} rows x {} columns, {} cells, {} bricks",
        config.name,
        config.rows,
        config.columns,
        config.cells.len(),
        config.brick_count()
    );

    let mut spawned = 0;
    for row in 0..config.rows {
        let row_entity = overrides.group_by_rows.then(|| {
            commands
                .spawn((
                    Name::new(format!("Row {}", row)),
                    BrickRow(row),
                    LevelEntity,
                    Transform::default(),
                    Visibility::default(),
                ))
                .id()
        });

        for column in 0..config.columns {
            let Some(brick_type) = config.cell(row, column) else {
                continue;
            };
            let Some(data) = layout.registry.get(brick_type) else {
                warn!(
                    "Skipping cell ({}, {}): unknown brick type '{}'",
                    row, column, brick_type
                );
                continue;
            };
            let position = placement.cell_position(origin, row, column);
            let brick = spawn_brick(
                commands,
                brick_type,
                data,
                position,
                placement.cell,
                layout.settings,
                asset_server,
            );
            if let Some(row_entity) = row_entity {
                commands.entity(row_entity).add_child(brick);
            }
            spawned += 1;
        }
    }

    info!("Spawned {} bricks", spawned);
    spawned
}

/// Build the current level when entering `InGame`.
#[allow(clippy::too_many_arguments)]
pub fn build_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    levels: Res<LevelRegistry>,
    bricks: Res<BrickRegistry>,
    settings: Res<GameSettings>,
    session: Res<GameSession>,
    asset_server: Res<AssetServer>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(), With<GameCamera>>,
    mut clear_color: ResMut<ClearColor>,
    mut started_events: EventWriter<LevelStartedEvent>,
) {
    let Some(config) = levels.get(session.level) else {
        error!("Level {} not found in registry!", session.level);
        return;
    };

    info!("Building level {}: {}", session.level, config.name);
    clear_color.0 = config.background_color;

    spawn_arena(&mut commands, &settings.arena);

    let paddle_y = paddle_y(&settings.arena);
    let paddle = Paddle::new(
        config.paddle_speed.unwrap_or(settings.paddle_move_speed),
        settings.paddle_max_bounce_angle,
        Vec2::new(settings.paddle_size.0, settings.paddle_size.1),
    );
    spawn_paddle(&mut commands, paddle, Vec2::new(0.0, paddle_y));

    spawn_ball(
        &mut commands,
        &mut meshes,
        &mut materials,
        BallSpawnParams {
            position: Vec2::new(0.0, paddle_y + BALL_START_HEIGHT),
            radius: settings.ball_radius,
            speed: config.ball_speed.unwrap_or_else(|| settings.base_ball_speed()),
            launch_delay: settings.launch_delay,
        },
    );

    let layout = BrickLayout {
        config,
        registry: &bricks,
        settings: &settings,
        viewport: current_viewport(&windows, &cameras, &settings),
        paddle_y: Some(paddle_y),
    };
    spawn_bricks(&mut commands, &layout, &asset_server);

    started_events.send(LevelStartedEvent {
        level: session.level,
        name: config.name.clone(),
    });
}

/// F6: clear the brick grid and build it again from the level data.
#[allow(clippy::too_many_arguments)]
pub fn rebuild_bricks(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    rows: Query<Entity, With<BrickRow>>,
    loose_bricks: Query<Entity, (With<Brick>, Without<Parent>)>,
    paddles: Query<&Transform, With<Paddle>>,
    levels: Res<LevelRegistry>,
    bricks: Res<BrickRegistry>,
    settings: Res<GameSettings>,
    session: Res<GameSession>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(), With<GameCamera>>,
    asset_server: Res<AssetServer>,
) {
    if !keyboard.just_pressed(KeyCode::F6) {
        return;
    }
    let Some(config) = levels.get(session.level) else {
        error!("Level {} not found in registry!", session.level);
        return;
    };

    let mut cleared = 0;
    for entity in rows.iter().chain(loose_bricks.iter()) {
        commands.entity(entity).despawn_recursive();
        cleared += 1;
    }
    debug!("Cleared {} brick grid entities", cleared);

    let layout = BrickLayout {
        config,
        registry: &bricks,
        settings: &settings,
        viewport: current_viewport(&windows, &cameras, &settings),
        paddle_y: paddles.get_single().ok().map(|t| t.translation.y),
    };
    spawn_bricks(&mut commands, &layout, &asset_server);
}

/// Despawn everything that belongs to the level.
pub fn cleanup_level(
    mut commands: Commands,
    level_query: Query<Entity, (With<LevelEntity>, Without<Parent>)>,
) {
    for entity in level_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
