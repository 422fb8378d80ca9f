//! Brick spawning, hit handling and the refresh tool.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use super::visuals::{apply_visual, brick_visual};
use crate::ball::{ball_contact, Ball};
use crate::core::{BrickDestroyedEvent, BrickHitEvent, LevelEntity, PowerupDropEvent};
use crate::data::{BrickData, BrickRegistry, GameSettings};

/// Spawn a brick of type `brick_type` with its center at `position`.
pub fn spawn_brick(
    commands: &mut Commands,
    brick_type: &str,
    data: &BrickData,
    position: Vec2,
    size: Vec2,
    settings: &GameSettings,
    asset_server: &AssetServer,
) -> Entity {
    let brick = Brick::from_data(brick_type, data);
    let mut sprite = Sprite {
        custom_size: Some(size),
        ..default()
    };
    apply_visual(
        &mut sprite,
        brick_visual(&brick, data, settings.visual_profile.as_ref()),
        asset_server,
    );

    commands
        .spawn((
            Name::new(format!("Brick ({})", brick_type)),
            brick,
            sprite,
            Transform::from_translation(position.extend(0.0)),
            LevelEntity,
            RigidBody::Fixed,
            Collider::cuboid(size.x * 0.5, size.y * 0.5),
            Friction::coefficient(0.0),
        ))
        .id()
}

/// Put a brick back in play at full strength.
#[allow(clippy::too_many_arguments)]
pub fn reset_brick(
    commands: &mut Commands,
    entity: Entity,
    brick: &mut Brick,
    data: &BrickData,
    sprite: &mut Sprite,
    visibility: &mut Visibility,
    settings: &GameSettings,
    asset_server: &AssetServer,
) {
    brick.reset(data);
    *visibility = Visibility::Inherited;
    apply_visual(
        sprite,
        brick_visual(brick, data, settings.visual_profile.as_ref()),
        asset_server,
    );
    commands
        .entity(entity)
        .remove::<(Destroyed, ColliderDisabled)>();
}

/// Damage bricks the ball touched and announce hits and destructions.
#[allow(clippy::too_many_arguments)]
pub fn handle_brick_hits(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    balls: Query<(), With<Ball>>,
    mut bricks: Query<
        (&mut Brick, &GlobalTransform, &mut Sprite, &mut Visibility),
        Without<Destroyed>,
    >,
    registry: Res<BrickRegistry>,
    settings: Res<GameSettings>,
    asset_server: Res<AssetServer>,
    mut hit_events: EventWriter<BrickHitEvent>,
    mut destroyed_events: EventWriter<BrickDestroyedEvent>,
    mut drop_events: EventWriter<PowerupDropEvent>,
) {
    for event in collisions.read() {
        let Some((_, other)) = ball_contact(event, |e| balls.contains(e)) else {
            continue;
        };
        let Ok((mut brick, transform, mut sprite, mut visibility)) = bricks.get_mut(other) else {
            continue;
        };
        let Some(data) = registry.get(&brick.brick_type) else {
            warn!("Brick type '{}' is no longer registered", brick.brick_type);
            continue;
        };
        let position = transform.translation().truncate();

        match brick.hit() {
            HitOutcome::Ignored => {}
            HitOutcome::Damaged { remaining } => {
                apply_visual(
                    &mut sprite,
                    brick_visual(&brick, data, settings.visual_profile.as_ref()),
                    &asset_server,
                );
                hit_events.send(BrickHitEvent {
                    brick: other,
                    brick_type: brick.brick_type.clone(),
                    remaining_health: remaining,
                    position,
                });
            }
            HitOutcome::Destroyed => {
                hit_events.send(BrickHitEvent {
                    brick: other,
                    brick_type: brick.brick_type.clone(),
                    remaining_health: 0,
                    position,
                });

                if let Some(powerup) = data.powerup_drop() {
                    if rand::random::<f32>() <= data.powerup_drop_chance {
                        drop_events.send(PowerupDropEvent {
                            powerup: powerup.to_string(),
                            position,
                        });
                    }
                }

                *visibility = Visibility::Hidden;
                commands.entity(other).insert((Destroyed, ColliderDisabled));
                destroyed_events.send(BrickDestroyedEvent {
                    brick: other,
                    brick_type: brick.brick_type.clone(),
                    points: brick.points,
                    position,
                });
            }
        }
    }
}

/// F5: restore every brick in the level from its data.
pub fn refresh_all_bricks(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut bricks: Query<(Entity, &mut Brick, &mut Sprite, &mut Visibility)>,
    registry: Res<BrickRegistry>,
    settings: Res<GameSettings>,
    asset_server: Res<AssetServer>,
) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }
    let mut refreshed = 0;
    for (entity, mut brick, mut sprite, mut visibility) in &mut bricks {
        let Some(data) = registry.get(&brick.brick_type) else {
            warn!("Cannot refresh brick: unknown type '{}'", brick.brick_type);
            continue;
        };
        reset_brick(
            &mut commands,
            entity,
            &mut brick,
            data,
            &mut sprite,
            &mut visibility,
            &settings,
            &asset_server,
        );
        refreshed += 1;
    }
    info!("Refreshed {} bricks", refreshed);
}
