//! Arena walls and the reset zone below the paddle.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::ball::{ball_contact, Ball};
use crate::core::{BallMissedEvent, LevelEntity};
use crate::data::ArenaSettings;

const WALL_COLOR: Color = Color::srgb(0.3, 0.3, 0.35);

#[derive(Component, Debug)]
pub struct Wall;

/// Sensor below the paddle. A ball entering it is lost.
#[derive(Component, Debug)]
pub struct ResetZone;

/// Height of the paddle's center.
pub fn paddle_y(arena: &ArenaSettings) -> f32 {
    -arena.height * 0.5 + arena.paddle_elevation
}

/// Walls on the left, right and top, and the reset zone along the bottom.
pub fn spawn_arena(commands: &mut Commands, arena: &ArenaSettings) {
    let (half_w, half_h, t) = (arena.width * 0.5, arena.height * 0.5, arena.wall_thickness);

    let walls = [
        ("Left Wall", Vec2::new(-half_w - t * 0.5, 0.0), Vec2::new(t * 0.5, half_h + t)),
        ("Right Wall", Vec2::new(half_w + t * 0.5, 0.0), Vec2::new(t * 0.5, half_h + t)),
        ("Top Wall", Vec2::new(0.0, half_h + t * 0.5), Vec2::new(half_w + t, t * 0.5)),
    ];
    for (name, center, half_size) in walls {
        commands.spawn((
            Name::new(name),
            Wall,
            LevelEntity,
            Sprite {
                color: WALL_COLOR,
                custom_size: Some(half_size * 2.0),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(half_size.x, half_size.y),
            Friction::coefficient(0.0),
        ));
    }

    commands.spawn((
        Name::new("Reset Zone"),
        ResetZone,
        LevelEntity,
        Transform::from_xyz(0.0, -half_h - t, 0.0),
        Collider::cuboid(half_w + t, t),
        Sensor,
    ));
}

/// Report a ball that fell into the reset zone.
pub fn detect_ball_miss(
    mut collisions: EventReader<CollisionEvent>,
    balls: Query<&Transform, With<Ball>>,
    zones: Query<(), With<ResetZone>>,
    mut missed_events: EventWriter<BallMissedEvent>,
) {
    for event in collisions.read() {
        let Some((ball, other)) = ball_contact(event, |e| balls.contains(e)) else {
            continue;
        };
        if !zones.contains(other) {
            continue;
        }
        let position = balls
            .get(ball)
            .map(|t| t.translation.truncate())
            .unwrap_or_default();
        missed_events.send(BallMissedEvent { position });
    }
}
