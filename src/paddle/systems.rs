//! Paddle spawning, movement and ball deflection.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use crate::ball::{ball_contact, Ball};
use crate::core::{LevelEntity, RoundResetEvent};

/// Spawn the paddle at `position` as a kinematic character.
pub fn spawn_paddle(commands: &mut Commands, paddle: Paddle, position: Vec2) -> Entity {
    let size = Vec2::new(paddle.width(), paddle.size.y);
    commands
        .spawn((
            Name::new("Paddle"),
            paddle,
            LevelEntity,
            Sprite {
                color: PADDLE_COLOR,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(1.0)),
            RigidBody::KinematicPositionBased,
            Collider::cuboid(size.x * 0.5, size.y * 0.5),
            Friction::coefficient(0.0),
            KinematicCharacterController {
                offset: CharacterLength::Absolute(0.01),
                slide: true,
                autostep: None,
                snap_to_ground: None,
                // Only walls stop the paddle; the ball and pickups pass through
                filter_flags: QueryFilterFlags::EXCLUDE_DYNAMIC | QueryFilterFlags::EXCLUDE_SENSORS,
                ..default()
            },
        ))
        .id()
}

/// Move the paddle along X from keyboard input.
pub fn paddle_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut paddles: Query<(&Paddle, &mut KinematicCharacterController)>,
) {
    let axis = input_axis(&keyboard);
    for (paddle, mut controller) in &mut paddles {
        if axis == 0.0 {
            controller.translation = None;
            continue;
        }
        let dx = axis * paddle.current_speed() * time.delta_secs();
        controller.translation = Some(Vec2::new(dx, 0.0));
    }
}

/// Redirect the ball by where it struck the paddle.
pub fn paddle_bounce(
    mut collisions: EventReader<CollisionEvent>,
    paddles: Query<(&Paddle, &Transform)>,
    mut balls: Query<(&Transform, &mut Velocity), With<Ball>>,
) {
    for event in collisions.read() {
        let Some((ball, other)) = ball_contact(event, |e| balls.contains(e)) else {
            continue;
        };
        let Ok((paddle, paddle_transform)) = paddles.get(other) else {
            continue;
        };
        let Ok((ball_transform, mut velocity)) = balls.get_mut(ball) else {
            continue;
        };
        let offset = paddle_transform.translation.x - ball_transform.translation.x;
        velocity.linvel = deflect(
            velocity.linvel,
            offset,
            paddle.half_width(),
            paddle.max_bounce_angle,
        );
    }
}

/// Recenter the paddle horizontally.
pub fn reset_paddle(
    mut reset_events: EventReader<RoundResetEvent>,
    mut paddles: Query<(&mut Transform, &mut KinematicCharacterController), With<Paddle>>,
) {
    if reset_events.read().count() == 0 {
        return;
    }
    let Ok((mut transform, mut controller)) = paddles.get_single_mut() else {
        error!("Paddle is missing; cannot reset paddle.");
        return;
    };
    transform.translation.x = 0.0;
    controller.translation = None;
}

/// Keep the paddle's collider, sprite and tint in line with its multipliers.
pub fn apply_paddle_size(
    mut commands: Commands,
    mut paddles: Query<(Entity, &Paddle, &mut Sprite), Changed<Paddle>>,
) {
    for (entity, paddle, mut sprite) in &mut paddles {
        let size = Vec2::new(paddle.width(), paddle.size.y);
        sprite.custom_size = Some(size);
        sprite.color = if paddle.is_boosted() {
            PADDLE_POWERUP_COLOR
        } else {
            PADDLE_COLOR
        };
        commands
            .entity(entity)
            .insert(Collider::cuboid(size.x * 0.5, size.y * 0.5));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use bevy_rapier2d::rapier::geometry::CollisionEventFlags;
    use std::time::Duration;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<CollisionEvent>()
            .add_event::<RoundResetEvent>()
            .add_systems(Update, (paddle_bounce, reset_paddle, apply_paddle_size));
        app
    }

    fn spawn_pair(app: &mut App, ball_x: f32) -> (Entity, Entity) {
        let paddle = app
            .world_mut()
            .spawn((
                Paddle::new(10.0, 60.0, Vec2::new(2.5, 0.4)),
                Transform::from_xyz(0.0, -4.0, 0.0),
                KinematicCharacterController::default(),
                Sprite::default(),
            ))
            .id();
        let ball = app
            .world_mut()
            .spawn((
                Ball::new(6.0),
                Transform::from_xyz(ball_x, -3.7, 0.0),
                Velocity::linear(Vec2::new(0.0, 6.0)),
            ))
            .id();
        (paddle, ball)
    }

    #[test]
    fn edge_hit_bends_ball_outward() {
        let mut app = test_app();
        let (paddle, ball) = spawn_pair(&mut app, 1.0);
        app.world_mut()
            .send_event(CollisionEvent::Started(ball, paddle, CollisionEventFlags::empty()));
        app.update();

        let velocity = app.world().get::<Velocity>(ball).unwrap().linvel;
        assert!(velocity.x > 0.0);
        assert!((velocity.length() - 6.0).abs() < 1e-4);
    }

    #[test]
    fn reset_recenters_paddle() {
        let mut app = test_app();
        let (paddle, _) = spawn_pair(&mut app, 0.0);
        app.world_mut().get_mut::<Transform>(paddle).unwrap().translation.x = 3.0;
        app.world_mut().send_event(RoundResetEvent);
        app.update();
        let translation = app.world().get::<Transform>(paddle).unwrap().translation;
        assert_eq!(translation, Vec3::new(0.0, -4.0, 0.0));
    }

    #[test]
    fn wider_paddle_is_tinted() {
        let mut app = test_app();
        let (paddle, _) = spawn_pair(&mut app, 0.0);
        app.update();
        app.world_mut().get_mut::<Paddle>(paddle).unwrap().width_multiplier = 1.5;
        app.update();
        let sprite = app.world().get::<Sprite>(paddle).unwrap();
        assert_eq!(sprite.custom_size, Some(Vec2::new(3.75, 0.4)));
        assert_eq!(sprite.color, PADDLE_POWERUP_COLOR);
    }

    #[test]
    fn held_key_drives_controller() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, paddle_movement);
        let mut paddle = Paddle::new(10.0, 60.0, Vec2::new(2.5, 0.4));
        paddle.speed_multiplier = 2.0;
        let entity = app
            .world_mut()
            .spawn((paddle, KinematicCharacterController::default()))
            .id();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ArrowRight);
        app.update();
        app.update();
        let translation = app
            .world()
            .get::<KinematicCharacterController>(entity)
            .unwrap()
            .translation
            .unwrap();
        assert!((translation.x - 2.0).abs() < 1e-3);
        assert_eq!(translation.y, 0.0);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(KeyCode::ArrowRight);
        app.update();
        assert!(app
            .world()
            .get::<KinematicCharacterController>(entity)
            .unwrap()
            .translation
            .is_none());
    }
}
