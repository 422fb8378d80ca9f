//! Ball spawning, launch and speed maintenance.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use crate::core::{LevelEntity, RoundResetEvent};
use crate::data::GameSettings;

const BALL_COLOR: Color = Color::srgb(0.95, 0.95, 0.95);

/// Everything the level builder needs to place a ball.
pub struct BallSpawnParams {
    pub position: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub launch_delay: f32,
}

/// Spawn the ball resting on its spawn point with the launch timer armed.
pub fn spawn_ball(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    params: BallSpawnParams,
) -> Entity {
    commands
        .spawn((
            Name::new("Ball"),
            Ball::new(params.speed),
            BallSpawn(params.position),
            LaunchTimer::new(params.launch_delay),
            LevelEntity,
            Mesh2d(meshes.add(Circle::new(params.radius))),
            MeshMaterial2d(materials.add(ColorMaterial::from_color(BALL_COLOR))),
            Transform::from_translation(params.position.extend(1.0)),
        ))
        .insert((
            RigidBody::Dynamic,
            Collider::ball(params.radius),
            Velocity::zero(),
            GravityScale(0.0),
            Restitution {
                coefficient: 1.0,
                combine_rule: CoefficientCombineRule::Max,
            },
            Friction {
                coefficient: 0.0,
                combine_rule: CoefficientCombineRule::Min,
            },
            Damping {
                linear_damping: 0.0,
                angular_damping: 0.0,
            },
            LockedAxes::ROTATION_LOCKED,
            Ccd::enabled(),
            ActiveEvents::COLLISION_EVENTS,
        ))
        .id()
}

/// Launch waiting balls when their timer fires or the launch key is pressed.
pub fn launch_balls(
    mut commands: Commands,
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut balls: Query<(Entity, &Ball, &mut LaunchTimer, &mut Velocity)>,
) {
    let launch_now = keyboard.just_pressed(KeyCode::Space);
    for (entity, ball, mut timer, mut velocity) in &mut balls {
        timer.0.tick(time.delta());
        if !timer.0.finished() && !launch_now {
            continue;
        }
        let random_x = rand::random::<f32>() * 2.0 - 1.0;
        velocity.linvel = launch_direction(random_x) * ball.speed();
        commands.entity(entity).remove::<LaunchTimer>();
        debug!("Ball launched with velocity {:?}", velocity.linvel);
    }
}

/// Hold the ball at exactly its configured speed after each physics step.
pub fn maintain_ball_speed(mut balls: Query<(&Ball, &mut Velocity), Without<LaunchTimer>>) {
    for (ball, mut velocity) in &mut balls {
        let corrected = constant_speed(velocity.linvel, ball.speed());
        if corrected != velocity.linvel {
            velocity.linvel = corrected;
        }
    }
}

/// Stop the ball, return it to its spawn point and re-arm the launch timer.
pub fn reset_ball(
    mut commands: Commands,
    mut reset_events: EventReader<RoundResetEvent>,
    settings: Res<GameSettings>,
    mut balls: Query<(Entity, &BallSpawn, &mut Transform, &mut Velocity), With<Ball>>,
) {
    if reset_events.read().count() == 0 {
        return;
    }
    if balls.is_empty() {
        error!("Ball is missing; cannot reset ball.");
        return;
    }
    for (entity, spawn, mut transform, mut velocity) in &mut balls {
        *velocity = Velocity::zero();
        transform.translation = spawn.0.extend(transform.translation.z);
        commands
            .entity(entity)
            .insert(LaunchTimer::new(settings.launch_delay));
    }
}
