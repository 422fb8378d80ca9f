//! Powerup drops, pickup and timed effects.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use crate::ball::Ball;
use crate::core::{LevelEntity, PowerupCollectedEvent, PowerupDropEvent};
use crate::data::{GameSettings, PowerupKind, PowerupRegistry};
use crate::paddle::Paddle;

const POWERUP_SIZE: Vec2 = Vec2::new(0.6, 0.3);

/// Spawn a falling pickup for every successful drop roll.
pub fn spawn_dropped_powerups(
    mut commands: Commands,
    mut drop_events: EventReader<PowerupDropEvent>,
    registry: Res<PowerupRegistry>,
) {
    for event in drop_events.read() {
        let Some(data) = registry.get(&event.powerup) else {
            warn!("Brick drops unknown powerup '{}'", event.powerup);
            continue;
        };
        debug!("Dropping powerup '{}' at {:?}", event.powerup, event.position);
        commands.spawn((
            Name::new(format!("Powerup ({})", event.powerup)),
            Powerup {
                id: event.powerup.clone(),
                kind: data.kind,
                fall_speed: data.fall_speed,
            },
            LevelEntity,
            Sprite {
                color: data.tint(),
                custom_size: Some(POWERUP_SIZE),
                ..default()
            },
            Transform::from_translation(event.position.extend(0.5)),
            Collider::cuboid(POWERUP_SIZE.x * 0.5, POWERUP_SIZE.y * 0.5),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            // Fixed sensor against the kinematic paddle
            ActiveCollisionTypes::all(),
        ));
    }
}

/// Move pickups down and drop the ones that fell out of the arena.
pub fn fall_powerups(
    mut commands: Commands,
    time: Res<Time>,
    settings: Res<GameSettings>,
    mut powerups: Query<(Entity, &Powerup, &mut Transform)>,
) {
    let floor = -settings.arena.height * 0.5 - settings.arena.wall_thickness * 2.0;
    for (entity, powerup, mut transform) in &mut powerups {
        transform.translation.y -= powerup.fall_speed * time.delta_secs();
        if transform.translation.y < floor {
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Pickups touching the paddle are collected.
pub fn collect_powerups(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    powerups: Query<(&Powerup, &Transform)>,
    paddles: Query<(), With<Paddle>>,
    registry: Res<PowerupRegistry>,
    mut active: ResMut<ActivePowerups>,
    mut collected_events: EventWriter<PowerupCollectedEvent>,
) {
    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };
        let pickup = if paddles.contains(*a) {
            *b
        } else if paddles.contains(*b) {
            *a
        } else {
            continue;
        };
        let Ok((powerup, transform)) = powerups.get(pickup) else {
            continue;
        };

        if let Some(data) = registry.get(&powerup.id) {
            active.start(data);
        }
        info!("Collected powerup '{}'", powerup.id);
        collected_events.send(PowerupCollectedEvent {
            powerup: powerup.id.clone(),
            kind: powerup.kind,
            position: transform.translation.truncate(),
        });
        commands.entity(pickup).despawn_recursive();
    }
}

/// Count down timed effects. Timers run on unscaled game time so slow
/// motion does not extend itself.
pub fn tick_active_powerups(time: Res<Time<Virtual>>, mut active: ResMut<ActivePowerups>) {
    if active.effects.is_empty() {
        return;
    }
    let speed = time.relative_speed();
    let delta = if speed > 0.0 {
        time.delta().div_f32(speed)
    } else {
        time.delta()
    };
    for kind in active.tick(delta) {
        info!("Powerup effect {:?} expired", kind);
    }
}

/// Push effect strengths onto the paddle, ball and game clock.
pub fn apply_powerup_effects(
    active: Res<ActivePowerups>,
    mut paddles: Query<&mut Paddle>,
    mut balls: Query<&mut Ball>,
    mut time: ResMut<Time<Virtual>>,
) {
    let width = active.multiplier(PowerupKind::PaddleSize);
    let paddle_speed = active.multiplier(PowerupKind::PaddleSpeed);
    for mut paddle in &mut paddles {
        if paddle.width_multiplier != width {
            paddle.width_multiplier = width;
        }
        if paddle.speed_multiplier != paddle_speed {
            paddle.speed_multiplier = paddle_speed;
        }
    }

    let speed = active.multiplier(PowerupKind::BallSpeed);
    for mut ball in &mut balls {
        if ball.speed_multiplier != speed {
            ball.speed_multiplier = speed;
        }
    }

    let clock = active.multiplier(PowerupKind::SlowMotion);
    if time.relative_speed() != clock {
        time.set_relative_speed(clock);
    }
}

/// Revert every timed effect when the level is torn down.
pub fn clear_powerup_effects(mut active: ResMut<ActivePowerups>, mut time: ResMut<Time<Virtual>>) {
    active.clear();
    time.set_relative_speed(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PowerupData;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::time::TimeUpdateStrategy;
    use bevy_rapier2d::rapier::geometry::CollisionEventFlags;
    use std::time::Duration;

    fn registry() -> PowerupRegistry {
        let mut registry = PowerupRegistry::default();
        registry.types.insert(
            "wide".into(),
            PowerupData {
                name: "Wide Paddle".into(),
                kind: PowerupKind::PaddleSize,
                color: (0.2, 0.6, 1.0),
                fall_speed: 2.0,
                duration: 10.0,
                effect_strength: 1.5,
                bonus_points: 0,
                extra_lives: 0,
                collect_sound: None,
            },
        );
        registry
    }

    fn timed(kind: PowerupKind, strength: f32, duration: f32) -> PowerupData {
        PowerupData {
            name: format!("{:?}", kind),
            kind,
            color: (1.0, 1.0, 1.0),
            fall_speed: 2.0,
            duration,
            effect_strength: strength,
            bonus_points: 0,
            extra_lives: 0,
            collect_sound: None,
        }
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(registry())
            .insert_resource(GameSettings::default())
            .init_resource::<ActivePowerups>()
            .add_event::<CollisionEvent>()
            .add_event::<PowerupDropEvent>()
            .add_event::<PowerupCollectedEvent>()
            .add_systems(
                Update,
                (
                    spawn_dropped_powerups,
                    collect_powerups,
                    tick_active_powerups,
                    apply_powerup_effects,
                )
                    .chain(),
            );
        app
    }

    #[test]
    fn drop_spawns_pickup() {
        let mut app = test_app();
        app.world_mut().send_event(PowerupDropEvent {
            powerup: "wide".into(),
            position: Vec2::new(1.0, 3.0),
        });
        app.world_mut().send_event(PowerupDropEvent {
            powerup: "nope".into(),
            position: Vec2::ZERO,
        });
        app.update();

        let world = app.world_mut();
        let pickups: Vec<_> = world.query::<&Powerup>().iter(world).collect();
        assert_eq!(pickups.len(), 1);
        assert_eq!(pickups[0].kind, PowerupKind::PaddleSize);
    }

    #[test]
    fn paddle_collects_and_widens() {
        let mut app = test_app();
        let paddle = app
            .world_mut()
            .spawn(Paddle::new(10.0, 60.0, Vec2::new(2.0, 0.4)))
            .id();
        let pickup = app
            .world_mut()
            .spawn((
                Powerup {
                    id: "wide".into(),
                    kind: PowerupKind::PaddleSize,
                    fall_speed: 2.0,
                },
                Transform::default(),
            ))
            .id();
        app.world_mut()
            .send_event(CollisionEvent::Started(pickup, paddle, CollisionEventFlags::SENSOR));
        app.update();

        assert!(!app.world().entities().contains(pickup));
        assert_eq!(app.world().get::<Paddle>(paddle).unwrap().width_multiplier, 1.5);

        // Expiry restores the normal width
        app.world_mut().resource_mut::<ActivePowerups>().clear();
        app.update();
        assert_eq!(app.world().get::<Paddle>(paddle).unwrap().width_multiplier, 1.0);
    }

    #[test]
    fn teardown_restores_clock() {
        let mut app = test_app();
        app.world_mut()
            .resource_mut::<Time<Virtual>>()
            .set_relative_speed(0.5);
        app.world_mut()
            .resource_mut::<ActivePowerups>()
            .start(&registry().types["wide"]);
        let _ = app.world_mut().run_system_once(clear_powerup_effects);

        assert!(app.world().resource::<ActivePowerups>().effects.is_empty());
        assert_eq!(app.world().resource::<Time<Virtual>>().relative_speed(), 1.0);
    }

    #[test]
    fn speed_multipliers_reach_ball_and_paddle() {
        let mut app = test_app();
        let ball = app.world_mut().spawn(Ball::new(10.0)).id();
        let paddle = app
            .world_mut()
            .spawn(Paddle::new(12.0, 60.0, Vec2::new(2.0, 0.4)))
            .id();
        {
            let mut active = app.world_mut().resource_mut::<ActivePowerups>();
            active.start(&timed(PowerupKind::BallSpeed, 1.3, 8.0));
            active.start(&timed(PowerupKind::PaddleSpeed, 1.5, 8.0));
        }
        app.update();

        assert!((app.world().get::<Ball>(ball).unwrap().speed() - 13.0).abs() < 1e-4);
        let paddle = app.world().get::<Paddle>(paddle).unwrap();
        assert!((paddle.current_speed() - 18.0).abs() < 1e-4);
        assert!(paddle.is_boosted());
    }

    #[test]
    fn slow_motion_lasts_its_real_duration() {
        let mut app = test_app();
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
        app.world_mut()
            .resource_mut::<ActivePowerups>()
            .start(&timed(PowerupKind::SlowMotion, 0.5, 1.0));

        // The first frame has no delta and turns the clock down
        app.update();
        assert_eq!(app.world().resource::<Time<Virtual>>().relative_speed(), 0.5);

        // 0.8 s of real time, 0.4 s of game time
        for _ in 0..8 {
            app.update();
        }
        assert_eq!(app.world().resource::<ActivePowerups>().effects.len(), 1);

        // 1.2 s real, only 0.6 s game
        for _ in 0..4 {
            app.update();
        }
        assert!(app.world().resource::<ActivePowerups>().effects.is_empty());
        app.update();
        assert_eq!(app.world().resource::<Time<Virtual>>().relative_speed(), 1.0);
    }
}
