//! Short-lived particle bursts.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::core::{BallMissedEvent, BrickDestroyedEvent, LevelCompletedEvent};
use crate::data::{BrickRegistry, GameSettings};

/// A single particle. Particles are not level entities; they outlive a
/// level change and expire on their own.
#[derive(Component, Debug)]
pub struct Particle {
    pub velocity: Vec2,
    pub lifetime: Timer,
}

/// Shape of one burst.
#[derive(Debug, Clone, Copy)]
pub struct Burst {
    pub count: usize,
    pub color: Color,
    pub speed: f32,
    pub lifetime: f32,
    pub size: f32,
}

impl Burst {
    fn brick(color: Color) -> Self {
        Self {
            count: 12,
            color,
            speed: 3.0,
            lifetime: 0.5,
            size: 0.12,
        }
    }

    fn ball_miss() -> Self {
        Self {
            count: 16,
            color: Color::srgb(1.0, 0.3, 0.2),
            speed: 4.0,
            lifetime: 0.6,
            size: 0.15,
        }
    }

    fn level_complete() -> Self {
        Self {
            count: 48,
            color: Color::srgb(1.0, 0.9, 0.3),
            speed: 6.0,
            lifetime: 1.2,
            size: 0.2,
        }
    }
}

/// Velocities spread evenly around a circle with some random jitter in
/// angle and speed.
pub fn burst_velocities(count: usize, speed: f32, rng: &mut impl Rng) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let base = i as f32 / count as f32 * TAU;
            let angle = base + rng.gen_range(-0.2..0.2);
            let magnitude = speed * rng.gen_range(0.5..1.0);
            Vec2::from_angle(angle) * magnitude
        })
        .collect()
}

pub fn spawn_burst(commands: &mut Commands, position: Vec2, burst: Burst) {
    let mut rng = rand::thread_rng();
    for velocity in burst_velocities(burst.count, burst.speed, &mut rng) {
        commands.spawn((
            Particle {
                velocity,
                lifetime: Timer::from_seconds(burst.lifetime, TimerMode::Once),
            },
            Sprite {
                color: burst.color,
                custom_size: Some(Vec2::splat(burst.size)),
                ..default()
            },
            Transform::from_translation(position.extend(2.0)),
        ));
    }
}

pub fn burst_on_brick_destroyed(
    mut commands: Commands,
    mut destroyed_events: EventReader<BrickDestroyedEvent>,
    settings: Res<GameSettings>,
    registry: Res<BrickRegistry>,
) {
    for event in destroyed_events.read() {
        if !settings.particle_effects_enabled {
            continue;
        }
        let color = registry
            .get(&event.brick_type)
            .map_or(Color::WHITE, |data| data.tint());
        spawn_burst(&mut commands, event.position, Burst::brick(color));
    }
}

pub fn burst_on_ball_miss(
    mut commands: Commands,
    mut missed_events: EventReader<BallMissedEvent>,
    settings: Res<GameSettings>,
) {
    for event in missed_events.read() {
        if settings.particle_effects_enabled {
            spawn_burst(&mut commands, event.position, Burst::ball_miss());
        }
    }
}

pub fn burst_on_level_complete(
    mut commands: Commands,
    mut completed_events: EventReader<LevelCompletedEvent>,
    settings: Res<GameSettings>,
) {
    for _ in completed_events.read() {
        if settings.particle_effects_enabled {
            spawn_burst(&mut commands, Vec2::ZERO, Burst::level_complete());
        }
    }
}

/// Move, fade and expire particles.
pub fn update_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut particles: Query<(Entity, &mut Particle, &mut Transform, &mut Sprite)>,
) {
    for (entity, mut particle, mut transform, mut sprite) in &mut particles {
        particle.lifetime.tick(time.delta());
        if particle.lifetime.finished() {
            commands.entity(entity).despawn();
            continue;
        }
        transform.translation += (particle.velocity * time.delta_secs()).extend(0.0);
        sprite.color.set_alpha(particle.lifetime.fraction_remaining());
    }
}
