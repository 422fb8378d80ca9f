//! Camera shake on a lost ball.

use bevy::prelude::*;

use crate::core::BallMissedEvent;
use crate::data::GameSettings;
use crate::level::GameCamera;

/// Screen shake effect resource.
#[derive(Resource, Debug, Default)]
pub struct ScreenShake {
    pub intensity: f32,
    pub duration: f32,
    pub timer: f32,
}

impl ScreenShake {
    pub fn shake(&mut self, intensity: f32, duration: f32) {
        // Only override if new shake is stronger
        if intensity > self.intensity || self.timer <= 0.0 {
            self.intensity = intensity;
            self.duration = duration;
            self.timer = duration;
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }

    /// Advance the shake and return this frame's camera offset. The offset
    /// fades out linearly and is zero once the shake is over.
    pub fn update(&mut self, delta: f32) -> Vec2 {
        if self.timer <= 0.0 || self.duration <= 0.0 {
            self.timer = 0.0;
            return Vec2::ZERO;
        }

        self.timer = (self.timer - delta).max(0.0);
        let current_intensity = self.intensity * (self.timer / self.duration);

        let x = (rand::random::<f32>() - 0.5) * 2.0 * current_intensity;
        let y = (rand::random::<f32>() - 0.5) * 2.0 * current_intensity;
        Vec2::new(x, y)
    }
}

pub fn shake_on_ball_miss(
    mut missed_events: EventReader<BallMissedEvent>,
    settings: Res<GameSettings>,
    mut shake: ResMut<ScreenShake>,
) {
    if missed_events.read().count() == 0 || !settings.screen_shake_enabled {
        return;
    }
    shake.shake(settings.screen_shake_intensity, settings.screen_shake_duration);
}

/// Offset the camera from its rest position at the origin.
pub fn apply_camera_shake(
    time: Res<Time>,
    mut shake: ResMut<ScreenShake>,
    mut cameras: Query<&mut Transform, With<GameCamera>>,
) {
    let was_active = shake.is_active();
    let offset = shake.update(time.delta_secs());
    if !was_active {
        return;
    }
    for mut transform in &mut cameras {
        transform.translation.x = offset.x;
        transform.translation.y = offset.y;
    }
}

/// Drop any running shake and put the camera back at rest.
pub fn reset_camera_shake(
    mut shake: ResMut<ScreenShake>,
    mut cameras: Query<&mut Transform, With<GameCamera>>,
) {
    *shake = ScreenShake::default();
    for mut transform in &mut cameras {
        transform.translation.x = 0.0;
        transform.translation.y = 0.0;
    }
}
