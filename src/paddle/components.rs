//! Paddle component and the bounce math.

use bevy::prelude::*;

pub const PADDLE_COLOR: Color = Color::srgb(0.85, 0.85, 0.9);
/// Shown while a paddle powerup is active
pub const PADDLE_POWERUP_COLOR: Color = Color::srgb(1.0, 0.84, 0.0);

/// The player-controlled reflector.
#[derive(Component, Debug, Clone)]
pub struct Paddle {
    pub move_speed: f32,
    /// Degrees from straight up
    pub max_bounce_angle: f32,
    /// Unscaled width and height
    pub size: Vec2,
    /// Set by PaddleSize powerups
    pub width_multiplier: f32,
    /// Set by PaddleSpeed powerups
    pub speed_multiplier: f32,
}

impl Paddle {
    pub fn new(move_speed: f32, max_bounce_angle: f32, size: Vec2) -> Self {
        Self {
            move_speed,
            max_bounce_angle,
            size,
            width_multiplier: 1.0,
            speed_multiplier: 1.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x * self.width_multiplier
    }

    pub fn half_width(&self) -> f32 {
        self.width() * 0.5
    }

    pub fn current_speed(&self) -> f32 {
        self.move_speed * self.speed_multiplier
    }

    pub fn is_boosted(&self) -> bool {
        self.width_multiplier != 1.0 || self.speed_multiplier != 1.0
    }
}

/// Angle in degrees added to the ball's heading for a hit `offset` from
/// the paddle center (`paddle.x - ball.x`).
pub fn bounce_angle(offset: f32, half_width: f32, max_angle: f32) -> f32 {
    if half_width <= 0.0 {
        return 0.0;
    }
    (offset / half_width).clamp(-1.0, 1.0) * max_angle
}

/// Heading of a velocity in degrees, measured counterclockwise from +Y.
pub fn heading_from_up(velocity: Vec2) -> f32 {
    (-velocity.x).atan2(velocity.y).to_degrees()
}

/// New ball velocity after a paddle hit. Speed is preserved and the
/// heading stays within `max_angle` of straight up.
pub fn deflect(velocity: Vec2, offset: f32, half_width: f32, max_angle: f32) -> Vec2 {
    let speed = velocity.length();
    if speed == 0.0 {
        return velocity;
    }
    let heading = (heading_from_up(velocity) + bounce_angle(offset, half_width, max_angle))
        .clamp(-max_angle, max_angle)
        .to_radians();
    Vec2::new(-heading.sin(), heading.cos()) * speed
}

/// Horizontal input from A/D and the arrow keys, in [-1, 1].
pub fn input_axis(keyboard: &ButtonInput<KeyCode>) -> f32 {
    let mut axis = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }
    axis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_angle_is_odd_and_bounded() {
        let max = 75.0;
        for offset in [-10.0, -1.25, -0.4, 0.0, 0.3, 1.0, 1.25, 42.0] {
            let angle = bounce_angle(offset, 1.25, max);
            assert!((angle + bounce_angle(-offset, 1.25, max)).abs() < 1e-5);
            assert!(angle.abs() <= max);
        }
        assert_eq!(bounce_angle(1.25, 1.25, max), max);
        assert_eq!(bounce_angle(0.0, 1.25, max), 0.0);
    }

    #[test]
    fn zero_width_paddle_does_not_bend() {
        assert_eq!(bounce_angle(1.0, 0.0, 60.0), 0.0);
    }

    #[test]
    fn heading_matches_direction() {
        assert!((heading_from_up(Vec2::Y)).abs() < 1e-5);
        assert!((heading_from_up(Vec2::NEG_X) - 90.0).abs() < 1e-4);
        assert!((heading_from_up(Vec2::X) + 90.0).abs() < 1e-4);
    }

    #[test]
    fn deflect_preserves_speed_and_bounds_heading() {
        let velocity = Vec2::new(3.0, 4.0);
        for offset in [-2.0, -0.5, 0.0, 0.7, 2.0] {
            let out = deflect(velocity, offset, 1.25, 75.0);
            assert!((out.length() - 5.0).abs() < 1e-4);
            assert!(heading_from_up(out).abs() <= 75.0 + 1e-3);
            assert!(out.y > 0.0);
        }
    }

    #[test]
    fn hit_left_of_center_sends_ball_left() {
        // Ball left of the paddle center: offset > 0, heading turns counterclockwise
        let out = deflect(Vec2::new(0.0, 6.0), 1.0, 1.25, 60.0);
        assert!(out.x < 0.0);
        let out = deflect(Vec2::new(0.0, 6.0), -1.0, 1.25, 60.0);
        assert!(out.x > 0.0);
    }

    #[test]
    fn downward_velocity_is_turned_up() {
        let out = deflect(Vec2::new(1.0, -5.0), 0.0, 1.25, 75.0);
        assert!(out.y > 0.0);
    }

    #[test]
    fn input_axis_cancels_opposites() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyA);
        assert_eq!(input_axis(&keyboard), -1.0);
        keyboard.press(KeyCode::ArrowRight);
        assert_eq!(input_axis(&keyboard), 0.0);
    }
}
