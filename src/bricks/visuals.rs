//! Mapping from brick health to what the brick looks like.
//!
//! The look of a brick depends only on its remaining health, its maximum
//! health and the number of health sprites its type provides.

use bevy::prelude::*;

use super::components::Brick;
use crate::data::{BrickData, BrickVisualProfile, GradientKey};

const RED: Color = Color::srgb(1.0, 0.0, 0.0);
const ORANGE: Color = Color::srgb(1.0, 0.5, 0.0);
const GREEN: Color = Color::srgb(0.0, 1.0, 0.0);
const CYAN: Color = Color::srgb(0.0, 1.0, 1.0);
const GRAY: Color = Color::srgb(0.5, 0.5, 0.5);

/// Which health sprite to show, or `None` when the type has no sprites.
///
/// With at least one sprite per health point, sprite `i` is shown at
/// `remaining == i + 1`. With fewer sprites, health is spread evenly over
/// them.
pub fn sprite_index_for_health(remaining: u32, max: u32, sprite_count: usize) -> Option<usize> {
    if sprite_count == 0 {
        return None;
    }
    let max = max.max(1);
    let remaining = remaining.clamp(1, max);
    let last = sprite_count - 1;

    let index = if max as usize <= sprite_count {
        (remaining - 1) as usize
    } else {
        let t = (remaining - 1) as f32 / (max - 1) as f32;
        (t * last as f32).round() as usize
    };
    Some(index.min(last))
}

/// Solid color for a brick drawn without sprites.
pub fn health_to_color(
    remaining: u32,
    max: u32,
    unbreakable: bool,
    profile: Option<&BrickVisualProfile>,
) -> Color {
    if unbreakable {
        return profile.map_or(GRAY, |p| rgb(p.unbreakable_color));
    }

    // 0 at full health, 1 at the last hit point
    let span = max.saturating_sub(1).max(1) as f32;
    let t = 1.0 - (remaining.saturating_sub(1) as f32 / span).clamp(0.0, 1.0);

    match profile {
        Some(p) if !p.strength_gradient.is_empty() => evaluate_gradient(&p.strength_gradient, t),
        _ => {
            if t < 0.33 {
                RED
            } else if t < 0.66 {
                ORANGE
            } else if t < 0.9 {
                GREEN
            } else {
                CYAN
            }
        }
    }
}

/// Linear interpolation between the two keys surrounding `t`.
pub fn evaluate_gradient(keys: &[GradientKey], t: f32) -> Color {
    let mut sorted: Vec<&GradientKey> = keys.iter().collect();
    sorted.sort_by(|a, b| a.time.total_cmp(&b.time));

    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return Color::WHITE;
    };
    if t <= first.time {
        return rgb(first.color);
    }
    if t >= last.time {
        return rgb(last.color);
    }

    for pair in sorted.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.time {
            let width = b.time - a.time;
            let f = if width > 0.0 { (t - a.time) / width } else { 1.0 };
            return Color::srgb(
                a.color.0 + (b.color.0 - a.color.0) * f,
                a.color.1 + (b.color.1 - a.color.1) * f,
                a.color.2 + (b.color.2 - a.color.2) * f,
            );
        }
    }
    rgb(last.color)
}

fn rgb(color: (f32, f32, f32)) -> Color {
    Color::srgb(color.0, color.1, color.2)
}

/// Resolved look of a brick.
#[derive(Debug, Clone, PartialEq)]
pub enum BrickVisual {
    /// Health sprite at `path`, tinted with the type color
    Sprite { path: String, tint: Color },
    Solid(Color),
}

/// Pick sprites when the type has them and the profile allows it,
/// otherwise a solid health color.
pub fn brick_visual(brick: &Brick, data: &BrickData, profile: Option<&BrickVisualProfile>) -> BrickVisual {
    let prefer_sprites = profile.map_or(true, |p| p.prefer_sprites_when_available);
    if prefer_sprites {
        if let Some(index) =
            sprite_index_for_health(brick.health, brick.max_health, data.health_states.len())
        {
            return BrickVisual::Sprite {
                path: data.health_states[index].clone(),
                tint: data.tint(),
            };
        }
    }
    BrickVisual::Solid(health_to_color(
        brick.health,
        brick.max_health,
        brick.unbreakable,
        profile,
    ))
}

/// Write a resolved visual into the brick's sprite.
pub fn apply_visual(sprite: &mut Sprite, visual: BrickVisual, asset_server: &AssetServer) {
    match visual {
        BrickVisual::Sprite { path, tint } => {
            sprite.image = asset_server.load(path);
            sprite.color = tint;
        }
        BrickVisual::Solid(color) => {
            sprite.image = Handle::default();
            sprite.color = color;
        }
    }
}
