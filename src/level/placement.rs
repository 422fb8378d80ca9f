//! Brick grid placement.
//!
//! Positions are for brick centers. The grid origin is the center of the
//! top-left cell; rows grow downward and columns grow to the right.

use bevy::prelude::*;

use crate::data::{AnchorMode, LevelBuilderSettings, LevelConfiguration};

const MIN_CELL_SIZE: f32 = 0.0001;

/// Cell size, spacing and start position after settings overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPlacement {
    pub start: Vec2,
    pub cell: Vec2,
    pub spacing: f32,
}

impl GridPlacement {
    /// Center of the brick at `(row, column)` for a grid whose top-left
    /// cell sits at `origin`.
    pub fn cell_position(&self, origin: Vec2, row: usize, column: usize) -> Vec2 {
        origin
            + Vec2::new(
                column as f32 * (self.cell.x + self.spacing),
                -(row as f32) * (self.cell.y + self.spacing),
            )
    }

    /// Outer width and height of a `rows` x `columns` grid.
    pub fn grid_size(&self, rows: usize, columns: usize) -> Vec2 {
        let extent = |count: usize, cell: f32| {
            if count == 0 {
                0.0
            } else {
                count as f32 * cell + (count - 1) as f32 * self.spacing
            }
        };
        Vec2::new(extent(columns, self.cell.x), extent(rows, self.cell.y))
    }

    /// Origin that puts the grid's left edge at `left` and top edge at `top`.
    fn origin_from_edges(&self, left: f32, top: f32) -> Vec2 {
        Vec2::new(left + self.cell.x * 0.5, top - self.cell.y * 0.5)
    }
}

/// Pick placement values from the level or from the global overrides.
pub fn resolve_placement(
    config: &LevelConfiguration,
    overrides: &LevelBuilderSettings,
) -> (GridPlacement, AnchorMode) {
    let from_config = GridPlacement {
        start: config.start_position,
        cell: config.brick_size.max(Vec2::splat(MIN_CELL_SIZE)),
        spacing: config.brick_spacing,
    };
    if !overrides.apply_to_level_builders {
        return (from_config, AnchorMode::Config);
    }

    let start = if overrides.use_config_placement {
        config.start_position
    } else {
        Vec2::new(overrides.start_position.0, overrides.start_position.1)
    };
    let spacing = if overrides.use_spacing_from_config {
        config.brick_spacing
    } else {
        overrides.spacing
    };
    let cell = if overrides.auto_cell_size_from_prefab {
        from_config.cell
    } else {
        Vec2::new(
            overrides.cell_width.max(MIN_CELL_SIZE),
            overrides.cell_height.max(MIN_CELL_SIZE),
        )
    };
    (GridPlacement { start, cell, spacing }, overrides.anchor_mode)
}

/// Grid origin for an anchor mode, or `None` when the camera viewport or
/// paddle the mode depends on is unavailable.
pub fn anchored_origin(
    mode: AnchorMode,
    placement: &GridPlacement,
    size: Vec2,
    viewport: Option<Rect>,
    paddle_y: Option<f32>,
    overrides: &LevelBuilderSettings,
) -> Option<Vec2> {
    let centered_left = |center_x: f32| center_x - size.x * 0.5;
    match mode {
        AnchorMode::Config => Some(placement.start),
        AnchorMode::CameraTop => {
            let viewport = viewport?;
            Some(placement.origin_from_edges(
                centered_left(viewport.center().x),
                viewport.max.y - overrides.camera_top_margin,
            ))
        }
        AnchorMode::AbovePaddle => {
            let paddle_y = paddle_y?;
            let center_x = viewport.map_or(0.0, |v| v.center().x);
            let bottom = paddle_y + overrides.vertical_gap_above_paddle;
            Some(placement.origin_from_edges(centered_left(center_x), bottom + size.y))
        }
        AnchorMode::PaddleCameraMidpoint => {
            let (viewport, paddle_y) = (viewport?, paddle_y?);
            let middle = (paddle_y + viewport.max.y) * 0.5;
            Some(placement.origin_from_edges(
                centered_left(viewport.center().x),
                middle + size.y * 0.5,
            ))
        }
    }
}

/// Keep a grid inside the viewport minus the side and top margins. A grid
/// wider than the available space is centered instead.
pub fn clamp_to_viewport(
    origin: Vec2,
    placement: &GridPlacement,
    size: Vec2,
    viewport: Rect,
    side_margin: f32,
    top_margin: f32,
) -> Vec2 {
    let min_x = viewport.min.x + side_margin;
    let max_x = viewport.max.x - side_margin;

    let left = origin.x - placement.cell.x * 0.5;
    let left = if size.x > max_x - min_x {
        (min_x + max_x) * 0.5 - size.x * 0.5
    } else {
        left.clamp(min_x, max_x - size.x)
    };
    let top = (origin.y + placement.cell.y * 0.5).min(viewport.max.y - top_margin);
    placement.origin_from_edges(left, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement() -> GridPlacement {
        GridPlacement {
            start: Vec2::new(-3.5, 2.0),
            cell: Vec2::new(1.0, 0.5),
            spacing: 0.1,
        }
    }

    fn viewport() -> Rect {
        Rect::from_center_half_size(Vec2::ZERO, Vec2::new(8.0, 6.0))
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn cells_step_right_and_down() {
        let p = placement();
        assert_eq!(p.cell_position(p.start, 0, 0), p.start);
        assert!(approx(p.cell_position(p.start, 2, 3), Vec2::new(-3.5 + 3.3, 2.0 - 1.2)));
    }

    #[test]
    fn grid_size_counts_inner_spacing_only() {
        let size = placement().grid_size(3, 4);
        assert!(approx(size, Vec2::new(4.3, 1.7)));
        assert_eq!(placement().grid_size(0, 0), Vec2::ZERO);
    }

    #[test]
    fn camera_top_centers_and_hangs_from_top() {
        let p = placement();
        let size = p.grid_size(2, 4);
        let overrides = LevelBuilderSettings::default();
        let origin =
            anchored_origin(AnchorMode::CameraTop, &p, size, Some(viewport()), None, &overrides)
                .unwrap();
        // Left edge mirrors right edge
        let left = origin.x - 0.5;
        assert!((left + size.x * 0.5).abs() < 1e-4);
        assert!((origin.y + 0.25 - (6.0 - overrides.camera_top_margin)).abs() < 1e-4);
    }

    #[test]
    fn above_paddle_leaves_gap() {
        let p = placement();
        let size = p.grid_size(3, 4);
        let overrides = LevelBuilderSettings::default();
        let origin =
            anchored_origin(AnchorMode::AbovePaddle, &p, size, None, Some(-5.0), &overrides)
                .unwrap();
        let bottom_row = p.cell_position(origin, 2, 0);
        let bottom_edge = bottom_row.y - 0.25;
        assert!((bottom_edge - (-5.0 + overrides.vertical_gap_above_paddle)).abs() < 1e-4);
    }

    #[test]
    fn midpoint_centers_between_paddle_and_top() {
        let p = placement();
        let size = p.grid_size(3, 4);
        let overrides = LevelBuilderSettings::default();
        let origin = anchored_origin(
            AnchorMode::PaddleCameraMidpoint,
            &p,
            size,
            Some(viewport()),
            Some(-4.0),
            &overrides,
        )
        .unwrap();
        let top = origin.y + 0.25;
        let center = top - size.y * 0.5;
        assert!((center - 1.0).abs() < 1e-4);
    }

    #[test]
    fn missing_inputs_give_no_origin() {
        let p = placement();
        let overrides = LevelBuilderSettings::default();
        let size = p.grid_size(1, 1);
        assert!(anchored_origin(AnchorMode::CameraTop, &p, size, None, Some(0.0), &overrides).is_none());
        assert!(anchored_origin(AnchorMode::AbovePaddle, &p, size, Some(viewport()), None, &overrides).is_none());
        assert_eq!(
            anchored_origin(AnchorMode::Config, &p, size, None, None, &overrides),
            Some(p.start)
        );
    }

    #[test]
    fn clamp_pulls_grid_inside() {
        let p = placement();
        let size = p.grid_size(2, 4);
        let origin = clamp_to_viewport(Vec2::new(7.0, 9.0), &p, size, viewport(), 0.5, 0.5);
        let right = origin.x - 0.5 + size.x;
        assert!(right <= 7.5 + 1e-4);
        assert!(origin.y + 0.25 <= 5.5 + 1e-4);
    }

    #[test]
    fn too_wide_grid_is_centered() {
        let p = placement();
        let size = p.grid_size(1, 20);
        let origin = clamp_to_viewport(Vec2::new(-30.0, 0.0), &p, size, viewport(), 0.5, 0.5);
        let left = origin.x - 0.5;
        assert!((left + size.x * 0.5).abs() < 1e-4);
    }

    #[test]
    fn overrides_ignored_unless_applied() {
        let config = LevelConfiguration::from_raw(
            "test",
            ron::from_str("(name: \"T\", layout: Pattern(Empty))").unwrap(),
        )
        .unwrap();
        let mut overrides = LevelBuilderSettings {
            anchor_mode: AnchorMode::CameraTop,
            use_spacing_from_config: false,
            spacing: 0.4,
            ..default()
        };
        let (p, mode) = resolve_placement(&config, &overrides);
        assert_eq!(mode, AnchorMode::Config);
        assert_eq!(p.spacing, config.brick_spacing);

        overrides.apply_to_level_builders = true;
        overrides.auto_cell_size_from_prefab = false;
        overrides.cell_width = 0.0;
        let (p, mode) = resolve_placement(&config, &overrides);
        assert_eq!(mode, AnchorMode::CameraTop);
        assert_eq!(p.spacing, 0.4);
        assert_eq!(p.cell.x, MIN_CELL_SIZE);
    }
}
