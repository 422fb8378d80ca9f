//! Level configuration structures and RON loading.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::bricks::BrickRegistry;
use super::error::DataLoadError;
use super::loader::{data_id, read_ron_file, ron_files_in, DATA_ROOT};
use super::patterns::{self, PatternKind};

fn default_rows() -> usize {
    6
}

fn default_columns() -> usize {
    8
}

fn default_spacing() -> f32 {
    0.1
}

fn default_start_position() -> (f32, f32) {
    (-3.5, 2.0)
}

fn default_brick_size() -> (f32, f32) {
    (1.0, 0.5)
}

fn default_background() -> (f32, f32, f32) {
    (0.0, 0.0, 0.0)
}

fn default_music_volume() -> f32 {
    0.5
}

/// Where the brick layout of a level comes from.
#[derive(Debug, Clone, Deserialize)]
pub enum LayoutSource {
    /// One string per row; each character is looked up in the palette.
    /// `.` and space are empty cells.
    Grid(Vec<String>),
    /// Generated from `available_brick_types` when the level is loaded.
    Pattern(PatternKind),
}

/// Raw level configuration as read from RON.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelConfigurationRaw {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// Ordered brick type ids used by generated patterns.
    #[serde(default)]
    pub available_brick_types: Vec<String>,
    /// Grid character -> brick type id.
    #[serde(default)]
    pub palette: HashMap<char, String>,
    pub layout: LayoutSource,
    #[serde(default = "default_spacing")]
    pub brick_spacing: f32,
    #[serde(default = "default_start_position")]
    pub start_position: (f32, f32),
    /// Size of one brick; the cell size when sizing from the brick itself.
    #[serde(default = "default_brick_size")]
    pub brick_size: (f32, f32),
    #[serde(default = "default_background")]
    pub background_color: (f32, f32, f32),
    #[serde(default)]
    pub ball_speed: Option<f32>,
    #[serde(default)]
    pub paddle_speed: Option<f32>,
    #[serde(default)]
    pub music: Option<String>,
    #[serde(default = "default_music_volume")]
    pub music_volume: f32,
}

/// Processed level configuration with a resolved cell list.
#[derive(Debug, Clone)]
pub struct LevelConfiguration {
    /// Registry id (file stem)
    pub id: String,
    pub name: String,
    pub description: String,
    pub rows: usize,
    pub columns: usize,
    pub available_brick_types: Vec<String>,
    /// Row-major: `cells[row * columns + column]` is a brick type id or empty.
    pub cells: Vec<Option<String>>,
    pub brick_spacing: f32,
    pub start_position: Vec2,
    pub brick_size: Vec2,
    pub background_color: Color,
    pub ball_speed: Option<f32>,
    pub paddle_speed: Option<f32>,
    pub music: Option<String>,
    pub music_volume: f32,
}

impl LevelConfiguration {
    /// Create from raw configuration by resolving the layout into cells.
    pub fn from_raw(id: impl Into<String>, raw: LevelConfigurationRaw) -> Result<Self, DataLoadError> {
        if raw.rows == 0 || raw.columns == 0 {
            return Err(DataLoadError::InvalidDimensions {
                level: raw.name,
                rows: raw.rows,
                columns: raw.columns,
            });
        }

        let cells = match &raw.layout {
            LayoutSource::Grid(grid) => resolve_grid(grid, &raw)?,
            LayoutSource::Pattern(kind) => {
                if raw.available_brick_types.is_empty() && *kind != PatternKind::Empty {
                    return Err(DataLoadError::EmptyPalette(raw.name));
                }
                generate_pattern(kind, &raw)
            }
        };

        Ok(Self {
            id: id.into(),
            name: raw.name,
            description: raw.description,
            rows: raw.rows,
            columns: raw.columns,
            available_brick_types: raw.available_brick_types,
            cells,
            brick_spacing: raw.brick_spacing,
            start_position: Vec2::new(raw.start_position.0, raw.start_position.1),
            brick_size: Vec2::new(raw.brick_size.0, raw.brick_size.1),
            background_color: Color::srgb(
                raw.background_color.0,
                raw.background_color.1,
                raw.background_color.2,
            ),
            ball_speed: raw.ball_speed,
            paddle_speed: raw.paddle_speed,
            music: raw.music,
            music_volume: raw.music_volume,
        })
    }

    /// Brick type at a grid cell. `None` if empty or out of bounds.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells
            .get(row * self.columns + column)
            .and_then(|cell| cell.as_deref())
    }

    /// Number of non-empty cells.
    pub fn brick_count(&self) -> usize {
        patterns::count_bricks(&self.cells)
    }

    /// Brick type ids the layout uses that the registry does not know.
    pub fn unknown_brick_types(&self, registry: &BrickRegistry) -> Vec<String> {
        let mut unknown: Vec<String> = self
            .cells
            .iter()
            .flatten()
            .filter(|id| registry.get(id).is_none())
            .cloned()
            .collect();
        unknown.sort();
        unknown.dedup();
        unknown
    }
}

fn resolve_grid(grid: &[String], raw: &LevelConfigurationRaw) -> Result<Vec<Option<String>>, DataLoadError> {
    let actual_rows = grid.len();
    let actual_columns = grid.iter().map(|row| row.chars().count()).max().unwrap_or(0);
    if actual_rows != raw.rows || actual_columns > raw.columns {
        return Err(DataLoadError::GridMismatch {
            expected_rows: raw.rows,
            expected_columns: raw.columns,
            actual_rows,
            actual_columns,
        });
    }

    let mut cells = Vec::with_capacity(raw.rows * raw.columns);
    for (row, line) in grid.iter().enumerate() {
        let mut row_cells: Vec<Option<String>> = Vec::with_capacity(raw.columns);
        for (column, c) in line.chars().enumerate() {
            if c == '.' || c == ' ' {
                row_cells.push(None);
            } else if let Some(id) = raw.palette.get(&c) {
                row_cells.push(Some(id.clone()));
            } else {
                return Err(DataLoadError::UnknownPaletteEntry { character: c, row, column });
            }
        }
        // Short rows are padded with empty cells
        row_cells.resize(raw.columns, None);
        cells.extend(row_cells);
    }
    Ok(cells)
}

fn generate_pattern(kind: &PatternKind, raw: &LevelConfigurationRaw) -> Vec<Option<String>> {
    let types = &raw.available_brick_types;
    match kind {
        PatternKind::Checkerboard => patterns::checkerboard(raw.rows, raw.columns, types),
        PatternKind::Diamond => patterns::diamond(raw.rows, raw.columns, types),
        PatternKind::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            patterns::random(raw.rows, raw.columns, types, &mut rng)
        }
        PatternKind::Empty => patterns::empty(raw.rows, raw.columns),
    }
}

/// Resource storing all loaded levels in play order.
#[derive(Resource, Default, Debug)]
pub struct LevelRegistry {
    pub levels: Vec<LevelConfiguration>,
}

impl LevelRegistry {
    /// Get a level by its 1-based level number.
    pub fn get(&self, level: u32) -> Option<&LevelConfiguration> {
        let index = usize::try_from(level).ok()?.checked_sub(1)?;
        self.levels.get(index)
    }

    pub fn count(&self) -> u32 {
        self.levels.len() as u32
    }

    /// Level number that follows `level`, wrapping back to 1 after the last.
    pub fn next_level(&self, level: u32) -> u32 {
        if level >= self.count() {
            1
        } else {
            level + 1
        }
    }
}

/// Load all level configurations from `assets/data/levels/`.
pub fn load_level_configurations(mut commands: Commands, brick_registry: Res<BrickRegistry>) {
    let mut registry = LevelRegistry::default();
    let dir = Path::new(DATA_ROOT).join("levels");

    match ron_files_in(&dir) {
        Ok(files) => {
            for path in files {
                let id = data_id(&path);
                let result = read_ron_file::<LevelConfigurationRaw>(&path)
                    .and_then(|raw| LevelConfiguration::from_raw(id.clone(), raw));
                match result {
                    Ok(level) => {
                        for unknown in level.unknown_brick_types(&brick_registry) {
                            warn!("Level '{}' references unknown brick type '{}'", id, unknown);
                        }
                        info!(
                            "Loaded level: {} ({}x{}, {} bricks)",
                            level.name,
                            level.rows,
                            level.columns,
                            level.brick_count()
                        );
                        registry.levels.push(level);
                    }
                    Err(e) => error!("Failed to process level {:?}: {}", path, e),
                }
            }
        }
        Err(e) => warn!("Levels directory unavailable: {}", e),
    }

    info!("Loaded {} level(s)", registry.levels.len());
    commands.insert_resource(registry);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_grid(rows: usize, columns: usize, grid: &[&str]) -> LevelConfigurationRaw {
        let source = format!(
            r#"(
                name: "Test",
                rows: {rows},
                columns: {columns},
                palette: {{ 'B': "basic", 'U': "unbreakable" }},
                layout: Grid([{}]),
            )"#,
            grid.iter().map(|row| format!("\"{row}\"")).collect::<Vec<_>>().join(", ")
        );
        ron::from_str(&source).expect("valid level RON")
    }

    #[test]
    fn grid_resolves_row_major() {
        let level = LevelConfiguration::from_raw("t", raw_grid(2, 3, &["B.B", "UB"])).unwrap();
        assert_eq!(level.cells.len(), 6);
        assert_eq!(level.cell(0, 0), Some("basic"));
        assert_eq!(level.cell(0, 1), None);
        assert_eq!(level.cell(1, 0), Some("unbreakable"));
        // padded
        assert_eq!(level.cell(1, 2), None);
        assert_eq!(level.brick_count(), 4);
    }

    #[test]
    fn zero_dimensions_rejected() {
        let result = LevelConfiguration::from_raw("t", raw_grid(0, 3, &[]));
        assert!(matches!(result, Err(DataLoadError::InvalidDimensions { .. })));
    }

    #[test]
    fn row_count_mismatch_rejected() {
        let result = LevelConfiguration::from_raw("t", raw_grid(3, 3, &["BBB"]));
        assert!(matches!(result, Err(DataLoadError::GridMismatch { actual_rows: 1, .. })));
    }

    #[test]
    fn unknown_character_rejected() {
        let result = LevelConfiguration::from_raw("t", raw_grid(1, 3, &["BXB"]));
        assert!(matches!(
            result,
            Err(DataLoadError::UnknownPaletteEntry { character: 'X', row: 0, column: 1 })
        ));
    }

    #[test]
    fn pattern_without_types_rejected() {
        let raw: LevelConfigurationRaw =
            ron::from_str(r#"(name: "P", layout: Pattern(Checkerboard))"#).unwrap();
        assert!(matches!(
            LevelConfiguration::from_raw("p", raw),
            Err(DataLoadError::EmptyPalette(_))
        ));
    }

    #[test]
    fn seeded_random_pattern_loads() {
        let raw: LevelConfigurationRaw = ron::from_str(
            r#"(
                name: "R",
                rows: 4,
                columns: 5,
                available_brick_types: ["basic", "weak"],
                layout: Pattern(Random(seed: Some(3))),
            )"#,
        )
        .unwrap();
        let level = LevelConfiguration::from_raw("r", raw).unwrap();
        assert_eq!(level.cells.len(), 20);
    }

    #[test]
    fn level_numbers_wrap_after_last() {
        let mut registry = LevelRegistry::default();
        for id in ["level1", "level2"] {
            registry
                .levels
                .push(LevelConfiguration::from_raw(id, raw_grid(1, 1, &["B"])).unwrap());
        }
        assert_eq!(registry.get(1).map(|l| l.id.as_str()), Some("level1"));
        assert!(registry.get(0).is_none());
        assert!(registry.get(3).is_none());
        assert_eq!(registry.next_level(1), 2);
        assert_eq!(registry.next_level(2), 1);
    }

    #[test]
    fn unknown_brick_types_are_listed_once() {
        let level = LevelConfiguration::from_raw("t", raw_grid(1, 3, &["BBU"])).unwrap();
        let mut bricks = BrickRegistry::default();
        bricks.insert("basic", Default::default());
        assert_eq!(level.unknown_brick_types(&bricks), vec!["unbreakable".to_string()]);
    }
}
