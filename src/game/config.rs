use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::{direction::Direction, grid::Cell};

/// Smallest grid side on which a step can never wrap the head onto the neck
pub const MIN_GRID_SIDE: usize = 3;

/// Problems found by [`GameConfig::validate`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("grid must be at least 3x3, got {width}x{height}")]
    GridTooSmall { width: usize, height: usize },
    #[error("grid {width}x{height} is too large for i32 coordinates")]
    GridTooLarge { width: usize, height: usize },
    #[error("start cell ({x}, {y}) lies outside the {width}x{height} grid")]
    StartOutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error("initial snake length must be at least 1")]
    ZeroLength,
    #[error("initial snake length {length} leaves no free cell on a grid of {cells}")]
    LengthFillsGrid { length: usize, cells: usize },
    #[error("tick rate must be at least 1 tick per second")]
    ZeroTickRate,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Where the snake starts and restarts; grid center when unset
    pub start_cell: Option<Cell>,
    /// Heading after a start or reset
    pub start_direction: Direction,
    /// Target length after a start or reset
    pub initial_length: usize,
    /// Fixed simulation rate
    pub ticks_per_second: u32,
    /// Seed for target placement; fresh entropy when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            start_cell: None,
            start_direction: Direction::Right,
            initial_length: 1,
            ticks_per_second: 15,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a JSON config. Missing fields fall back to the defaults.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Starting cell, defaulting to the grid center
    pub fn start_cell(&self) -> Cell {
        self.start_cell.unwrap_or(Cell::new(
            (self.grid_width / 2) as i32,
            (self.grid_height / 2) as i32,
        ))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.grid_width, self.grid_height);
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        if width < MIN_GRID_SIDE || height < MIN_GRID_SIDE {
            return Err(ConfigError::GridTooSmall { width, height });
        }
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(ConfigError::GridTooLarge { width, height });
        }

        let start = self.start_cell();
        if !(0..width as i32).contains(&start.x) || !(0..height as i32).contains(&start.y) {
            return Err(ConfigError::StartOutOfBounds {
                x: start.x,
                y: start.y,
                width,
                height,
            });
        }

        if self.initial_length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        let cells = width.saturating_mul(height);
        if self.initial_length >= cells {
            return Err(ConfigError::LengthFillsGrid {
                length: self.initial_length,
                cells,
            });
        }

        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.initial_length, 1);
        assert_eq!(config.start_direction, Direction::Right);
        assert_eq!(config.start_cell(), Cell::new(16, 12));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
        assert_eq!(config.start_cell(), Cell::new(7, 7));
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        let config = GameConfig::new(0, 10);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyGrid {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_validate_rejects_narrow_grids() {
        for (width, height) in [(1, 10), (2, 5), (10, 2), (2, 2)] {
            let config = GameConfig {
                initial_length: 3,
                ..GameConfig::new(width, height)
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::GridTooSmall { width, height })
            );
        }

        assert_eq!(GameConfig::new(3, 3).validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_start_outside_grid() {
        let config = GameConfig {
            start_cell: Some(Cell::new(10, 3)),
            ..GameConfig::small()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartOutOfBounds { x: 10, y: 3, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_length_and_rate() {
        let zero_length = GameConfig {
            initial_length: 0,
            ..GameConfig::small()
        };
        assert_eq!(zero_length.validate(), Err(ConfigError::ZeroLength));

        let full = GameConfig {
            initial_length: 9,
            ..GameConfig::new(3, 3)
        };
        assert_eq!(
            full.validate(),
            Err(ConfigError::LengthFillsGrid {
                length: 9,
                cells: 9
            })
        );

        let stopped = GameConfig {
            ticks_per_second: 0,
            ..GameConfig::small()
        };
        assert_eq!(stopped.validate(), Err(ConfigError::ZeroTickRate));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"grid_width": 40, "start_direction": "up", "seed": 5}"#)
                .unwrap();
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.start_direction, Direction::Up);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_json_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "torus_snake_config_{}.json",
            std::process::id()
        ));
        let config = GameConfig {
            start_cell: Some(Cell::new(2, 3)),
            ..GameConfig::small().with_seed(11)
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = GameConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = GameConfig::from_json_file(Path::new("/nonexistent/torus_snake.json"));
        assert!(result.is_err());
    }
}
