//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The grid wraps around on every edge, and running into the body resets the snake
//! instead of ending the game.

pub mod config;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod snake;
pub mod state;
pub mod target;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use direction::Direction;
pub use engine::{GameEngine, TickInfo};
pub use grid::{Cell, GridWorld};
pub use snake::{Advance, Snake, SnakeStart};
pub use state::{Canvas, GameState, Sprite};
pub use target::Target;
