//! Torus Snake - Snake on a wrap-around grid
//!
//! This library provides:
//! - Core game logic with no I/O (game module)
//! - Keyboard mapping for crossterm events (input module)
//! - TUI rendering with ratatui (render module)
//! - Session counters (metrics module)
//! - Interactive and scripted execution modes (modes module)
//! - Log setup shared by the binary (logging module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
