//! Scripted runs without a real terminal
//!
//! Plays a fixed number of ticks, feeding one scripted move per tick, and
//! draws every frame into a ratatui `TestBackend` so the render path is
//! exercised too. The outcome is a JSON [`HeadlessReport`].
//!
//! Move scripts use one character per tick: `U`, `D`, `L`, `R` queue a turn,
//! `.` leaves the heading alone. Whitespace is ignored. Once the script runs
//! out the snake keeps its heading.

use anyhow::{Context, Result, bail};
use ratatui::{Terminal, backend::TestBackend};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::game::{Cell, Direction, GameConfig, GameEngine, GameState};
use crate::metrics::{SessionMetrics, SessionSummary};
use crate::render::{Board, Renderer};

const BACKEND_WIDTH: u16 = 80;
const BACKEND_HEIGHT: u16 = 36;

/// Settings for one headless run
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    pub ticks: u64,
    pub moves: String,
    pub report_path: Option<PathBuf>,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            ticks: 100,
            moves: String::new(),
            report_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadlessReport {
    pub config: GameConfig,
    pub ticks: u64,
    pub summary: SessionSummary,
    pub head: Cell,
    pub direction: Direction,
    pub length: usize,
    pub body: Vec<Cell>,
    pub target: Cell,
    pub board: Vec<String>,
}

impl HeadlessReport {
    fn new(config: &GameConfig, state: &GameState, metrics: &SessionMetrics) -> Self {
        Self {
            config: config.clone(),
            ticks: state.ticks,
            summary: metrics.summary(),
            head: state.snake.head(),
            direction: state.snake.direction(),
            length: state.snake.length(),
            body: state.snake.occupied().to_vec(),
            target: state.target.position(),
            board: Board::from_state(state).to_text(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize headless report")
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write headless report to {}", path.display()))
    }
}

/// Parse a move script into one optional turn per tick
pub fn parse_moves(script: &str) -> Result<Vec<Option<Direction>>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '.' => Ok(None),
            other => match Direction::from_letter(other) {
                Some(direction) => Ok(Some(direction)),
                None => bail!("Invalid move {other:?}: expected U, D, L, R or '.'"),
            },
        })
        .collect()
}

pub struct HeadlessMode {
    engine: GameEngine,
    state: GameState,
    metrics: SessionMetrics,
    renderer: Renderer,
    moves: Vec<Option<Direction>>,
    settings: HeadlessConfig,
}

impl HeadlessMode {
    pub fn new(config: GameConfig, settings: HeadlessConfig) -> Result<Self> {
        let moves = parse_moves(&settings.moves)?;
        let mut engine = GameEngine::new(config).context("Invalid game configuration")?;
        let state = engine.new_game();

        Ok(Self {
            engine,
            state,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            moves,
            settings,
        })
    }

    /// Replace the starting state, e.g. to pin the target for a scenario
    pub fn with_state(mut self, state: GameState) -> Self {
        self.state = state;
        self
    }

    pub fn run(&mut self) -> Result<HeadlessReport> {
        let backend = TestBackend::new(BACKEND_WIDTH, BACKEND_HEIGHT);
        let mut terminal = Terminal::new(backend).context("Failed to build test backend")?;

        for tick in 0..self.settings.ticks {
            let turn = usize::try_from(tick)
                .ok()
                .and_then(|index| self.moves.get(index))
                .copied()
                .flatten();
            if let Some(direction) = turn {
                self.state.snake.queue_direction(direction);
            }

            let info = self.engine.tick(&mut self.state);
            self.metrics.on_tick(&info);
            self.metrics.update();

            terminal
                .draw(|frame| {
                    self.renderer
                        .render(frame, &self.state, &self.metrics, false);
                })
                .context("Failed to draw frame")?;
        }

        let report = HeadlessReport::new(self.engine.config(), &self.state, &self.metrics);
        info!(
            ticks = report.ticks,
            targets_eaten = report.summary.targets_eaten,
            resets = report.summary.resets,
            length = report.length,
            "Headless run finished"
        );

        if let Some(path) = &self.settings.report_path {
            report.write_json(path)?;
        }

        Ok(report)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
