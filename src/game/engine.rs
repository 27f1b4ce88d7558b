use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::{
    config::{ConfigError, GameConfig},
    grid::{Cell, GridWorld},
    snake::{Advance, Snake, SnakeStart},
    state::GameState,
    target::Target,
};

/// Information about a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInfo {
    /// Whether the head landed on the target this tick
    pub ate_target: bool,
    /// Whether the snake ran into itself and was reset
    pub collided: bool,
    /// Head position after the tick
    pub head: Cell,
    /// Target length after the tick
    pub length: usize,
}

/// The game engine that runs the per-tick controller sequence
pub struct GameEngine {
    config: GameConfig,
    grid: GridWorld,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = GridWorld::new(config.grid_width, config.grid_height);

        Ok(Self { config, grid, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake_start(&self) -> SnakeStart {
        SnakeStart {
            cell: self.config.start_cell(),
            direction: self.config.start_direction,
            length: self.config.initial_length,
        }
    }

    /// Fresh game: snake at its start, target clear of it
    pub fn new_game(&mut self) -> GameState {
        let snake = Snake::new(self.snake_start());
        let target = Target::spawn(&self.grid, snake.occupied(), &mut self.rng);

        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            seed = ?self.config.seed,
            target = ?target.position(),
            "New game"
        );

        GameState::new(self.grid, snake, target)
    }

    /// Execute one tick.
    ///
    /// Input for this tick must already be queued on `state.snake`.
    pub fn tick(&mut self, state: &mut GameState) -> TickInfo {
        let collided = match state.snake.advance(&state.grid) {
            Advance::Moved { .. } => false,
            Advance::Collided { length } => {
                info!(tick = state.ticks, length, "Snake ran into itself, resetting");
                true
            }
        };

        let ate_target = state.snake.head() == state.target.position();
        if ate_target {
            state.snake.grow();
            state
                .target
                .respawn(&state.grid, state.snake.occupied(), &mut self.rng);
            info!(
                tick = state.ticks,
                length = state.snake.length(),
                "Target eaten"
            );
            debug!(target = ?state.target.position(), "Target respawned");
        }

        state.ticks += 1;

        TickInfo {
            ate_target,
            collided,
            head: state.snake.head(),
            length: state.snake.length(),
        }
    }

    /// Player-requested restart: snake back to start, target moved clear of it
    pub fn restart(&mut self, state: &mut GameState) {
        state.snake.reset();
        state
            .target
            .respawn(&state.grid, state.snake.occupied(), &mut self.rng);
        debug!(target = ?state.target.position(), "Restarted");
    }
}
