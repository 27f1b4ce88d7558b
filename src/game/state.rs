use super::{
    grid::{Cell, GridWorld},
    snake::Snake,
    target::Target,
};

/// What a cell should look like when drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Head,
    Body,
    Target,
}

/// Anything that can draw grid cells: a terminal buffer, a test recorder
pub trait Canvas {
    fn paint(&mut self, cell: Cell, sprite: Sprite);
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: GridWorld,
    pub snake: Snake,
    pub target: Target,
    /// Simulation clock; session totals live in `SessionMetrics`
    pub ticks: u64,
}

impl GameState {
    /// Create a new game state
    pub fn new(grid: GridWorld, snake: Snake, target: Target) -> Self {
        Self {
            grid,
            snake,
            target,
            ticks: 0,
        }
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.snake.contains(cell)
    }

    /// Hand every visible cell to `canvas`: target first, then body, then
    /// the head, so later sprites win if a canvas layers them.
    pub fn paint<C: Canvas>(&self, canvas: &mut C) {
        canvas.paint(self.target.position(), Sprite::Target);

        let mut cells = self.snake.occupied().iter();
        if let Some(head) = cells.next() {
            for cell in cells.rev() {
                canvas.paint(*cell, Sprite::Body);
            }
            canvas.paint(*head, Sprite::Head);
        }
    }
}
