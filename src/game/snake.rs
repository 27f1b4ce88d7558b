use super::{
    direction::Direction,
    grid::{Cell, GridWorld},
};

/// Where and how a snake begins, and what [`Snake::reset`] returns it to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeStart {
    pub cell: Cell,
    pub direction: Direction,
    /// Target length right after a reset. The body starts as a single cell
    /// and grows into this over the first ticks.
    pub length: usize,
}

/// What happened on one [`Snake::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The head moved onto a free cell
    Moved { head: Cell },
    /// The head would have entered the body, so the snake was reset.
    /// `length` is the target length it had before the reset.
    Collided { length: usize },
}

/// The player's snake
///
/// The body is ordered head first and never holds more than `length` cells.
/// Growth is lazy: [`grow`](Snake::grow) only raises the target length, and
/// the following advances keep the tail until the body catches up.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Cell>,
    length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    start: SnakeStart,
}

impl Snake {
    pub fn new(start: SnakeStart) -> Self {
        Self {
            body: vec![start.cell],
            length: start.length,
            direction: start.direction,
            pending_direction: None,
            start,
        }
    }

    /// Build a snake mid-game with an explicit body (head first).
    /// The target length is the body length.
    pub fn from_body(start: SnakeStart, body: Vec<Cell>, direction: Direction) -> Self {
        debug_assert!(!body.is_empty(), "snake body must hold at least the head");
        let length = body.len();
        Self {
            body,
            length,
            direction,
            pending_direction: None,
            start,
        }
    }

    /// Buffer a turn for the next advance.
    ///
    /// A request for the exact reverse of the current heading is dropped.
    /// A later request in the same tick replaces an earlier one.
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.direction.is_opposite(direction) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Move one cell in the current heading
    pub fn advance(&mut self, grid: &GridWorld) -> Advance {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = grid.step(self.head(), self.direction);

        // Head and neck never count as a collision.
        if self.body.iter().skip(2).any(|cell| *cell == new_head) {
            let length = self.length;
            self.reset();
            return Advance::Collided { length };
        }

        self.body.insert(0, new_head);
        if self.body.len() > self.length {
            self.body.pop();
        }

        Advance::Moved { head: new_head }
    }

    /// Raise the target length by one. The tail is kept on the next advance.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Return to the starting configuration
    pub fn reset(&mut self) {
        self.length = self.start.length;
        self.body = vec![self.start.cell];
        self.direction = self.start.direction;
        self.pending_direction = None;
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Occupied cells, head first
    pub fn occupied(&self) -> &[Cell] {
        &self.body
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Target length, which may run ahead of the occupied cell count
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }
}
