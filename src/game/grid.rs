use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A square on the game grid, addressed by (column, row)
///
/// Coordinates are plain integers so that an unwrapped offset such as
/// `(-1, 0)` can be represented before [`GridWorld::wrap`] brings it back
/// in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by delta, without wrapping
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Fixed-size toroidal grid
///
/// Leaving one edge re-enters on the opposite edge. Dimensions must be
/// non-zero; [`GameConfig::validate`](super::GameConfig::validate) checks
/// this before a grid is built from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridWorld {
    width: i32,
    height: i32,
}

impl GridWorld {
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        Self {
            width: width as i32,
            height: height as i32,
        }
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Map any integer pair onto the grid with per-axis Euclidean modulo.
    ///
    /// `rem_euclid` keeps negative offsets on the far edge: `(-1, 0)` on a
    /// 32-wide grid is column 31, not -1.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell {
            x: cell.x.rem_euclid(self.width),
            y: cell.y.rem_euclid(self.height),
        }
    }

    /// One unit step in `direction`, wrapped
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        self.wrap(cell.moved_by(dx, dy))
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_in_bounds_is_identity() {
        let grid = GridWorld::new(32, 24);
        assert_eq!(grid.wrap(Cell::new(0, 0)), Cell::new(0, 0));
        assert_eq!(grid.wrap(Cell::new(31, 23)), Cell::new(31, 23));
        assert_eq!(grid.wrap(Cell::new(16, 12)), Cell::new(16, 12));
    }

    #[test]
    fn test_wrap_negative_offsets() {
        let grid = GridWorld::new(32, 24);
        assert_eq!(grid.wrap(Cell::new(-1, 0)), Cell::new(31, 0));
        assert_eq!(grid.wrap(Cell::new(0, -1)), Cell::new(0, 23));
        assert_eq!(grid.wrap(Cell::new(-33, -25)), Cell::new(31, 23));
    }

    #[test]
    fn test_wrap_overflowing_offsets() {
        let grid = GridWorld::new(32, 24);
        assert_eq!(grid.wrap(Cell::new(32, 5)), Cell::new(0, 5));
        assert_eq!(grid.wrap(Cell::new(5, 24)), Cell::new(5, 0));
        assert_eq!(grid.wrap(Cell::new(64, 48)), Cell::new(0, 0));
    }

    #[test]
    fn test_step_across_edges() {
        let grid = GridWorld::new(32, 24);
        assert_eq!(grid.step(Cell::new(31, 7), Direction::Right), Cell::new(0, 7));
        assert_eq!(grid.step(Cell::new(0, 7), Direction::Left), Cell::new(31, 7));
        assert_eq!(grid.step(Cell::new(9, 0), Direction::Up), Cell::new(9, 23));
        assert_eq!(grid.step(Cell::new(9, 23), Direction::Down), Cell::new(9, 0));
    }

    #[test]
    fn test_bounds_checking() {
        let grid = GridWorld::new(20, 20);

        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(19, 19)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(20, 0)));
        assert!(!grid.contains(Cell::new(0, 20)));
    }

    #[test]
    fn test_center_and_count() {
        let grid = GridWorld::new(32, 24);
        assert_eq!(grid.center(), Cell::new(16, 12));
        assert_eq!(grid.cell_count(), 768);
    }

    proptest! {
        #[test]
        fn prop_wrap_is_idempotent(
            width in 1usize..200,
            height in 1usize..200,
            x in -100_000i32..100_000,
            y in -100_000i32..100_000,
        ) {
            let grid = GridWorld::new(width, height);
            let once = grid.wrap(Cell::new(x, y));
            prop_assert_eq!(grid.wrap(once), once);
            prop_assert!(grid.contains(once));
        }

        #[test]
        fn prop_wrap_is_periodic(
            x in -1_000i32..1_000,
            y in -1_000i32..1_000,
            laps_x in -5i32..5,
            laps_y in -5i32..5,
        ) {
            let grid = GridWorld::new(32, 24);
            let shifted = Cell::new(x + laps_x * 32, y + laps_y * 24);
            prop_assert_eq!(grid.wrap(shifted), grid.wrap(Cell::new(x, y)));
        }
    }
}
