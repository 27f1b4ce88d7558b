use rand::Rng;

use super::grid::{Cell, GridWorld};

/// The single collectible cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    position: Cell,
}

impl Target {
    /// Place a new target on a random cell outside `occupied`
    pub fn spawn<R: Rng>(grid: &GridWorld, occupied: &[Cell], rng: &mut R) -> Self {
        let mut target = Self {
            position: Cell::new(0, 0),
        };
        target.respawn(grid, occupied, rng);
        target
    }

    /// A target at a fixed cell, for scripted scenarios
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Move to a uniformly random cell outside `occupied`.
    ///
    /// Rejection sampling: keeps drawing until a free cell comes up. The
    /// caller must leave at least one free cell; a full grid never returns.
    pub fn respawn<R: Rng>(&mut self, grid: &GridWorld, occupied: &[Cell], rng: &mut R) {
        debug_assert!(
            occupied.len() < grid.cell_count(),
            "no free cell left for the target"
        );

        loop {
            let x = rng.gen_range(0..grid.width()) as i32;
            let y = rng.gen_range(0..grid.height()) as i32;
            let cell = Cell::new(x, y);

            if !occupied.contains(&cell) {
                self.position = cell;
                return;
            }
        }
    }

    pub fn position(&self) -> Cell {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_spawn_in_bounds() {
        let grid = GridWorld::new(32, 24);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let target = Target::spawn(&grid, &[], &mut rng);
            assert!(grid.contains(target.position()));
        }
    }

    #[test]
    fn test_respawn_finds_last_free_cell() {
        let grid = GridWorld::new(3, 3);
        let free = Cell::new(2, 1);
        let occupied: Vec<Cell> = (0..3)
            .flat_map(|y| (0..3).map(move |x| Cell::new(x, y)))
            .filter(|cell| *cell != free)
            .collect();
        let mut rng = StdRng::seed_from_u64(42);

        let mut target = Target::at(Cell::new(0, 0));
        target.respawn(&grid, &occupied, &mut rng);

        assert_eq!(target.position(), free);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let grid = GridWorld::new(32, 24);
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let mut first = Target::at(Cell::new(0, 0));
        let mut second = Target::at(Cell::new(0, 0));

        for _ in 0..20 {
            first.respawn(&grid, &[], &mut a);
            second.respawn(&grid, &[], &mut b);
            assert_eq!(first, second);
        }
    }

    proptest! {
        #[test]
        fn prop_respawn_avoids_occupied(
            seed in any::<u64>(),
            mask in proptest::collection::vec(any::<bool>(), 30),
            free_index in 0usize..30,
        ) {
            let grid = GridWorld::new(6, 5);
            let occupied: Vec<Cell> = mask
                .iter()
                .enumerate()
                .filter(|(index, taken)| **taken && *index != free_index)
                .map(|(index, _)| Cell::new((index % 6) as i32, (index / 6) as i32))
                .collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut target = Target::at(Cell::new(0, 0));

            for _ in 0..10 {
                target.respawn(&grid, &occupied, &mut rng);
                prop_assert!(grid.contains(target.position()));
                prop_assert!(!occupied.contains(&target.position()));
            }
        }
    }
}
