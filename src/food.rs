use crate::grid::{Cell, Grid};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Food {
    pub(crate) position: Cell,
}

impl Food {
    pub(crate) fn new<'a>(
        grid: Grid,
        occupied: impl IntoIterator<Item = &'a Cell> + Clone,
        rng: &mut impl Rng,
    ) -> Self {
        Food {
            position: Self::generate_random_position(grid, occupied, rng),
        }
    }

    pub(crate) fn generate_random_cell(grid: Grid, rng: &mut impl Rng) -> Cell {
        Cell {
            x: rng.gen_range(0..grid.cells),
            y: rng.gen_range(0..grid.cells),
        }
    }

    /// Draws random cells until one falls outside `occupied`. Never returns
    /// if every cell of the grid is occupied.
    pub(crate) fn generate_random_position<'a>(
        grid: Grid,
        occupied: impl IntoIterator<Item = &'a Cell> + Clone,
        rng: &mut impl Rng,
    ) -> Cell {
        loop {
            let cell = Self::generate_random_cell(grid, rng);
            if !occupied.clone().into_iter().any(|c| *c == cell) {
                return cell;
            }
        }
    }

    pub(crate) fn relocate<'a>(
        &mut self,
        grid: Grid,
        occupied: impl IntoIterator<Item = &'a Cell> + Clone,
        rng: &mut impl Rng,
    ) {
        self.position = Self::generate_random_position(grid, occupied, rng);
        log::debug!("Food placed at {:?}", self.position);
    }
}
