use crate::consts;
use ratatui::layout::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub(crate) const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub(crate) fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Direction of the unit step leading from `from` to `to`, if the two
    /// cells are orthogonal neighbours.
    pub(crate) fn between(from: Cell, to: Cell) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&dir| from.step(dir) == to)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CellDelta {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl From<Direction> for CellDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => CellDelta { x: 0, y: -1 },
            Direction::South => CellDelta { x: 0, y: 1 },
            Direction::East => CellDelta { x: 1, y: 0 },
            Direction::West => CellDelta { x: -1, y: 0 },
        }
    }
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// Neighbouring cell in `direction`. There is no wrapping, so the result
    /// may lie outside the grid.
    pub(crate) fn step(&self, direction: Direction) -> Cell {
        let delta = CellDelta::from(direction);
        Cell {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }
}

/// The square playing field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    pub(crate) cells: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Grid {
            cells: consts::GRID_CELLS,
        }
    }
}

impl Grid {
    pub(crate) fn contains(&self, cell: Cell) -> bool {
        (0..self.cells).contains(&cell.x) && (0..self.cells).contains(&cell.y)
    }

    pub(crate) fn cell_count(&self) -> usize {
        (self.cells * self.cells) as usize
    }

    #[cfg(test)]
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cells).flat_map(move |y| (0..self.cells).map(move |x| Cell { x, y }))
    }
}

/// Maps grid cells onto screen rectangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Geometry {
    pub(crate) grid: Grid,
    pub(crate) cell_size: u16,
    pub(crate) offset: u16,
}

impl Geometry {
    pub(crate) fn board_size(&self) -> u16 {
        self.grid.cells as u16 * self.cell_size
    }

    /// `(offset + x*size, offset + y*size, size, size)`, or `None` for cells
    /// outside the grid.
    pub(crate) fn cell_rect(&self, cell: Cell) -> Option<Rect> {
        if !self.grid.contains(cell) {
            return None;
        }
        Some(Rect {
            x: self.offset + cell.x as u16 * self.cell_size,
            y: self.offset + cell.y as u16 * self.cell_size,
            width: self.cell_size,
            height: self.cell_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
    }

    #[test]
    fn test_step_does_not_wrap() {
        let grid = Grid { cells: 10 };

        let cell = Cell::new(9, 0).step(Direction::East);
        assert_eq!(cell, Cell::new(10, 0));
        assert!(!grid.contains(cell));

        let cell = Cell::new(0, 0).step(Direction::West);
        assert_eq!(cell, Cell::new(-1, 0));
        assert!(!grid.contains(cell));

        let cell = Cell::new(0, 0).step(Direction::North);
        assert_eq!(cell, Cell::new(0, -1));
        assert!(!grid.contains(cell));
    }

    #[test]
    fn test_all_directions() {
        let pos = Cell::new(5, 5);
        assert_eq!(pos.step(Direction::North), Cell::new(5, 4));
        assert_eq!(pos.step(Direction::South), Cell::new(5, 6));
        assert_eq!(pos.step(Direction::East), Cell::new(6, 5));
        assert_eq!(pos.step(Direction::West), Cell::new(4, 5));
    }

    #[test]
    fn test_between() {
        let from = Cell::new(3, 3);
        for dir in Direction::ALL {
            assert_eq!(Direction::between(from, from.step(dir)), Some(dir));
        }
        assert_eq!(Direction::between(from, from), None);
        assert_eq!(Direction::between(from, Cell::new(4, 4)), None);
    }

    #[test]
    fn test_grid_bounds() {
        let grid = Grid::default();
        assert_eq!(grid.cells, 25);
        assert_eq!(grid.cell_count(), 625);
        assert_eq!(grid.cells().count(), 625);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(24, 24)));
        assert!(!grid.contains(Cell::new(25, 0)));
        assert!(!grid.contains(Cell::new(0, -1)));
    }

    #[test]
    fn test_cell_rect() {
        let geometry = Geometry {
            grid: Grid::default(),
            cell_size: 30,
            offset: 75,
        };
        assert_eq!(geometry.board_size(), 750);
        assert_eq!(
            geometry.cell_rect(Cell::new(0, 0)),
            Some(Rect::new(75, 75, 30, 30))
        );
        assert_eq!(
            geometry.cell_rect(Cell::new(6, 10)),
            Some(Rect::new(75 + 180, 75 + 300, 30, 30))
        );
        assert_eq!(geometry.cell_rect(Cell::new(25, 3)), None);
        assert_eq!(geometry.cell_rect(Cell::new(-1, 3)), None);
    }
}
