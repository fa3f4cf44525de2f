use crate::grid::{Cell, Direction};
use std::collections::VecDeque;

const INITIAL_BODY: [Cell; 3] = [Cell::new(6, 10), Cell::new(5, 10), Cell::new(4, 10)];

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Snake {
    /// Head at the front, tail at the back
    pub(crate) body: VecDeque<Cell>,
    pub(crate) direction: Direction,
    pub(crate) pending_growth: bool,
}

impl Default for Snake {
    fn default() -> Self {
        Snake {
            body: VecDeque::from(INITIAL_BODY),
            direction: Direction::East,
            pending_growth: false,
        }
    }
}

impl Snake {
    pub(crate) fn head(&self) -> Cell {
        self.body[0]
    }

    pub(crate) fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns `false` if the turn would reverse the snake onto its neck.
    pub(crate) fn turn(&mut self, new_direction: Direction) -> bool {
        if new_direction.opposite() == self.direction {
            return false;
        }
        self.direction = new_direction;
        true
    }

    pub(crate) fn grow(&mut self) {
        self.pending_growth = true;
    }

    pub(crate) fn update(&mut self) {
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);

        // Keep the tail when growing
        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop_back();
        }
    }

    pub(crate) fn hit_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&c| c == head)
    }

    pub(crate) fn reset(&mut self) {
        *self = Snake::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(cells: &[(i32, i32)], direction: Direction) -> Snake {
        Snake {
            body: cells.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
            direction,
            pending_growth: false,
        }
    }

    #[test]
    fn test_initial_snake() {
        let snake = Snake::default();
        assert_eq!(
            snake.body,
            VecDeque::from([Cell::new(6, 10), Cell::new(5, 10), Cell::new(4, 10)])
        );
        assert_eq!(snake.head(), Cell::new(6, 10));
        assert_eq!(snake.direction, Direction::East);
        assert!(!snake.pending_growth);
    }

    #[test]
    fn test_snake_movement() {
        let mut snake = Snake::default();
        snake.update();

        assert_eq!(
            snake.body,
            VecDeque::from([Cell::new(7, 10), Cell::new(6, 10), Cell::new(5, 10)])
        );
        assert_eq!(snake.len(), 3, "Length remained the same");
    }

    #[test]
    fn test_snake_growth() {
        let mut snake = Snake::default();
        let old_head = snake.head();
        let old_tail = *snake.body.back().unwrap();

        snake.grow();
        snake.update();

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), old_head.step(Direction::East));
        assert_eq!(snake.body.back(), Some(&old_tail), "Tail was kept");
        assert!(!snake.pending_growth, "Growth is consumed by one step");

        snake.update();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_turn_rejects_reversal() {
        let mut snake = Snake::default();

        assert!(!snake.turn(Direction::West));
        assert_eq!(snake.direction, Direction::East);

        assert!(snake.turn(Direction::North));
        assert_eq!(snake.direction, Direction::North);

        // Checked against the current direction, not the starting one
        assert!(snake.turn(Direction::West));
        assert!(!snake.turn(Direction::East));
        assert_eq!(snake.direction, Direction::West);
    }

    #[test]
    fn test_turn_sequences_never_reverse() {
        let mut snake = Snake::default();
        let requests = [
            Direction::West,
            Direction::South,
            Direction::North,
            Direction::East,
            Direction::West,
            Direction::North,
            Direction::South,
            Direction::West,
            Direction::East,
        ];
        for request in requests {
            let before = snake.direction;
            snake.turn(request);
            assert_ne!(snake.direction, before.opposite());
        }
    }

    #[test]
    fn test_self_collision() {
        // Head re-enters a trailing segment
        let looped = snake(&[(5, 5), (5, 6), (4, 6), (4, 5), (5, 5)], Direction::North);
        assert!(looped.hit_itself());

        // Head next to the body without overlapping it
        let touching = snake(&[(5, 5), (5, 6), (4, 6), (4, 5), (4, 4)], Direction::East);
        assert!(!touching.hit_itself());

        assert!(!Snake::default().hit_itself());
    }

    #[test]
    fn test_reset() {
        let mut snake = snake(&[(1, 1), (1, 2)], Direction::North);
        snake.grow();
        snake.reset();
        assert_eq!(snake, Snake::default());
    }
}
