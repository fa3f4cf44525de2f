use crate::food::Food;
use crate::grid::{Direction, Grid};
use crate::snake::Snake;
use log::{debug, info};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GameState {
    Start,
    Running,
    Paused,
    Stopped,
}

impl GameState {
    /// Start screen confirmed.
    pub(crate) fn confirm(self) -> Self {
        match self {
            GameState::Start => GameState::Running,
            other => other,
        }
    }

    pub(crate) fn toggle_pause(self) -> Self {
        match self {
            GameState::Running => GameState::Paused,
            GameState::Paused => GameState::Running,
            other => other,
        }
    }

    pub(crate) fn restart(self) -> Self {
        match self {
            GameState::Stopped => GameState::Running,
            other => other,
        }
    }

    /// Snake ran into a wall or itself.
    pub(crate) fn collide(self) -> Self {
        match self {
            GameState::Running => GameState::Stopped,
            other => other,
        }
    }
}

/// Notifications for the presentation layer, raised by [`Game::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Signal {
    Eat,
    GameOver,
}

#[derive(Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    pub(crate) state: GameState,
    pub(crate) score: u32,
    pub(crate) snake: Snake,
    pub(crate) food: Food,
    signals: Vec<Signal>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new() -> Self {
        Game::new_with_rng(Grid::default(), rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(grid: Grid, mut rng: R) -> Game<R> {
        let snake = Snake::default();
        let food = Food::new(grid, snake.body(), &mut rng);
        Game {
            rng,
            grid,
            state: GameState::Start,
            score: 0,
            snake,
            food,
            signals: Vec::new(),
        }
    }

    /// One simulation step. Does nothing unless the game is running.
    pub(crate) fn update(&mut self) {
        if self.state != GameState::Running {
            return;
        }
        self.snake.update();
        self.check_collision_with_food();
        self.check_collision_with_walls();
        self.check_collision_with_tail();
    }

    fn check_collision_with_food(&mut self) {
        if self.snake.head() == self.food.position {
            self.food.relocate(self.grid, self.snake.body(), &mut self.rng);
            self.snake.grow();
            self.score += 1;
            debug!(
                "Snack eaten, score {}, {} of {} cells taken",
                self.score,
                self.snake.len(),
                self.grid.cell_count()
            );
            self.signals.push(Signal::Eat);
        }
    }

    fn check_collision_with_walls(&mut self) {
        if !self.grid.contains(self.snake.head()) {
            self.game_over();
        }
    }

    fn check_collision_with_tail(&mut self) {
        if self.snake.hit_itself() {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        // Wall and tail checks may both fire in one step
        if self.state != GameState::Running {
            return;
        }
        info!("Game over at {:?}, final score {}", self.snake.head(), self.score);
        self.signals.push(Signal::GameOver);
        self.state = self.state.collide();
    }

    /// Starts a fresh round after a game over: new snake, new food, zero
    /// score. Ignored in any other state.
    pub(crate) fn reset(&mut self) {
        let next = self.state.restart();
        if next == self.state {
            return;
        }
        self.snake.reset();
        self.food.relocate(self.grid, self.snake.body(), &mut self.rng);
        self.state = next;
        self.score = 0;
        info!("Game restarted");
    }
}

impl<R> Game<R> {
    pub(crate) fn state(&self) -> GameState {
        self.state
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> &Food {
        &self.food
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn start(&mut self) {
        let next = self.state.confirm();
        if next != self.state {
            info!("Game started");
            self.state = next;
        }
    }

    pub(crate) fn toggle_pause(&mut self) {
        let next = self.state.toggle_pause();
        if next != self.state {
            info!("{:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    /// Turns the snake, unless paused, stopped or reversing.
    pub(crate) fn steer(&mut self, direction: Direction) {
        if self.state == GameState::Running && !self.snake.turn(direction) {
            debug!("Ignored reversal to {:?}", direction);
        }
    }

    pub(crate) fn take_signals(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }
}
