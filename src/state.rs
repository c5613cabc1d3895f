use std::time::Duration;

use crate::{CELL_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

const FOOD_RETRY_LIMIT: u32 = 64;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Declaration order matters: the discriminants 0..=3 are the legacy
/// heading encoding (0 = Right, 1 = Down, 2 = Left, 3 = Up).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Heading {
    Right,
    Down,
    Left,
    Up,
}

impl Heading {
    fn delta(self) -> (i32, i32) {
        match self {
            Heading::Right => (CELL_SIZE, 0),
            Heading::Down => (0, CELL_SIZE),
            Heading::Left => (-CELL_SIZE, 0),
            Heading::Up => (0, -CELL_SIZE),
        }
    }
}

/// The whole simulation: snake body (head first), current heading, food
/// position, the tick accumulator and the game-over flag. Update and
/// render both work off this one struct, there are no ambient globals.
pub struct GameState {
    pub snake: Vec<Point>,
    pub heading: Heading,
    pub food: Point,
    pub game_over: bool,
    timer: Duration,
    rng: StdRng,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic variant for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        GameState {
            snake: initial_snake(),
            heading: Heading::Right,
            food: initial_food(),
            game_over: false,
            timer: Duration::from_millis(0),
            rng,
        }
    }

    /// Puts everything back to the starting layout. Used when leaving the
    /// replay screen.
    pub fn reset(&mut self) {
        self.snake = initial_snake();
        self.heading = Heading::Right;
        self.food = initial_food();
        self.game_over = false;
        self.timer = Duration::from_millis(0);
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Accumulates frame time and fires exactly one tick once the fixed
    /// interval has elapsed. Returns whether a tick ran, so the simulation
    /// rate stays independent of the frame rate.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.timer += delta;

        if self.timer >= TICK_INTERVAL {
            self.tick();
            self.timer = Duration::from_millis(0);
            true
        } else {
            false
        }
    }

    /// One discrete simulation step.
    pub fn tick(&mut self) {
        // Body follow, tail towards head, so every segment reads its
        // predecessor before that one is overwritten
        for i in (1..self.snake.len()).rev() {
            self.snake[i] = self.snake[i - 1];
        }

        let (dx, dy) = self.heading.delta();
        self.snake[0].x += dx;
        self.snake[0].y += dy;

        let head = self.snake[0];

        if head.x < 0 || head.x >= SCREEN_WIDTH || head.y < 0 || head.y >= SCREEN_HEIGHT {
            self.game_over = true;
        }

        if self.snake[1..].contains(&head) {
            self.game_over = true;
        }

        if head == self.food {
            // The new segment starts out on top of the tail and gets
            // dragged apart by the next body-follow pass
            let tail = self.snake[self.snake.len() - 1];
            self.snake.push(tail);
            self.generate_food();
        }
    }

    /// Moves the food to a random free cell. A handful of uniform picks
    /// almost always succeeds; once the snake covers enough of the board
    /// we fall back to choosing from the enumerated free cells so this
    /// always terminates. With no free cell left the food stays put.
    pub fn generate_food(&mut self) {
        for _ in 0..FOOD_RETRY_LIMIT {
            let cell = Point::new(
                self.rng.gen_range(0..SCREEN_WIDTH / CELL_SIZE) * CELL_SIZE,
                self.rng.gen_range(0..SCREEN_HEIGHT / CELL_SIZE) * CELL_SIZE,
            );

            if !self.snake.contains(&cell) {
                self.food = cell;
                return;
            }
        }

        let mut free = vec![];
        for cy in 0..SCREEN_HEIGHT / CELL_SIZE {
            for cx in 0..SCREEN_WIDTH / CELL_SIZE {
                let cell = Point::new(cx * CELL_SIZE, cy * CELL_SIZE);
                if !self.snake.contains(&cell) {
                    free.push(cell);
                }
            }
        }

        if let Some(&cell) = free.choose(&mut self.rng) {
            self.food = cell;
        }
    }
}

fn initial_snake() -> Vec<Point> {
    vec![
        Point::new(125, 300),
        Point::new(100, 300),
        Point::new(75, 300),
    ]
}

fn initial_food() -> Point {
    Point::new(325, 300)
}
