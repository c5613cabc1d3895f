use gridsnake::state::{GameState, Heading, Point};
use gridsnake::{CELL_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

#[test]
fn first_tick_moves_the_snake_one_cell_right() {
    let mut state = GameState::with_seed(1);

    assert_eq!(state.snake, vec![p(125, 300), p(100, 300), p(75, 300)]);

    state.tick();

    assert_eq!(state.snake, vec![p(150, 300), p(125, 300), p(100, 300)]);
    assert!(!state.game_over);
}

#[test]
fn body_segments_follow_their_predecessor() {
    let mut state = GameState::with_seed(2);

    state.tick();
    state.set_heading(Heading::Down);

    let before = state.snake.clone();
    state.tick();

    assert_eq!(state.snake[0], p(before[0].x, before[0].y + CELL_SIZE));
    assert_eq!(&state.snake[1..], &before[..before.len() - 1]);
}

#[test]
fn leaving_the_board_ends_the_game() {
    let mut state = GameState::with_seed(3);
    state.snake = vec![p(600, 300), p(575, 300), p(550, 300)];
    state.heading = Heading::Right;

    state.tick();

    assert_eq!(state.snake[0].x, SCREEN_WIDTH);
    assert!(state.game_over);

    // The flag only clears on an explicit reset
    state.tick();
    assert!(state.game_over);
}

#[test]
fn moving_into_own_body_ends_the_game() {
    let mut state = GameState::with_seed(4);
    state.snake = vec![
        p(100, 100),
        p(125, 100),
        p(125, 125),
        p(100, 125),
        p(75, 125),
    ];
    state.heading = Heading::Down;

    state.tick();

    assert!(state.game_over);
}

#[test]
fn eating_food_grows_the_snake_and_moves_the_food() {
    let mut state = GameState::with_seed(5);

    // Eight ticks heading right take the head from (125,300) onto the
    // initial food at (325,300)
    for _ in 0..8 {
        state.tick();
    }

    assert!(!state.game_over);
    assert_eq!(state.snake[0], p(325, 300));
    assert_eq!(state.snake.len(), 4);

    // The new segment starts out coincident with the tail
    assert_eq!(state.snake[2], state.snake[3]);

    assert_ne!(state.food, p(325, 300));
    assert!(!state.snake.contains(&state.food));

    // One more tick drags the pair apart again; park the food out of the
    // snake's path first
    state.food = p(0, 0);
    let len = state.snake.len();
    state.tick();
    assert_eq!(state.snake.len(), len);
    assert_ne!(state.snake[2], state.snake[3]);
}

#[test]
fn food_never_lands_on_the_snake() {
    let mut state = GameState::with_seed(6);

    // Park a long snake across the middle of the board
    state.snake = (0..20).map(|i| p(i * CELL_SIZE, 300)).collect();

    for _ in 0..500 {
        state.generate_food();

        let food = state.food;
        assert!(food.x >= 0 && food.x < SCREEN_WIDTH);
        assert!(food.y >= 0 && food.y < SCREEN_HEIGHT);
        assert_eq!(food.x % CELL_SIZE, 0);
        assert_eq!(food.y % CELL_SIZE, 0);
        assert!(!state.snake.contains(&food));
    }
}

#[test]
fn food_placement_falls_back_to_the_last_free_cell() {
    let mut state = GameState::with_seed(7);

    // Fill the whole board except one cell
    let last_free = p(600, 600);
    state.snake = (0..SCREEN_HEIGHT / CELL_SIZE)
        .flat_map(|cy| (0..SCREEN_WIDTH / CELL_SIZE).map(move |cx| p(cx * CELL_SIZE, cy * CELL_SIZE)))
        .filter(|cell| *cell != last_free)
        .collect();

    state.generate_food();

    assert_eq!(state.food, last_free);
}

#[test]
fn food_stays_put_on_a_full_board() {
    let mut state = GameState::with_seed(8);

    state.snake = (0..SCREEN_HEIGHT / CELL_SIZE)
        .flat_map(|cy| (0..SCREEN_WIDTH / CELL_SIZE).map(move |cx| p(cx * CELL_SIZE, cy * CELL_SIZE)))
        .collect();
    state.food = p(325, 300);

    state.generate_food();

    assert_eq!(state.food, p(325, 300));
}

#[test]
fn reset_restores_the_initial_layout() {
    let mut state = GameState::with_seed(9);

    state.set_heading(Heading::Down);
    for _ in 0..13 {
        state.tick();
    }
    assert!(state.game_over, "13 ticks downward should hit the wall");

    state.reset();

    assert_eq!(state.snake, vec![p(125, 300), p(100, 300), p(75, 300)]);
    assert_eq!(state.heading, Heading::Right);
    assert_eq!(state.food, p(325, 300));
    assert!(!state.game_over);
}

#[test]
fn snake_length_never_decreases() {
    let mut state = GameState::with_seed(10);
    let mut len = state.snake.len();

    for _ in 0..8 {
        state.tick();
        assert!(state.snake.len() >= len);
        len = state.snake.len();
    }

    assert_eq!(len, 4);
}
