pub mod game;
pub mod state;
pub mod term;

// The playfield is a fixed logical surface addressed in pixel coordinates,
// with every position aligned to a 25x25 cell.
pub const SCREEN_WIDTH: i32 = 625;
pub const SCREEN_HEIGHT: i32 = 625;
pub const CELL_SIZE: i32 = 25;
