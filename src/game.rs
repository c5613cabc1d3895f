use std::{process::exit, thread::sleep, time::{Duration, Instant}};

use crate::state::{GameState, Heading};
use crate::term::TermManager;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color;

const FRAME_INTERVAL_MS: u64 = 5;

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';

/// Drives the two-state loop: Playing runs the fixed-step simulation and
/// draws the playfield, the game-over screen shows the replay prompt and
/// waits for any key.
pub struct SnakeGame {
    term: TermManager,
    state: GameState,
}

impl SnakeGame {
    pub fn new() -> Self {
        SnakeGame {
            term: TermManager::new(),
            state: GameState::new(),
        }
    }

    pub fn initialize(&mut self) {
        self.term.setup();
        self.term.clear();
    }

    /// Runs forever; only CTRL+C leaves.
    pub fn play(&mut self) {
        let mut last_frame = Instant::now();

        loop {
            sleep(Duration::from_millis(FRAME_INTERVAL_MS));

            for key_ev in self.term.read_key_events_queue() {
                self.handle_key(&key_ev);
            }

            let now = Instant::now();
            let delta = now - last_frame;
            last_frame = now;

            if !self.state.game_over {
                self.state.advance(delta);
            }

            if self.state.game_over {
                self.render_game_over();
            } else {
                self.render_playing();
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    /// The one persistent key handler; branches on the game-over flag
    /// instead of swapping listeners.
    fn handle_key(&mut self, ev: &KeyEvent) {
        if is_ctrl_c(ev) {
            self.clean_exit();
        }

        if self.state.game_over {
            // Any key leaves the replay screen with a fresh board
            self.state.reset();
            self.term.hide_message();
            return;
        }

        match ev.code {
            KeyCode::Char('w') => self.state.set_heading(Heading::Up),
            KeyCode::Char('a') => self.state.set_heading(Heading::Left),
            KeyCode::Char('s') => self.state.set_heading(Heading::Down),
            KeyCode::Char('d') => self.state.set_heading(Heading::Right),
            _ => {}
        }
    }

    fn render_playing(&mut self) {
        self.term.clear_playfield();
        self.term.draw_borders();

        for pos in &self.state.snake {
            self.term.draw_cell(*pos, SNAKE_BODY_CHAR, Color::Green);
        }

        self.term.draw_cell(self.state.food, FOOD_CHAR, Color::Red);
        self.term.flush();
    }

    fn render_game_over(&mut self) {
        if !self.term.has_message() {
            self.term.show_message(&["Game over!", "", "Press any key to replay"]);
        }
    }

    fn clean_exit(&mut self) {
        self.term.restore();
        exit(0);
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
