use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crate::state::Point;
use crate::{CELL_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

pub type TermInt = u16;

const GRID_W: TermInt = (SCREEN_WIDTH / CELL_SIZE) as TermInt;
const GRID_H: TermInt = (SCREEN_HEIGHT / CELL_SIZE) as TermInt;

/// Wraps the terminal as the drawing surface: one terminal cell per game
/// cell, with the playfield centered inside a drawn border.
pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    origin: (TermInt, TermInt),
    message_shown: bool,
}

impl TermManager {
    pub fn new() -> Self {
        let (width, height) = terminal::size().expect("Error reading size.");

        // The border adds one cell on every side
        let origin = (
            width.saturating_sub(GRID_W + 2) / 2,
            height.saturating_sub(GRID_H + 2) / 2,
        );

        TermManager { width, height, stdout: stdout(), origin, message_shown: false }
    }

    pub fn setup(&mut self) {
        if self.width < GRID_W + 2 || self.height < GRID_H + 2 {
            eprintln!(
                "Terminal too small: need at least {}x{} cells.",
                GRID_W + 2,
                GRID_H + 2
            );
            std::process::exit(1);
        }

        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        self.set_raw_mode(true);
        self.set_cursor_visibility(false);
    }

    pub fn restore(&mut self) {
        self.set_raw_mode(false);
        self.set_cursor_visibility(true);
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    /// Drains every key event the host has queued since the last frame.
    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    pub fn clear(&mut self) {
        execute!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
        self.message_shown = false;
    }

    pub fn draw_borders(&mut self) {
        let (ox, oy) = self.origin;
        let end_x = ox + GRID_W + 1;
        let end_y = oy + GRID_H + 1;

        self.set_color(Color::Reset);

        for x in ox..=end_x {
            let ch = if x == ox || x == end_x { '+' } else { '-' };
            self.print_at((x, oy), ch);
            self.print_at((x, end_y), ch);
        }

        for y in oy + 1..end_y {
            self.print_at((ox, y), '|');
            self.print_at((end_x, y), '|');
        }
    }

    /// Blanks the inside of the playfield, queued so the following cell
    /// draws land in the same flush.
    pub fn clear_playfield(&mut self) {
        let (ox, oy) = self.origin;
        let blank = " ".repeat(GRID_W as usize);

        for y in 0..GRID_H {
            queue!(
                self.stdout,
                cursor::MoveTo(ox + 1, oy + 1 + y),
                style::Print(&blank)
            )
            .unwrap();
        }
    }

    /// Draws one game cell. `pos` is in pixel coordinates, grid-aligned.
    pub fn draw_cell(&mut self, pos: Point, ch: char, color: Color) {
        let x = self.origin.0 + 1 + (pos.x / CELL_SIZE) as TermInt;
        let y = self.origin.1 + 1 + (pos.y / CELL_SIZE) as TermInt;

        self.set_color(color);
        self.print_at((x, y), ch);
    }

    /// Replaces the playfield with a centered message, one line per entry.
    pub fn show_message(&mut self, lines: &[&str]) {
        self.clear();
        self.set_color(Color::White);

        let top = (self.height / 2).saturating_sub(lines.len() as TermInt / 2);

        for (i, line) in lines.iter().enumerate() {
            let x = (self.width / 2).saturating_sub(line.len() as TermInt / 2);
            queue!(
                self.stdout,
                cursor::MoveTo(x, top + i as TermInt),
                style::Print(line)
            )
            .unwrap();
        }

        self.flush();
        self.message_shown = true;
    }

    pub fn hide_message(&mut self) {
        if self.message_shown {
            self.clear();
        }
    }

    pub fn has_message(&self) -> bool {
        self.message_shown
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at(&mut self, pos: (TermInt, TermInt), ch: char) {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch)).unwrap();
    }

    fn set_color(&mut self, color: Color) {
        queue!(self.stdout, style::SetForegroundColor(color)).unwrap();
    }

    fn set_raw_mode(&self, option: bool) {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.expect("Error setting raw mode.");
    }

    fn set_cursor_visibility(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.expect("Error setting cursor visibility.");
    }
}
