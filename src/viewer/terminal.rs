//! Terminal session: raw mode, alternate screen and mouse capture, restored
//! on drop, plus translation of crossterm events into viewer events.

use super::ansi::OutputBuffer;
use crate::geometry::{Point, Size};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// What the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    /// Left button pressed on a cell.
    Click {
        /// Column, 0-indexed.
        col: u16,
        /// Row, 0-indexed.
        row: u16,
    },
    /// Terminal resized.
    Resize {
        /// New width in cells.
        cols: u16,
        /// New height in cells.
        rows: u16,
    },
    /// Esc or `q`.
    Quit,
}

/// Owns the terminal while the viewer is on screen.
pub struct TerminalSession {
    stdout: Stdout,
}

impl TerminalSession {
    /// Switch the terminal into raw mode on the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be configured.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        log::debug!("TerminalSession: entered");
        Ok(Self { stdout })
    }

    /// Current size in cells.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Write a prepared frame.
    pub fn draw(&mut self, out: &OutputBuffer) -> io::Result<()> {
        out.flush_to(&mut self.stdout)
    }

    /// Wait up to `timeout` for an event the viewer cares about.
    pub fn poll_event(&self, timeout: Duration) -> io::Result<Option<ViewerEvent>> {
        if event::poll(timeout)? {
            return Ok(convert_event(event::read()?));
        }
        Ok(None)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        log::debug!("TerminalSession: restored");
    }
}

impl std::fmt::Debug for TerminalSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSession").finish_non_exhaustive()
    }
}

fn convert_event(event: Event) -> Option<ViewerEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(ViewerEvent::Quit),
            _ => None,
        },
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(ViewerEvent::Click {
                col: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        Event::Resize(cols, rows) => Some(ViewerEvent::Resize { cols, rows }),
        _ => None,
    }
}

/// Map the center of terminal cell `(col, row)` on a `cols x rows` screen to
/// a point on a surface of `surface` size.
#[allow(clippy::cast_possible_truncation)]
pub fn cell_to_surface(col: u16, row: u16, cols: u16, rows: u16, surface: Size) -> Point {
    let cols = i64::from(cols.max(1));
    let rows = i64::from(rows.max(1));
    let w = i64::from(surface.width);
    let h = i64::from(surface.height);
    let x = (2 * i64::from(col) + 1) * w / (2 * cols);
    let y = (2 * i64::from(row) + 1) * h / (2 * rows);
    // Bounded by the surface size, which fits in u16.
    Point::new(x as i32, y as i32)
}
