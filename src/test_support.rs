//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::Cell;
use std::rc::Rc;

use crate::core::navigation::Screen;
use crate::core::state::{App, RedrawObserver};

/// Counts how many redraws the core asked for.
pub struct CountingObserver {
    count: Rc<Cell<usize>>,
}

impl CountingObserver {
    /// Returns the observer and a handle to read its count.
    pub fn new() -> (Self, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        (
            Self {
                count: count.clone(),
            },
            count,
        )
    }
}

impl RedrawObserver for CountingObserver {
    fn request_redraw(&self) {
        self.count.set(self.count.get() + 1);
    }
}

/// Creates a test App on the Welcome screen.
pub fn test_app() -> App {
    App::new(Screen::Welcome)
}

/// Renders with `draw` on a `TestBackend` and returns the buffer as text.
pub fn render_to_string(
    width: u16,
    height: u16,
    draw: impl FnOnce(&mut ratatui::Frame),
) -> String {
    let backend = ratatui::backend::TestBackend::new(width, height);
    let mut terminal = ratatui::Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
