//! Bloom library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

use crate::core::navigation::Screen;

/// Screen to open on, as accepted by `--start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StartScreen {
    Welcome,
    Login,
    Home,
}

impl From<StartScreen> for Screen {
    fn from(start: StartScreen) -> Self {
        match start {
            StartScreen::Welcome => Screen::Welcome,
            StartScreen::Login => Screen::Login,
            StartScreen::Home => Screen::Home,
        }
    }
}
