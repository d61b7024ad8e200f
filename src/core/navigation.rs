//! # Navigation
//!
//! Forward-only screen sequencing with a history stack for Back.
//!
//! ```text
//!   Welcome ──welcome completed──► Login ──login succeeded──► Home
//!      ▲                             │ ▲                        │
//!      └────────────back─────────────┘ └──────────back──────────┘
//! ```
//!
//! Every forward transition pushes the screen being left. `back()` pops it.
//! An event delivered outside its source screen is rejected with
//! `NavError::InvalidTransition` and leaves the state untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Welcome,
    Login,
    Home,
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Login => "Log in",
            Screen::Home => "Home",
        }
    }
}

/// The user intents that move between screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    WelcomeCompleted,
    LoginSucceeded,
    Back,
}

impl fmt::Display for NavEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NavEvent::WelcomeCompleted => "welcome completed",
            NavEvent::LoginSucceeded => "login succeeded",
            NavEvent::Back => "back",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    InvalidTransition { event: NavEvent, from: Screen },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::InvalidTransition { event, from } => {
                write!(f, "cannot handle '{event}' on the {} screen", from.label())
            }
        }
    }
}

impl std::error::Error for NavError {}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Screen,
    history: Vec<Screen>,
}

impl Navigator {
    /// Start at `initial` with an empty history.
    pub fn start(initial: Screen) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Screens that Back would return to, oldest first.
    pub fn history(&self) -> &[Screen] {
        &self.history
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn on_welcome_completed(&mut self) -> Result<Screen, NavError> {
        self.advance(NavEvent::WelcomeCompleted, Screen::Welcome, Screen::Login)
    }

    /// No credential check happens here.
    pub fn on_login_succeed(&mut self) -> Result<Screen, NavError> {
        self.advance(NavEvent::LoginSucceeded, Screen::Login, Screen::Home)
    }

    pub fn back(&mut self) -> Result<Screen, NavError> {
        let previous = self.history.pop().ok_or(NavError::InvalidTransition {
            event: NavEvent::Back,
            from: self.current,
        })?;
        self.current = previous;
        Ok(previous)
    }

    pub fn handle(&mut self, event: NavEvent) -> Result<Screen, NavError> {
        match event {
            NavEvent::WelcomeCompleted => self.on_welcome_completed(),
            NavEvent::LoginSucceeded => self.on_login_succeed(),
            NavEvent::Back => self.back(),
        }
    }

    fn advance(&mut self, event: NavEvent, from: Screen, to: Screen) -> Result<Screen, NavError> {
        if self.current != from {
            return Err(NavError::InvalidTransition {
                event,
                from: self.current,
            });
        }
        self.history.push(from);
        self.current = to;
        Ok(to)
    }
}
