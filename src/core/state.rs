//! # Application State
//!
//! Core state for Bloom, held in one `App` context that is passed explicitly
//! to `update()`. No TUI types here; presentation state lives in `tui`.
//!
//! ```text
//! App
//! ├── navigator: Navigator          // current screen + back stack
//! ├── catalog: Catalog              // static themes and flowers
//! ├── screen: ScreenState           // active screen + its ephemeral state
//! ├── status_message: String        // status bar text
//! └── observers: Vec<Box<dyn RedrawObserver>>
//! ```
//!
//! `ScreenState` is rebuilt from scratch on every screen change, so nothing
//! typed on Login or checked on Home survives leaving that screen.

use crate::core::catalog::{Catalog, load_catalog};
use crate::core::home::HomeListState;
use crate::core::login::LoginForm;
use crate::core::navigation::{Navigator, Screen};

/// Something that wants to know when the core state changed.
///
/// `update()` calls `request_redraw` once after every mutation. How and when
/// the redraw happens is up to the implementor.
pub trait RedrawObserver {
    fn request_redraw(&self);
}

/// The active screen together with the state that only exists while it is
/// shown.
#[derive(Debug, Clone)]
pub enum ScreenState {
    Welcome,
    Login(LoginForm),
    Home(HomeListState),
}

impl ScreenState {
    /// Fresh state for `screen`.
    pub fn enter(screen: Screen, catalog: &Catalog) -> Self {
        match screen {
            Screen::Welcome => ScreenState::Welcome,
            Screen::Login => ScreenState::Login(LoginForm::new()),
            Screen::Home => ScreenState::Home(HomeListState::new(*catalog)),
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            ScreenState::Welcome => Screen::Welcome,
            ScreenState::Login(_) => Screen::Login,
            ScreenState::Home(_) => Screen::Home,
        }
    }
}

pub struct App {
    pub navigator: Navigator,
    pub catalog: Catalog,
    pub screen: ScreenState,
    pub status_message: String,
    observers: Vec<Box<dyn RedrawObserver>>,
}

impl App {
    pub fn new(initial: Screen) -> Self {
        let catalog = load_catalog();
        Self {
            navigator: Navigator::start(initial),
            catalog,
            screen: ScreenState::enter(initial, &catalog),
            status_message: String::new(),
            observers: Vec::new(),
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn home(&self) -> Option<&HomeListState> {
        match &self.screen {
            ScreenState::Home(home) => Some(home),
            _ => None,
        }
    }

    pub fn login(&self) -> Option<&LoginForm> {
        match &self.screen {
            ScreenState::Login(form) => Some(form),
            _ => None,
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn RedrawObserver>) {
        self.observers.push(observer);
    }

    pub(crate) fn notify_redraw(&self) {
        for observer in &self.observers {
            observer.request_redraw();
        }
    }

    /// Replace the screen state with a fresh one for the navigator's screen.
    pub(crate) fn sync_screen(&mut self) {
        self.screen = ScreenState::enter(self.navigator.current(), &self.catalog);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Screen::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CountingObserver, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.current_screen(), Screen::Welcome);
        assert!(matches!(app.screen, ScreenState::Welcome));
        assert!(app.status_message.is_empty());
        assert!(app.home().is_none());
    }

    #[test]
    fn test_app_can_start_on_home() {
        let app = App::new(Screen::Home);
        let home = app.home().expect("home state");
        assert_eq!(home.search_text(), "");
        assert_eq!(home.visible_flowers().len(), 6);
    }

    #[test]
    fn test_screen_state_matches_screen() {
        let catalog = load_catalog();
        for screen in [Screen::Welcome, Screen::Login, Screen::Home] {
            assert_eq!(ScreenState::enter(screen, &catalog).screen(), screen);
        }
    }

    #[test]
    fn test_notify_reaches_all_observers() {
        let mut app = test_app();
        let (a, a_count) = CountingObserver::new();
        let (b, b_count) = CountingObserver::new();
        app.subscribe(Box::new(a));
        app.subscribe(Box::new(b));
        app.notify_redraw();
        assert_eq!(a_count.get(), 1);
        assert_eq!(b_count.get(), 1);
    }
}
