//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screens,
//! and translates keyboard events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps in `poll` until input arrives and
//! only draws when something changed:
//!
//! - Core mutations flip a `RedrawFlag` registered as the app's
//!   `RedrawObserver`.
//! - Input that only moves presentation state (focus, cursors) and terminal
//!   resizes set `needs_redraw` directly.
//!
//! ## Screen Views
//!
//! `TuiState::view` holds the presentation state of the active screen. When
//! the core switches screens, `sync()` throws the old view away and builds a
//! fresh one, mirroring how `ScreenState` is rebuilt in the core.

mod component;
mod components;
mod event;
mod strings;
mod ui;

use log::{debug, info};
use std::cell::Cell;
use std::io::stdout;
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Screen;
use crate::core::state::{App, RedrawObserver, ScreenState};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    HomeEvent, HomeView, LoginEvent, LoginView, WelcomeEvent, WelcomeView,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// Presentation state of the active screen.
pub enum ScreenView {
    Welcome(WelcomeView),
    Login(LoginView),
    Home(HomeView),
}

impl ScreenView {
    fn for_screen(screen: Screen, app: &App) -> Self {
        match screen {
            Screen::Welcome => ScreenView::Welcome(WelcomeView::new()),
            Screen::Login => ScreenView::Login(LoginView::new()),
            Screen::Home => ScreenView::Home(HomeView::new(app.catalog)),
        }
    }

    fn screen(&self) -> Screen {
        match self {
            ScreenView::Welcome(_) => Screen::Welcome,
            ScreenView::Login(_) => Screen::Login,
            ScreenView::Home(_) => Screen::Home,
        }
    }
}

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub view: ScreenView,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let mut tui = Self {
            view: ScreenView::for_screen(app.current_screen(), app),
        };
        tui.sync(app);
        tui
    }

    /// Rebuild the view on a screen change, then copy core props into it.
    pub fn sync(&mut self, app: &App) {
        if self.view.screen() != app.current_screen() {
            debug!(
                "Resetting view: {:?} -> {:?}",
                self.view.screen(),
                app.current_screen()
            );
            self.view = ScreenView::for_screen(app.current_screen(), app);
        }
        match (&mut self.view, &app.screen) {
            (ScreenView::Login(view), ScreenState::Login(form)) => view.sync(form),
            (ScreenView::Home(view), ScreenState::Home(home)) => view.sync(home),
            _ => {}
        }
    }

    /// Route an input event to the active screen and return the resulting core action.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::ForceQuit => return Some(Action::Quit),
            TuiEvent::Escape => return Some(Action::Back),
            _ => {}
        }
        match &mut self.view {
            ScreenView::Welcome(view) => match view.handle_event(event)? {
                WelcomeEvent::Completed(button) => {
                    debug!("Welcome completed via {:?}", button);
                    Some(Action::WelcomeCompleted)
                }
            },
            ScreenView::Login(view) => Some(match view.handle_event(event)? {
                LoginEvent::EmailChanged(text) => Action::SetEmail(text),
                LoginEvent::PasswordChanged(text) => Action::SetPassword(text),
                LoginEvent::Submit => Action::LoginSucceeded,
            }),
            ScreenView::Home(view) => Some(match view.handle_event(event)? {
                HomeEvent::SearchChanged(text) => Action::SetSearchText(text),
                HomeEvent::ToggleSelected(title) => Action::ToggleSelected(title),
                HomeEvent::SelectTab(tab) => Action::SetActiveTab(tab),
            }),
        }
    }
}

/// Redraw observer backed by a flag the event loop polls.
#[derive(Clone, Default)]
pub struct RedrawFlag(Rc<Cell<bool>>);

impl RedrawFlag {
    /// Returns whether a redraw was requested and clears the request.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

impl RedrawObserver for RedrawFlag {
    fn request_redraw(&self) {
        self.0.set(true);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Non-blinking: draw() resets the blink timer
        )?;
        info!("Terminal modes enabled (mouse scroll, bracketed paste, steady cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(config.start_screen);
    let redraw = RedrawFlag::default();
    app.subscribe(Box::new(redraw.clone()));
    let mut tui = TuiState::new(&app);

    info!("Starting on {:?}", app.current_screen());

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut tui, &redraw);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    redraw: &RedrawFlag,
) -> std::io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.sync(app);

        if redraw.take() || needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut pending = vec![first_event];
        while let Some(event) = poll_event_immediate()? {
            pending.push(event);
        }

        for event in pending {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            let Some(action) = tui.handle_event(&event) else {
                continue;
            };
            if update(app, action) == Effect::Quit {
                info!("Quit requested");
                return Ok(());
            }
            // The next event may target a freshly entered screen
            tui.sync(app);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::home::Tab;
    use crate::test_support::test_app;

    fn dispatch(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) {
        for event in events {
            if let Some(action) = tui.handle_event(event) {
                update(app, action);
                tui.sync(app);
            }
        }
    }

    #[test]
    fn test_keyboard_walkthrough_to_home() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);

        dispatch(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(app.current_screen(), Screen::Login);
        assert!(matches!(tui.view, ScreenView::Login(_)));

        dispatch(
            &mut app,
            &mut tui,
            &[
                TuiEvent::InputChar('a'),
                TuiEvent::Submit, // email → password
                TuiEvent::InputChar('b'),
                TuiEvent::Submit, // log in
            ],
        );
        assert_eq!(app.current_screen(), Screen::Home);
        assert!(matches!(tui.view, ScreenView::Home(_)));
    }

    #[test]
    fn test_login_fields_reach_core() {
        let mut app = App::new(Screen::Login);
        let mut tui = TuiState::new(&app);
        dispatch(
            &mut app,
            &mut tui,
            &[TuiEvent::InputChar('m'), TuiEvent::NextFocus, TuiEvent::InputChar('p')],
        );
        let form = app.login().unwrap();
        assert_eq!(form.email, "m");
        assert_eq!(form.password, "p");
    }

    #[test]
    fn test_home_events_reach_core() {
        let mut app = App::new(Screen::Home);
        let mut tui = TuiState::new(&app);
        dispatch(
            &mut app,
            &mut tui,
            &[
                TuiEvent::InputChar('r'),
                TuiEvent::InputChar('o'),
                TuiEvent::Submit, // search → garden list
                TuiEvent::InputChar(' '),
                TuiEvent::SelectTab(1),
            ],
        );
        let home = app.home().unwrap();
        assert_eq!(home.search_text(), "ro");
        assert!(home.is_selected("Monstera"));
        assert_eq!(home.active_tab(), Tab::Favourites);
        assert_eq!(home.visible_flowers().len(), 6);
    }

    #[test]
    fn test_escape_goes_back_and_resets_view() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        dispatch(&mut app, &mut tui, &[TuiEvent::Submit, TuiEvent::InputChar('x')]);
        dispatch(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert_eq!(app.current_screen(), Screen::Welcome);
        dispatch(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(app.login().map(|f| f.email.as_str()), Some(""));
    }

    #[test]
    fn test_force_quit() {
        let app = test_app();
        let mut tui = TuiState::new(&app);
        assert_eq!(tui.handle_event(&TuiEvent::ForceQuit), Some(Action::Quit));
    }

    #[test]
    fn test_redraw_flag_take_clears() {
        let flag = RedrawFlag::default();
        assert!(!flag.take());
        flag.request_redraw();
        assert!(flag.take());
        assert!(!flag.take());
    }

    #[test]
    fn test_redraw_flag_as_app_observer() {
        let mut app = App::new(Screen::Home);
        let flag = RedrawFlag::default();
        app.subscribe(Box::new(flag.clone()));
        update(&mut app, Action::ToggleSelected("Pothos".into()));
        assert!(flag.take());
    }
}
