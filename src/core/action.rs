//! # Actions
//!
//! Everything that can happen in Bloom becomes an `Action`.
//! User taps "Log in"? That's `Action::LoginSucceeded`.
//! User ticks a plant? That's `Action::ToggleSelected(title)`.
//!
//! `update()` applies an action to the `App` and returns an `Effect` telling
//! the adapter what to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::home::{HomeListState, Tab};
use crate::core::login::LoginForm;
use crate::core::navigation::NavEvent;
use crate::core::state::{App, ScreenState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    WelcomeCompleted,
    LoginSucceeded,
    Back,
    SetSearchText(String),
    SetActiveTab(Tab),
    ToggleSelected(String),
    SetEmail(String),
    SetPassword(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} on {:?}", action, app.current_screen());
    let effect = match action {
        Action::Quit => return Effect::Quit,
        Action::WelcomeCompleted => navigate(app, NavEvent::WelcomeCompleted),
        Action::LoginSucceeded => navigate(app, NavEvent::LoginSucceeded),
        Action::Back => navigate(app, NavEvent::Back),
        Action::SetSearchText(text) => with_home(app, |home| home.set_search_text(text)),
        Action::SetActiveTab(tab) => with_home(app, |home| home.set_active_tab(tab)),
        Action::ToggleSelected(title) => with_home(app, |home| {
            let checked = home.toggle_selected(&title);
            debug!("'{}' selected: {}", title, checked);
        }),
        Action::SetEmail(text) => with_login(app, |form| form.set_email(text)),
        Action::SetPassword(text) => with_login(app, |form| form.set_password(text)),
    };

    if effect == Effect::Redraw {
        app.notify_redraw();
    }
    effect
}

fn navigate(app: &mut App, event: NavEvent) -> Effect {
    match app.navigator.handle(event) {
        Ok(screen) => {
            info!("Navigated to {:?} ({})", screen, event);
            app.sync_screen();
            app.status_message.clear();
        }
        Err(e) => {
            warn!("Invalid transition: {}", e);
            app.status_message = e.to_string();
        }
    }
    // Either the screen or the status line changed.
    Effect::Redraw
}

fn with_home(app: &mut App, f: impl FnOnce(&mut HomeListState)) -> Effect {
    match &mut app.screen {
        ScreenState::Home(home) => {
            f(home);
            Effect::Redraw
        }
        other => {
            debug!("Home action ignored on {:?}", other.screen());
            Effect::None
        }
    }
}

fn with_login(app: &mut App, f: impl FnOnce(&mut LoginForm)) -> Effect {
    match &mut app.screen {
        ScreenState::Login(form) => {
            f(form);
            Effect::Redraw
        }
        other => {
            debug!("Login action ignored on {:?}", other.screen());
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::Screen;
    use crate::test_support::{CountingObserver, test_app};

    #[test]
    fn test_welcome_to_login_to_home() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::WelcomeCompleted), Effect::Redraw);
        assert_eq!(app.current_screen(), Screen::Login);
        assert!(app.login().is_some());

        update(&mut app, Action::LoginSucceeded);
        assert_eq!(app.current_screen(), Screen::Home);
        let home = app.home().expect("home state");
        assert_eq!(home.search_text(), "");
        assert_eq!(home.active_tab(), Tab::Home);
        assert_eq!(home.selection_len(), 0);
    }

    #[test]
    fn test_invalid_transition_keeps_screen_and_sets_status() {
        let mut app = test_app();
        update(&mut app, Action::WelcomeCompleted);
        update(&mut app, Action::SetEmail("a@b.c".into()));

        update(&mut app, Action::WelcomeCompleted);
        assert_eq!(app.current_screen(), Screen::Login);
        assert!(app.status_message.contains("welcome completed"));
        // The form was not rebuilt
        assert_eq!(app.login().map(|f| f.email.as_str()), Some("a@b.c"));
    }

    #[test]
    fn test_successful_navigation_clears_status() {
        let mut app = test_app();
        update(&mut app, Action::Back);
        assert!(!app.status_message.is_empty());
        update(&mut app, Action::WelcomeCompleted);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_login_accepts_empty_credentials() {
        let mut app = App::new(Screen::Login);
        update(&mut app, Action::LoginSucceeded);
        assert_eq!(app.current_screen(), Screen::Home);
    }

    #[test]
    fn test_toggle_monstera() {
        let mut app = App::new(Screen::Home);
        update(&mut app, Action::ToggleSelected("Monstera".into()));
        assert!(app.home().unwrap().is_selected("Monstera"));
        update(&mut app, Action::ToggleSelected("Monstera".into()));
        assert!(!app.home().unwrap().is_selected("Monstera"));
    }

    #[test]
    fn test_home_state_reset_after_leaving_home() {
        let mut app = test_app();
        update(&mut app, Action::WelcomeCompleted);
        update(&mut app, Action::LoginSucceeded);
        update(&mut app, Action::ToggleSelected("Pothos".into()));
        update(&mut app, Action::SetSearchText("fern".into()));
        update(&mut app, Action::SetActiveTab(Tab::Cart));

        update(&mut app, Action::Back);
        assert_eq!(app.current_screen(), Screen::Login);
        assert!(app.home().is_none());

        update(&mut app, Action::LoginSucceeded);
        let home = app.home().unwrap();
        assert!(!home.is_selected("Pothos"));
        assert_eq!(home.search_text(), "");
        assert_eq!(home.active_tab(), Tab::Home);
    }

    #[test]
    fn test_home_actions_ignored_elsewhere() {
        let mut app = test_app();
        let (observer, count) = CountingObserver::new();
        app.subscribe(Box::new(observer));

        assert_eq!(
            update(&mut app, Action::ToggleSelected("Monstera".into())),
            Effect::None
        );
        assert_eq!(update(&mut app, Action::SetPassword("x".into())), Effect::None);
        assert_eq!(count.get(), 0);
        assert_eq!(app.current_screen(), Screen::Welcome);
    }

    #[test]
    fn test_every_mutation_notifies_once() {
        let mut app = test_app();
        let (observer, count) = CountingObserver::new();
        app.subscribe(Box::new(observer));

        let actions = [
            Action::WelcomeCompleted,
            Action::SetEmail("me@example.com".into()),
            Action::SetPassword("secret".into()),
            Action::LoginSucceeded,
            Action::SetSearchText("rose".into()),
            Action::SetActiveTab(Tab::Favourites),
            Action::ToggleSelected("Aglaonema".into()),
        ];
        let total = actions.len();
        for action in actions {
            update(&mut app, action);
        }
        assert_eq!(count.get(), total);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
