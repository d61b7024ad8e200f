use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::{App, ScreenState};
use crate::tui::component::Component;
use crate::tui::components::TitleBar;
use crate::tui::strings::{BACK_HELP, HOME_HELP, LOGIN_HELP, WELCOME_HELP};
use crate::tui::{ScreenView, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(app.current_screen().label(), app.status_message.clone())
        .render(frame, title_area);

    let help = match (&app.screen, &mut tui.view) {
        (ScreenState::Welcome, ScreenView::Welcome(view)) => {
            view.render(frame, main_area);
            WELCOME_HELP
        }
        (ScreenState::Login(_), ScreenView::Login(view)) => {
            view.render(frame, main_area);
            LOGIN_HELP
        }
        (ScreenState::Home(home), ScreenView::Home(view)) => {
            view.render_with(frame, main_area, home);
            HOME_HELP
        }
        // View not yet synced to a screen change; the next frame catches up.
        _ => "",
    };

    let mut help = help.to_string();
    if !help.is_empty() && app.navigator.can_go_back() {
        help.push_str(BACK_HELP);
    }
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::navigation::Screen;
    use crate::test_support::{render_to_string, test_app};
    use crate::tui::strings::{HOME_GARDEN_TITLE, LOGIN_TITLE, WELCOME_TITLE};

    fn draw(app: &App, tui: &mut TuiState) -> String {
        render_to_string(80, 30, |f| draw_ui(f, app, tui))
    }

    #[test]
    fn test_draw_each_screen() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        assert!(draw(&app, &mut tui).contains(WELCOME_TITLE));

        update(&mut app, Action::WelcomeCompleted);
        tui.sync(&app);
        assert!(draw(&app, &mut tui).contains(LOGIN_TITLE));

        update(&mut app, Action::LoginSucceeded);
        tui.sync(&app);
        let text = draw(&app, &mut tui);
        assert!(text.contains(HOME_GARDEN_TITLE));
        assert!(text.contains("Bloom | Home"));
    }

    #[test]
    fn test_status_message_in_title() {
        let mut app = App::new(Screen::Login);
        update(&mut app, Action::Back);
        let mut tui = TuiState::new(&app);
        assert!(draw(&app, &mut tui).contains("cannot handle 'back'"));
    }

    #[test]
    fn test_back_hint_only_with_history() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        assert!(!draw(&app, &mut tui).contains("Esc Back"));

        update(&mut app, Action::WelcomeCompleted);
        tui.sync(&app);
        assert!(draw(&app, &mut tui).contains("Esc Back"));

        // Started directly on Home: nothing to go back to
        let app = App::new(Screen::Home);
        let mut tui = TuiState::new(&app);
        let text = draw(&app, &mut tui);
        assert!(text.contains("F1-F4 Tabs"));
        assert!(!text.contains("Esc Back"));
    }

    #[test]
    fn test_unsynced_view_draws_without_panic() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        update(&mut app, Action::WelcomeCompleted);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Bloom | Log in"));
    }
}
