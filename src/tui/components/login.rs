//! # Login Screen
//!
//! Email field, masked password field, the terms notice and the "Log in"
//! button. Nothing is validated; pressing the button always logs in.
//!
//! The view owns keyboard focus and the two `TextField`s. Field contents
//! are synced from `LoginForm` before every frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::login::LoginForm;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::components::welcome::render_button;
use crate::tui::event::TuiEvent;
use crate::tui::strings::{
    LOGIN_BUTTON, LOGIN_EMAIL_LABEL, LOGIN_LICENSE, LOGIN_PASSWORD_LABEL, LOGIN_TITLE,
};

const FORM_WIDTH: u16 = 48;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginFocus {
    #[default]
    Email,
    Password,
    Button,
}

impl LoginFocus {
    pub fn next(&self) -> LoginFocus {
        match self {
            LoginFocus::Email => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Button,
            LoginFocus::Button => LoginFocus::Email,
        }
    }

    pub fn prev(&self) -> LoginFocus {
        match self {
            LoginFocus::Email => LoginFocus::Button,
            LoginFocus::Password => LoginFocus::Email,
            LoginFocus::Button => LoginFocus::Password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
}

pub struct LoginView {
    pub focus: LoginFocus,
    email: TextField,
    password: TextField,
}

impl LoginView {
    pub fn new() -> Self {
        Self {
            focus: LoginFocus::default(),
            email: TextField::new(LOGIN_EMAIL_LABEL),
            password: TextField::new(LOGIN_PASSWORD_LABEL).masked(),
        }
    }

    /// Pull field contents from core state.
    pub fn sync(&mut self, form: &LoginForm) {
        self.email.sync(&form.email);
        self.password.sync(&form.password);
    }
}

impl Default for LoginView {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for LoginView {
    type Event = LoginEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::NextFocus | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                return None;
            }
            TuiEvent::PrevFocus | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                return None;
            }
            _ => {}
        }

        match self.focus {
            LoginFocus::Email => match self.email.handle_event(event)? {
                FieldEvent::Changed(text) => Some(LoginEvent::EmailChanged(text)),
                // Enter on the email field moves on to the password
                FieldEvent::Submit => {
                    self.focus = LoginFocus::Password;
                    None
                }
            },
            LoginFocus::Password => match self.password.handle_event(event)? {
                FieldEvent::Changed(text) => Some(LoginEvent::PasswordChanged(text)),
                FieldEvent::Submit => Some(LoginEvent::Submit),
            },
            LoginFocus::Button => match event {
                TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(LoginEvent::Submit),
                _ => None,
            },
        }
    }
}

impl Component for LoginView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = FORM_WIDTH.min(area.width);
        let license = textwrap::wrap(LOGIN_LICENSE, width as usize);
        let license_height = license.len() as u16;

        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [title_area, _, email_area, password_area, _, license_area, _, button_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(license_height),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .flex(Flex::Center)
            .areas(column);

        frame.render_widget(
            Paragraph::new(LOGIN_TITLE)
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD)),
            title_area,
        );

        self.email.focused = self.focus == LoginFocus::Email;
        self.password.focused = self.focus == LoginFocus::Password;
        self.email.render(frame, email_area);
        self.password.render(frame, password_area);

        let license_lines: Vec<Line> = license
            .into_iter()
            .map(|l| Line::from(l.into_owned()))
            .collect();
        frame.render_widget(
            Paragraph::new(license_lines)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            license_area,
        );

        render_button(
            frame,
            button_area,
            LOGIN_BUTTON,
            self.focus == LoginFocus::Button,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut view = LoginView::new();
        assert_eq!(
            view.handle_event(&TuiEvent::InputChar('a')),
            Some(LoginEvent::EmailChanged("a".to_string()))
        );
        view.handle_event(&TuiEvent::NextFocus);
        assert_eq!(
            view.handle_event(&TuiEvent::InputChar('b')),
            Some(LoginEvent::PasswordChanged("b".to_string()))
        );
    }

    #[test]
    fn test_enter_on_email_moves_to_password() {
        let mut view = LoginView::new();
        assert_eq!(view.handle_event(&TuiEvent::Submit), None);
        assert_eq!(view.focus, LoginFocus::Password);
    }

    #[test]
    fn test_enter_on_password_submits() {
        let mut view = LoginView::new();
        view.focus = LoginFocus::Password;
        assert_eq!(view.handle_event(&TuiEvent::Submit), Some(LoginEvent::Submit));
    }

    #[test]
    fn test_button_submits_with_empty_fields() {
        let mut view = LoginView::new();
        view.handle_event(&TuiEvent::PrevFocus);
        assert_eq!(view.focus, LoginFocus::Button);
        assert_eq!(view.handle_event(&TuiEvent::Submit), Some(LoginEvent::Submit));
        assert_eq!(view.handle_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_focus_cycle() {
        let mut focus = LoginFocus::default();
        for expected in [LoginFocus::Password, LoginFocus::Button, LoginFocus::Email] {
            focus = focus.next();
            assert_eq!(focus, expected);
        }
        assert_eq!(LoginFocus::Email.prev().next(), LoginFocus::Email);
    }

    #[test]
    fn test_render_masks_password() {
        let mut view = LoginView::new();
        view.sync(&LoginForm {
            email: "me@example.com".to_string(),
            password: "secret".to_string(),
        });
        let text = render_to_string(80, 24, |f| view.render(f, f.area()));
        assert!(text.contains(LOGIN_TITLE));
        assert!(text.contains("me@example.com"));
        assert!(!text.contains("secret"));
        assert!(text.contains("Terms of Use"));
    }
}
