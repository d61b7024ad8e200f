//! # Welcome Screen
//!
//! Onboarding splash with the logo, tagline and two buttons. Both buttons
//! complete the welcome step; the choice only decides which one is
//! highlighted.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::strings::{APP_NAME, WELCOME_CREATE_ACCOUNT, WELCOME_LOGIN, WELCOME_TITLE};

const LOGO: [&str; 5] = [
    r"    __   ",
    r"   /  \  ",
    r"  | () | ",
    r"   \__/  ",
    r"  __||__ ",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WelcomeButton {
    #[default]
    CreateAccount,
    LogIn,
}

impl WelcomeButton {
    fn toggle(self) -> Self {
        match self {
            WelcomeButton::CreateAccount => WelcomeButton::LogIn,
            WelcomeButton::LogIn => WelcomeButton::CreateAccount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WelcomeEvent {
    Completed(WelcomeButton),
}

#[derive(Debug, Default)]
pub struct WelcomeView {
    pub focused: WelcomeButton,
}

impl WelcomeView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for WelcomeView {
    type Event = WelcomeEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorLeft
            | TuiEvent::CursorRight
            | TuiEvent::CursorUp
            | TuiEvent::CursorDown
            | TuiEvent::NextFocus
            | TuiEvent::PrevFocus => {
                self.focused = self.focused.toggle();
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                Some(WelcomeEvent::Completed(self.focused))
            }
            _ => None,
        }
    }
}

impl Component for WelcomeView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let logo_height = LOGO.len() as u16;
        let [logo_area, _, name_area, title_area, _, buttons_area] = Layout::vertical([
            Constraint::Length(logo_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
        ])
        .flex(Flex::Center)
        .areas(area);

        let logo_lines: Vec<Line> = LOGO
            .iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::Green))))
            .collect();
        frame.render_widget(
            Paragraph::new(logo_lines).alignment(Alignment::Center),
            logo_area,
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                APP_NAME,
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            name_area,
        );
        frame.render_widget(
            Paragraph::new(WELCOME_TITLE).alignment(Alignment::Center),
            title_area,
        );

        let [create_area, login_area] =
            Layout::horizontal([Constraint::Length(20), Constraint::Length(20)])
                .flex(Flex::Center)
                .spacing(2)
                .areas(buttons_area);
        render_button(
            frame,
            create_area,
            WELCOME_CREATE_ACCOUNT,
            self.focused == WelcomeButton::CreateAccount,
        );
        render_button(
            frame,
            login_area,
            WELCOME_LOGIN,
            self.focused == WelcomeButton::LogIn,
        );
    }
}

/// A bordered, centered button. Focused buttons are filled.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::bordered().border_type(BorderType::Rounded));
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;

    #[test]
    fn test_arrows_move_between_buttons() {
        let mut view = WelcomeView::new();
        assert_eq!(view.focused, WelcomeButton::CreateAccount);
        assert_eq!(view.handle_event(&TuiEvent::CursorRight), None);
        assert_eq!(view.focused, WelcomeButton::LogIn);
        view.handle_event(&TuiEvent::NextFocus);
        assert_eq!(view.focused, WelcomeButton::CreateAccount);
    }

    #[test]
    fn test_both_buttons_complete() {
        let mut view = WelcomeView::new();
        assert_eq!(
            view.handle_event(&TuiEvent::Submit),
            Some(WelcomeEvent::Completed(WelcomeButton::CreateAccount))
        );
        view.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(
            view.handle_event(&TuiEvent::Submit),
            Some(WelcomeEvent::Completed(WelcomeButton::LogIn))
        );
    }

    #[test]
    fn test_other_chars_ignored() {
        let mut view = WelcomeView::new();
        assert_eq!(view.handle_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_render_shows_copy() {
        let mut view = WelcomeView::new();
        let text = render_to_string(80, 24, |f| view.render(f, f.area()));
        assert!(text.contains(WELCOME_TITLE));
        assert!(text.contains(WELCOME_CREATE_ACCOUNT));
        assert!(text.contains(WELCOME_LOGIN));
    }
}
