//! # TitleBar Component
//!
//! Top status bar: app name, current screen and the latest status message
//! (for example a rejected navigation).
//!
//! Stateless: it receives everything as props and renders one line.
//!
//! 1. **Status message**: `"Bloom | Log in | cannot handle 'back' on ..."`
//! 2. **Default**: `"Bloom | Log in"`

use crate::tui::component::Component;
use crate::tui::strings::APP_NAME;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Label of the active screen
    pub screen_label: &'static str,
    /// Status message, empty when there is nothing to report
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_label: &'static str, status_message: String) -> Self {
        Self {
            screen_label,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                APP_NAME,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | {}", self.screen_label)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("Log in", "cannot go back".to_string());
        let text = render_to_string(60, 1, |f| title_bar.render(f, f.area()));
        assert!(text.contains("Bloom | Log in"));
        assert!(text.contains("cannot go back"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("Home", String::new());
        let text = render_to_string(60, 1, |f| title_bar.render(f, f.area()));
        assert!(text.contains("Bloom | Home"));
        assert_eq!(text.matches('|').count(), 1);
    }
}
