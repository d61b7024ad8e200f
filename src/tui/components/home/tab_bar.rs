//! Bottom navigation: Home, Favorites, Profile, Cart. Stateless.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

use crate::core::home::Tab;
use crate::tui::component::Component;

pub struct TabBar {
    pub active: Tab,
    /// Checked flowers, shown as a badge on Cart
    pub cart_count: usize,
    pub focused: bool,
}

impl TabBar {
    fn title(&self, tab: Tab) -> String {
        match tab {
            Tab::Cart if self.cart_count > 0 => format!("{} ({})", tab.label(), self.cart_count),
            _ => tab.label().to_string(),
        }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let highlight = if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        };
        let tabs = Tabs::new(Tab::ALL.iter().map(|tab| self.title(*tab)))
            .select(self.active.index())
            .style(Style::default().fg(Color::Gray).bg(Color::Reset))
            .highlight_style(highlight)
            .divider("│");
        frame.render_widget(tabs, area);
    }
}
