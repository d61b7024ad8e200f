//! The "Design your home garden" list: one row per flower with a checkbox.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};

use crate::core::home::HomeListState;
use crate::tui::component::Component;
use crate::tui::components::home::theme_row::swatch;
use crate::tui::strings::HOME_DESCRIPTION;

/// Transient render wrapper, created each frame with borrowed state.
pub struct GardenList<'a> {
    pub home: &'a HomeListState,
    pub list_state: &'a mut ListState,
    pub focused: bool,
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

impl Component for GardenList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .home
            .visible_flowers()
            .iter()
            .map(|flower| {
                let checked = self.home.is_selected(flower.title);
                let check_style = if checked {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let title = Line::from(vec![
                    Span::styled("██ ", Style::default().fg(swatch(flower.image))),
                    Span::styled(flower.title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" "),
                    Span::styled(checkbox(checked), check_style),
                ]);
                let description = Line::from(vec![
                    Span::styled("██ ", Style::default().fg(swatch(flower.image))),
                    Span::styled(HOME_DESCRIPTION, Style::default().fg(Color::DarkGray)),
                ]);
                ListItem::new(vec![title, description])
            })
            .collect();

        let highlight = if self.focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let list = List::new(items).highlight_style(highlight);
        frame.render_stateful_widget(list, area, &mut *self.list_state);
    }
}
