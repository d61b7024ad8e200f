//! # Home Screen
//!
//! Search field, "Browse themes" card row, the garden list with checkboxes
//! and the bottom tab bar.
//!
//! ## State Ownership
//!
//! - Search text, active tab and checkbox flags belong to core
//!   `HomeListState`. Changes leave this view as `HomeEvent`s.
//! - Focus, the theme cursor and the list selection are presentation state
//!   held here in `HomeView`.
//!
//! Typing while the search field is not focused jumps to it, so users can
//! start searching from anywhere.

mod garden_list;
mod tab_bar;
mod theme_row;

pub use garden_list::GardenList;
pub use tab_bar::TabBar;
pub use theme_row::ThemeRow;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{ListState, Paragraph};

use crate::core::catalog::Catalog;
use crate::core::home::{HomeListState, Tab};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;
use crate::tui::strings::{HOME_BROWSE_THEMES, HOME_GARDEN_TITLE, HOME_SEARCH_LABEL};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HomeFocus {
    #[default]
    Search,
    Themes,
    Garden,
    Tabs,
}

impl HomeFocus {
    pub fn next(&self) -> HomeFocus {
        match self {
            HomeFocus::Search => HomeFocus::Themes,
            HomeFocus::Themes => HomeFocus::Garden,
            HomeFocus::Garden => HomeFocus::Tabs,
            HomeFocus::Tabs => HomeFocus::Search,
        }
    }

    pub fn prev(&self) -> HomeFocus {
        match self {
            HomeFocus::Search => HomeFocus::Tabs,
            HomeFocus::Themes => HomeFocus::Search,
            HomeFocus::Garden => HomeFocus::Themes,
            HomeFocus::Tabs => HomeFocus::Garden,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEvent {
    SearchChanged(String),
    ToggleSelected(String),
    SelectTab(Tab),
}

pub struct HomeView {
    pub focus: HomeFocus,
    /// Active tab mirrored from core (Prop)
    pub active_tab: Tab,
    catalog: Catalog,
    search: TextField,
    theme_cursor: usize,
    theme_offset: usize,
    garden: ListState,
}

impl HomeView {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            focus: HomeFocus::default(),
            active_tab: Tab::default(),
            catalog,
            search: TextField::new(HOME_SEARCH_LABEL),
            theme_cursor: 0,
            theme_offset: 0,
            garden: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn sync(&mut self, home: &HomeListState) {
        self.search.sync(home.search_text());
        self.active_tab = home.active_tab();
    }

    pub fn theme_cursor(&self) -> usize {
        self.theme_cursor
    }

    pub fn garden_cursor(&self) -> usize {
        self.garden.selected().unwrap_or(0)
    }

    /// Render with the core state that backs this view.
    pub fn render_with(&mut self, frame: &mut Frame, area: Rect, home: &HomeListState) {
        let [search_area, themes_title, themes_area, garden_title, garden_area, tabs_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(theme_row::ROW_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(area);

        self.search.focused = self.focus == HomeFocus::Search;
        self.search.render(frame, search_area);

        render_heading(frame, themes_title, HOME_BROWSE_THEMES);
        ThemeRow {
            themes: self.catalog.themes,
            cursor: self.theme_cursor,
            offset: &mut self.theme_offset,
            focused: self.focus == HomeFocus::Themes,
        }
        .render(frame, themes_area);

        render_heading(frame, garden_title, HOME_GARDEN_TITLE);
        GardenList {
            home,
            list_state: &mut self.garden,
            focused: self.focus == HomeFocus::Garden,
        }
        .render(frame, garden_area);

        TabBar {
            active: home.active_tab(),
            cart_count: home.selected_count(),
            focused: self.focus == HomeFocus::Tabs,
        }
        .render(frame, tabs_area);
    }

    fn move_garden(&mut self, delta: isize) {
        let len = self.catalog.flowers.len();
        if len == 0 {
            return;
        }
        let next = self.garden_cursor().saturating_add_signed(delta).min(len - 1);
        self.garden.select(Some(next));
    }

    fn move_theme(&mut self, delta: isize) {
        let len = self.catalog.themes.len();
        if len == 0 {
            return;
        }
        self.theme_cursor = self.theme_cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn toggle_current(&self) -> Option<HomeEvent> {
        self.catalog
            .flowers
            .get(self.garden_cursor())
            .map(|flower| HomeEvent::ToggleSelected(flower.title.to_string()))
    }

    fn forward_to_search(&mut self, event: &TuiEvent) -> Option<HomeEvent> {
        match self.search.handle_event(event)? {
            FieldEvent::Changed(text) => Some(HomeEvent::SearchChanged(text)),
            // Nothing to submit: the list is never filtered, so jump to it
            FieldEvent::Submit => {
                self.focus = HomeFocus::Garden;
                None
            }
        }
    }
}

fn render_heading(frame: &mut Frame, area: Rect, text: &'static str) {
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        area,
    );
}

impl EventHandler for HomeView {
    type Event = HomeEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::NextFocus => {
                self.focus = self.focus.next();
                return None;
            }
            TuiEvent::PrevFocus => {
                self.focus = self.focus.prev();
                return None;
            }
            TuiEvent::SelectTab(index) => {
                return Tab::ALL.get(*index).copied().map(HomeEvent::SelectTab);
            }
            _ => {}
        }

        match self.focus {
            HomeFocus::Search => self.forward_to_search(event),
            HomeFocus::Themes => {
                match event {
                    TuiEvent::CursorLeft => self.move_theme(-1),
                    TuiEvent::CursorRight => self.move_theme(1),
                    TuiEvent::CursorDown => self.focus = HomeFocus::Garden,
                    TuiEvent::CursorUp => self.focus = HomeFocus::Search,
                    TuiEvent::InputChar(c) if *c != ' ' => {
                        self.focus = HomeFocus::Search;
                        return self.forward_to_search(event);
                    }
                    TuiEvent::Paste(_) => {
                        self.focus = HomeFocus::Search;
                        return self.forward_to_search(event);
                    }
                    _ => {}
                }
                None
            }
            HomeFocus::Garden => match event {
                TuiEvent::CursorUp => {
                    self.move_garden(-1);
                    None
                }
                TuiEvent::CursorDown => {
                    self.move_garden(1);
                    None
                }
                TuiEvent::CursorHome => {
                    self.garden.select(Some(0));
                    None
                }
                TuiEvent::CursorEnd => {
                    self.move_garden(isize::MAX);
                    None
                }
                TuiEvent::Submit | TuiEvent::InputChar(' ') => self.toggle_current(),
                TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                    self.focus = HomeFocus::Search;
                    self.forward_to_search(event)
                }
                _ => None,
            },
            HomeFocus::Tabs => match event {
                TuiEvent::CursorLeft => Some(HomeEvent::SelectTab(self.active_tab.prev())),
                TuiEvent::CursorRight => Some(HomeEvent::SelectTab(self.active_tab.next())),
                TuiEvent::CursorUp => {
                    self.focus = HomeFocus::Garden;
                    None
                }
                TuiEvent::InputChar(c) if *c != ' ' => {
                    self.focus = HomeFocus::Search;
                    self.forward_to_search(event)
                }
                TuiEvent::Paste(_) => {
                    self.focus = HomeFocus::Search;
                    self.forward_to_search(event)
                }
                _ => None,
            },
        }
    }
}
