//! # TextField Component
//!
//! Single-line bordered text input used by the search box and the login
//! form.
//!
//! ## State Management
//!
//! The authoritative text lives in core state (`HomeListState`,
//! `LoginForm`). The field keeps a copy as a prop, synced each frame with
//! `sync()`, plus its own cursor. Edits are reported upward as
//! `FieldEvent::Changed(new_text)`; the parent turns that into an `Action`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    Changed(String),
    Submit,
}

pub struct TextField {
    /// Label shown in the border (Prop)
    pub label: &'static str,
    /// Whether this field has keyboard focus (Prop)
    pub focused: bool,
    /// Render bullets instead of the text
    pub masked: bool,
    value: String,
    /// Byte offset into `value`, always on a char boundary
    cursor: usize,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            focused: false,
            masked: false,
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Adopt `value` from core state. The cursor moves to the end if the text changed underneath it.
    pub fn sync(&mut self, value: &str) {
        if self.value != value {
            self.value = value.to_string();
            self.cursor = self.value.len();
        }
    }

    fn display_text(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    fn cursor_column(&self) -> u16 {
        let before = &self.value[..self.cursor];
        let width = if self.masked {
            before.chars().count()
        } else {
            before.width()
        };
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.value.len())
    }

    fn changed(&self) -> Option<FieldEvent> {
        Some(FieldEvent::Changed(self.value.clone()))
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        let column = self.cursor_column();
        let offset = if inner_width > 0 && column >= inner_width {
            column - inner_width + 1
        } else {
            0
        };

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label)
            .title_style(border_style.add_modifier(Modifier::BOLD));

        let field = Paragraph::new(self.display_text())
            .block(block)
            .scroll((0, offset));
        frame.render_widget(field, area);

        if self.focused && area.height > 2 && inner_width > 0 {
            frame.set_cursor_position((area.x + 1 + column - offset, area.y + 1));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.value.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single line: newlines from the clipboard become spaces
                let text = text.replace(['\r', '\n'], " ");
                self.value.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = self.prev_boundary();
                self.value.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.value.len() {
                    return None;
                }
                let next = self.next_boundary();
                self.value.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.value.len();
                None
            }
            TuiEvent::Submit => Some(FieldEvent::Submit),
            _ => None,
        }
    }
}
