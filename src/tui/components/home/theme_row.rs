//! Horizontal row of theme cards under "Browse themes".

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::catalog::{AssetRef, CatalogItem};
use crate::tui::component::Component;

pub const CARD_WIDTH: u16 = 20;
pub const ROW_HEIGHT: u16 = 5;

const SWATCHES: [Color; 6] = [
    Color::Green,
    Color::LightGreen,
    Color::Yellow,
    Color::LightYellow,
    Color::Cyan,
    Color::LightMagenta,
];

/// Stand-in color for an image asset.
pub fn swatch(image: AssetRef) -> Color {
    let sum: usize = image.id().bytes().map(usize::from).sum();
    SWATCHES[sum % SWATCHES.len()]
}

/// First visible card so that `cursor` stays on screen.
pub fn scroll_offset(cursor: usize, offset: usize, visible: usize) -> usize {
    if visible == 0 || cursor < offset {
        cursor
    } else if cursor >= offset + visible {
        cursor + 1 - visible
    } else {
        offset
    }
}

pub struct ThemeRow<'a> {
    pub themes: &'static [CatalogItem],
    pub cursor: usize,
    pub offset: &'a mut usize,
    pub focused: bool,
}

impl Component for ThemeRow<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let visible = (area.width / CARD_WIDTH).max(1) as usize;
        *self.offset = scroll_offset(self.cursor, *self.offset, visible);

        let shown: Vec<(usize, &CatalogItem)> = self
            .themes
            .iter()
            .enumerate()
            .skip(*self.offset)
            .take(visible)
            .collect();
        let slots = Layout::horizontal(shown.iter().map(|_| Constraint::Length(CARD_WIDTH)))
            .split(area);

        for ((index, theme), slot) in shown.into_iter().zip(slots.iter()) {
            let highlighted = self.focused && index == self.cursor;
            let border_style = if highlighted {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let image_width = slot.width.saturating_sub(2) as usize;
            let image = Line::styled("▒".repeat(image_width), Style::default().fg(swatch(theme.image)));
            let card = Paragraph::new(vec![image.clone(), image]).block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .title_bottom(Line::from(theme.title).style(border_style)),
            );
            frame.render_widget(card, *slot);
        }
    }
}
