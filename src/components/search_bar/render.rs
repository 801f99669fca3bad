// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Render the search bar.
//!
//! This module renders the query input with its border, placeholder text,
//! and (while focused) the cursor.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::SearchBar, theme::Theme};

const PLACEHOLDER: &str = "Search GIFs... (press / to type)";

impl SearchBar {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.active() {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.value().is_empty() && !self.active() {
            f.render_widget(
                Paragraph::new(PLACEHOLDER)
                    .style(Style::default().fg(theme.placeholder_fg)),
                inner,
            );
        } else {
            f.render_widget(
                Paragraph::new(self.value()).style(Style::default().fg(theme.search_fg)),
                inner,
            );
        }

        if self.active() {
            let cursor_x = inner.x + self.input.cursor() as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }
}
