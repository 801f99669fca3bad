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

//! UI rendering logic for the result grid.
//!
//! Terminal cells cannot show the animation itself, so each grid cell shows
//! the title and dimensions of one result; the selected cell is highlighted
//! with the accent colour. The scroll position follows the cursor so the
//! selected row is always visible.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    components::gif_grid::{GRID_COLUMNS, GifGrid},
    model::Gif,
    render::Render,
    theme::Theme,
};

const CELL_HEIGHT: u16 = 5;

impl Render for GifGrid<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        if self.gifs.is_empty() {
            return;
        }

        let visible_rows = (area.height / CELL_HEIGHT).max(1) as usize;
        self.scroll_to_selection(visible_rows);

        let first_row = self.state.scroll_row;
        let total_rows = self.gifs.len().div_ceil(GRID_COLUMNS);

        for (screen_row, row) in (first_row..total_rows).take(visible_rows).enumerate() {
            let row_area = Rect {
                x: area.x,
                y: area.y + screen_row as u16 * CELL_HEIGHT,
                width: area.width,
                height: CELL_HEIGHT,
            };

            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(row_area);

            for column in 0..GRID_COLUMNS {
                let index = row * GRID_COLUMNS + column;
                if let Some(gif) = self.gifs.get(index) {
                    let selected = index == self.state.selected;
                    draw_cell(f, columns[column], gif, selected, theme);
                }
            }
        }
    }
}

impl GifGrid<'_> {
    /// Keeps the selected row inside the visible window.
    fn scroll_to_selection(&mut self, visible_rows: usize) {
        let selected_row = self.state.selected / GRID_COLUMNS;

        if selected_row < self.state.scroll_row {
            self.state.scroll_row = selected_row;
        } else if selected_row >= self.state.scroll_row + visible_rows {
            self.state.scroll_row = selected_row + 1 - visible_rows;
        }
    }
}

fn draw_cell(f: &mut Frame, area: Rect, gif: &Gif, selected: bool, theme: &Theme) {
    let border_colour = if selected {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_colour));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = if gif.title.is_empty() {
        gif.id.as_str()
    } else {
        gif.title.as_str()
    };

    let mut title_line = Line::from(title).style(Style::default().fg(theme.cell_title_fg));
    if selected {
        title_line = title_line.bold();
    }

    let lines = vec![
        title_line,
        Line::from(format!("{}x{}", gif.width, gif.height))
            .style(Style::default().fg(theme.cell_dims_fg)),
        Line::from(gif.preview_url.as_str()).style(Style::default().fg(theme.cell_dims_fg)),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}
