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

//! Render the detail overlay.
//!
//! The overlay floats over the grid, clearing the area underneath, and shows
//! the selected GIF's metadata, the action hints, and a progress gauge while
//! a download is running. When the server did not report a content length
//! the gauge is replaced with a running byte count.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Padding, Paragraph},
};

use crate::{components::Overlay, theme::Theme, util};

impl Overlay {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(gif) = self.gif() else {
            return;
        };

        let popup = centered_area(area, 70, 60);
        f.render_widget(Clear, popup);

        let title = if gif.title.is_empty() {
            gif.id.as_str()
        } else {
            gif.title.as_str()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .title(format!(" {} ", title))
            .padding(Padding::uniform(1));

        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("id: "),
                Span::styled(gif.id.as_str(), Style::default().fg(theme.cell_title_fg)),
            ])),
            chunks[0],
        );

        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("size: "),
                Span::styled(
                    format!("{}x{}", gif.width, gif.height),
                    Style::default().fg(theme.cell_dims_fg),
                ),
            ])),
            chunks[1],
        );

        f.render_widget(
            Paragraph::new(gif.original_url.as_str())
                .style(Style::default().fg(theme.cell_dims_fg)),
            chunks[2],
        );

        if self.download.active {
            self.draw_progress(f, chunks[4], theme);
        }

        let hints = Line::from(vec![
            Span::styled("s", Style::default().fg(theme.accent_colour).bold()),
            Span::raw(" share on WhatsApp   "),
            Span::styled("d", Style::default().fg(theme.accent_colour).bold()),
            Span::raw(" download   "),
            Span::styled("esc", Style::default().fg(theme.accent_colour).bold()),
            Span::raw(" close"),
        ]);
        f.render_widget(
            Paragraph::new(hints).alignment(Alignment::Center),
            chunks[5],
        );
    }

    fn draw_progress(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        match self.download.percent() {
            Some(percent) => {
                let gauge = Gauge::default()
                    .gauge_style(
                        Style::default()
                            .fg(theme.accent_colour)
                            .bg(theme.gauge_track_colour),
                    )
                    .ratio(f64::from(percent) / 100.0)
                    .label(format!("{}%", percent))
                    .use_unicode(true);
                f.render_widget(gauge, area);
            }
            None => {
                let label = format!(
                    "downloading... {} received",
                    util::format::format_bytes(self.download.received)
                );
                f.render_widget(
                    Paragraph::new(label).style(Style::default().fg(Color::White)),
                    area,
                );
            }
        }
    }
}

/// Computes a centered sub-area covering the given percentages of the frame.
fn centered_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
