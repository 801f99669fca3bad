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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, theme::Theme};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// Layout: the search bar at the top, the result grid filling the remaining
/// space, a one-line status bar at the bottom, and the detail overlay floating
/// above everything when an item is selected.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    app.search_bar.draw(f, outer[0], &app.theme);

    if app.results.loading && app.results.gifs().is_empty() {
        draw_loader(f, outer[1], &app.theme);
    } else {
        app.grid
            .as_widget(app.results.gifs())
            .draw(f, outer[1], &app.theme);
    }

    draw_status(f, outer[2], app);

    app.overlay.draw(f, area, &app.theme);
}

fn draw_loader(f: &mut Frame, area: Rect, theme: &Theme) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new("Loading...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.accent_colour)),
        vertical[1],
    );
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .horizontal_margin(1)
        .split(area);

    let message = match &app.status {
        Some(status) => status.as_str(),
        None if app.results.query().trim().is_empty() => "Trending",
        None => app.results.query(),
    };

    f.render_widget(
        Paragraph::new(message).style(Style::default().fg(app.theme.status_fg)),
        chunks[0],
    );

    let mut right = vec![Span::styled(
        format!("{} gifs", app.results.gifs().len()),
        Style::default().fg(app.theme.status_fg),
    )];
    if app.results.fetching_more {
        right.push(Span::styled(
            "  fetching...",
            Style::default().fg(app.theme.accent_colour).bold(),
        ));
    }

    f.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        chunks[1],
    );
}
