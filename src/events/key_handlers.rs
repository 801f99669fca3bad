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

//! Maps keyboard input to application actions.
//!
//! This module acts as the primary input router for the TUI. Focus order:
//! an open overlay captures everything, then an active search bar, then the
//! global keys driving the grid.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{
    App,
    components::{GifGridAction, OverlayAction, SearchBarAction},
    events::AppEvent,
    tasks::AppTask,
};

pub(crate) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if app.overlay.is_open() {
        if let Some(action) = app.overlay.process_event(&event) {
            match action {
                OverlayAction::Close => app.overlay.close(),
                OverlayAction::Share(gif) => app.task_tx.send(AppTask::Share(gif))?,
                OverlayAction::Download(gif) => app.task_tx.send(AppTask::Download(gif))?,
            }
        }
        return Ok(());
    }

    if app.search_bar.active() {
        if let Some(SearchBarAction::QueryChanged(text)) = app.search_bar.process_event(&event) {
            // Every keystroke issues a new request; stale responses are
            // discarded by their sequence token when they arrive.
            let request = app.results.set_query(&text);
            app.task_tx.send(AppTask::FetchPage(request))?;
        }
        return Ok(());
    }

    process_global_key_event(app, &event, key)
}

fn process_global_key_event(app: &mut App, event: &Event, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }

        KeyCode::Char('/') => {
            app.search_bar.activate();
            return Ok(());
        }

        _ => {}
    }

    let action = app.grid.as_widget(app.results.gifs()).process_event(event);

    match action {
        Some(GifGridAction::Open(gif)) => app.overlay.open(gif),
        Some(GifGridAction::NearEnd) => {
            // Gated inside the results model: a no-op while a fetch is
            // already in flight.
            if let Some(request) = app.results.load_more() {
                app.task_tx.send(AppTask::FetchPage(request))?;
            }
        }
        None => {}
    }

    Ok(())
}
