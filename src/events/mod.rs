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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (page fetches, downloads), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and triggers tasks on the background worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod key_handlers;

use std::{io::Stdout, path::PathBuf};

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::Gif, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    PageLoaded {
        seq: u64,
        offset: usize,
        gifs: Vec<Gif>,
    },
    FetchFailed {
        seq: u64,
    },

    DownloadStarted,
    DownloadProgress {
        received: u64,
        total: Option<u64>,
    },
    DownloadFinished {
        path: PathBuf,
        bytes: u64,
    },
    DownloadFailed(String),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,

            AppEvent::PageLoaded { seq, offset, gifs } => {
                let applied = app.results.apply_page(seq, offset, gifs);
                if applied && offset == 0 {
                    app.grid.reset();
                }
            }
            AppEvent::FetchFailed { seq } => app.results.fetch_failed(seq),

            AppEvent::DownloadStarted => app.overlay.download_started(),
            AppEvent::DownloadProgress { received, total } => {
                app.overlay.download_progress(received, total);
            }
            AppEvent::DownloadFinished { path, bytes } => {
                app.overlay.download_finished();
                app.status = Some(format!(
                    "Saved {} ({})",
                    path.display(),
                    crate::util::format::format_bytes(bytes)
                ));
            }
            AppEvent::DownloadFailed(message) => {
                app.overlay.download_finished();
                app.status = Some(format!("Download failed: {message}"));
            }

            AppEvent::Error(message) => app.status = Some(message),

            AppEvent::Tick => {}

            // Handled above, before the match
            AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
