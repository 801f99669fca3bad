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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload network I/O
//! from the main UI thread. It provides a dedicated worker loop that
//! translates [`AppTask`] requests into content service calls, share intents,
//! and file downloads, and broadcasts the results back to the application via
//! `AppEvent`s.
//!
//! A single worker thread processes tasks in order. There is no cancellation:
//! a task that is no longer interesting (a superseded page request, a
//! download whose overlay was closed) still runs to completion and its
//! events are discarded or ignored by the receiving side.

mod handlers;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;

use crate::{
    config::AppConfig,
    events::AppEvent,
    giphy::GiphyClient,
    model::{Gif, PageRequest},
};

#[derive(Debug)]
pub(crate) enum AppTask {
    FetchPage(PageRequest),
    Share(Gif),
    Download(Gif),
}

/// Spawns a background thread to process application tasks.
///
/// This worker thread initializes its own HTTP clients and enters a blocking
/// loop, listening for incoming [`AppTask`]s.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let giphy = GiphyClient::new(&config).expect("Failed to initialise content client");
        let http = reqwest::blocking::Client::new();

        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                giphy: &giphy,
                http: &http,
            };

            if let Err(e) = handle_task(task, &ctx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
    giphy: &'a GiphyClient,
    http: &'a reqwest::blocking::Client,
}

/// Orchestrates the execution of a single task.
///
/// This function implements the logic for each task and sends the result back
/// through the application event channel.
fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::FetchPage(request) => handlers::fetch_page(ctx, request),
        AppTask::Share(gif) => handlers::share_gif(&gif),
        AppTask::Download(gif) => handlers::download_gif(ctx, &gif),
    }
}
