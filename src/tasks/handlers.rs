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

//! Task handler implementations.
//!
//! Fetching pages, opening the share link, and streaming downloads to disk.
//! All handlers run on the task worker thread and report back exclusively via
//! `AppEvent`s.

use std::{
    fs::{self, File},
    io::{Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use crate::{
    config::AppConfig,
    events::AppEvent,
    model::{Gif, PageRequest},
    tasks::TaskContext,
};

const SHARE_MESSAGE: &str = "Check out this cool GIF!";

const DOWNLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// Fetches one result page and broadcasts it.
///
/// On failure the sequence token is reported back so the loading flags can be
/// cleared; the error itself only reaches the status line.
pub(super) fn fetch_page(ctx: &TaskContext, request: PageRequest) -> Result<()> {
    match ctx.giphy.fetch_page(&request.query, request.offset) {
        Ok(gifs) => {
            ctx.event_tx.send(AppEvent::PageLoaded {
                seq: request.seq,
                offset: request.offset,
                gifs,
            })?;
            Ok(())
        }
        Err(e) => {
            ctx.event_tx
                .send(AppEvent::FetchFailed { seq: request.seq })?;
            Err(e.into())
        }
    }
}

/// Opens a WhatsApp share link for the GIF via the system URL handler.
///
/// Fire-and-forget: neither the handler result nor the share outcome is
/// observed.
pub(super) fn share_gif(gif: &Gif) -> Result<()> {
    let _ = open::that(share_link(gif));
    Ok(())
}

pub(super) fn share_link(gif: &Gif) -> String {
    let text = format!("{} {}", SHARE_MESSAGE, gif.original_url);
    format!("https://wa.me/?text={}", urlencoding::encode(&text))
}

/// Downloads the original-resolution file of the GIF, streaming progress
/// events as chunks arrive.
///
/// A failed download leaves any partially written file behind; there is no
/// cleanup and no retry.
pub(super) fn download_gif(ctx: &TaskContext, gif: &Gif) -> Result<()> {
    let dest = download_destination(ctx.config, gif);

    ctx.event_tx.send(AppEvent::DownloadStarted)?;

    match stream_to_file(ctx, gif, &dest) {
        Ok(bytes) => ctx
            .event_tx
            .send(AppEvent::DownloadFinished { path: dest, bytes })?,
        Err(e) => ctx.event_tx.send(AppEvent::DownloadFailed(e.to_string()))?,
    }

    Ok(())
}

pub(super) fn download_destination(config: &AppConfig, gif: &Gif) -> PathBuf {
    config.download_dir().join(format!("{}.gif", gif.id))
}

fn stream_to_file(ctx: &TaskContext, gif: &Gif, dest: &Path) -> Result<u64> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).context("Failed to create download directory")?;
    }

    let mut response = ctx
        .http
        .get(&gif.original_url)
        .send()
        .context("Failed to start download")?;

    if !response.status().is_success() {
        bail!("Download failed: HTTP {}", response.status());
    }

    let total = response.content_length();

    let mut file = File::create(dest).context("Failed to create download file")?;

    let mut received: u64 = 0;
    let mut buffer = [0u8; DOWNLOAD_CHUNK_SIZE];

    loop {
        let n = response
            .read(&mut buffer)
            .context("Error reading download stream")?;
        if n == 0 {
            break;
        }

        file.write_all(&buffer[..n])
            .context("Error writing to download file")?;
        received += n as u64;

        ctx.event_tx
            .send(AppEvent::DownloadProgress { received, total })?;
    }

    Ok(received)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gif() -> Gif {
        Gif {
            id: "abc123".to_string(),
            title: "a gif".to_string(),
            preview_url: "https://media.test/abc123/200w.gif".to_string(),
            original_url: "https://media.test/abc123/giphy.gif".to_string(),
            width: 480,
            height: 270,
        }
    }

    #[test]
    fn share_link_targets_whatsapp_with_encoded_message() {
        let link = share_link(&gif());
        assert!(link.starts_with("https://wa.me/?text="));
        assert!(link.contains("Check%20out%20this%20cool%20GIF%21"));
        assert!(link.contains("https%3A%2F%2Fmedia.test%2Fabc123%2Fgiphy.gif"));
    }

    #[test]
    fn download_destination_derives_from_id() {
        let config = AppConfig {
            download_dir: Some("/tmp/gifs".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(
            download_destination(&config, &gif()),
            PathBuf::from("/tmp/gifs/abc123.gif")
        );
    }
}
