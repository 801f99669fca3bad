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

//! Full-screen detail overlay and download progress tracking.
//!
//! The overlay is a small state machine: closed, or open over one selected
//! GIF. While open it exposes the share and download actions and reflects the
//! progress of an in-flight download. Closing the overlay clears the
//! selection but does not cancel an outstanding download; the worker keeps
//! writing and its completion events are simply no longer visible.

mod event;
mod render;

use crate::model::Gif;

#[derive(Debug)]
pub(crate) enum OverlayAction {
    Close,
    Share(Gif),
    Download(Gif),
}

/// Progress of the single tracked download.
///
/// The total is unknown until the server reports a content length, and some
/// servers never do; the percentage is only available when a non-zero total
/// is known, otherwise the display falls back to a byte count.
#[derive(Debug, Default)]
pub(crate) struct DownloadState {
    pub(crate) active: bool,
    pub(crate) received: u64,
    pub(crate) total: Option<u64>,
}

impl DownloadState {
    pub(crate) fn percent(&self) -> Option<u8> {
        match self.total {
            Some(total) if total > 0 => {
                Some((self.received.saturating_mul(100) / total).min(100) as u8)
            }
            _ => None,
        }
    }
}

pub(crate) struct Overlay {
    gif: Option<Gif>,
    pub(crate) download: DownloadState,
}

impl Overlay {
    pub(crate) fn new() -> Self {
        Self {
            gif: None,
            download: DownloadState::default(),
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.gif.is_some()
    }

    pub(crate) fn gif(&self) -> Option<&Gif> {
        self.gif.as_ref()
    }

    pub(crate) fn open(&mut self, gif: Gif) {
        self.gif = Some(gif);
        self.download = DownloadState::default();
    }

    pub(crate) fn close(&mut self) {
        self.gif = None;
    }

    /// Resets the tracker for a fresh download.
    pub(crate) fn download_started(&mut self) {
        self.download = DownloadState {
            active: true,
            received: 0,
            total: None,
        };
    }

    pub(crate) fn download_progress(&mut self, received: u64, total: Option<u64>) {
        if self.download.active {
            self.download.received = received;
            self.download.total = total;
        }
    }

    pub(crate) fn download_finished(&mut self) {
        self.download.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gif(id: &str) -> Gif {
        Gif {
            id: id.to_string(),
            title: "a gif".to_string(),
            preview_url: String::new(),
            original_url: "https://media.test/giphy.gif".to_string(),
            width: 480,
            height: 270,
        }
    }

    #[test]
    fn open_and_close_lifecycle() {
        let mut overlay = Overlay::new();
        assert!(!overlay.is_open());

        overlay.open(gif("abc"));
        assert!(overlay.is_open());
        assert_eq!(overlay.gif().unwrap().id, "abc");

        overlay.close();
        assert!(!overlay.is_open());
        assert!(overlay.gif().is_none());
    }

    #[test]
    fn opening_resets_previous_download_display() {
        let mut overlay = Overlay::new();
        overlay.open(gif("a"));
        overlay.download_started();
        overlay.download_progress(10, Some(100));

        overlay.open(gif("b"));
        assert!(!overlay.download.active);
        assert_eq!(overlay.download.received, 0);
    }

    #[test]
    fn progress_tracks_received_bytes() {
        let mut overlay = Overlay::new();
        overlay.open(gif("a"));
        overlay.download_started();
        assert!(overlay.download.active);

        overlay.download_progress(50, Some(200));
        assert_eq!(overlay.download.percent(), Some(25));

        overlay.download_finished();
        assert!(!overlay.download.active);
    }

    #[test]
    fn percent_is_indeterminate_without_total() {
        let state = DownloadState {
            active: true,
            received: 4096,
            total: None,
        };
        assert_eq!(state.percent(), None);

        let state = DownloadState {
            active: true,
            received: 4096,
            total: Some(0),
        };
        assert_eq!(state.percent(), None);
    }

    #[test]
    fn percent_is_clamped_to_one_hundred() {
        let state = DownloadState {
            active: true,
            received: 300,
            total: Some(200),
        };
        assert_eq!(state.percent(), Some(100));
    }

    #[test]
    fn stray_progress_after_completion_is_ignored() {
        let mut overlay = Overlay::new();
        overlay.open(gif("a"));
        overlay.download_started();
        overlay.download_finished();

        overlay.download_progress(999, Some(1000));
        assert_eq!(overlay.download.received, 0);
    }
}
