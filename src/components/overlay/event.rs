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

//! Input handling for the detail overlay.
//!
//! While the overlay is open it captures all keyboard input: `s` shares the
//! selected GIF, `d` downloads it, `Esc` or `q` dismisses the overlay.
//! Pressing `d` while a download is already running issues another download
//! task; the single worker serialises them, so the tracker is simply taken
//! over by the newest one.

use crossterm::event::{Event, KeyCode};

use crate::components::{Overlay, OverlayAction};

impl Overlay {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<OverlayAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(OverlayAction::Close),
            KeyCode::Char('s') => self.gif().cloned().map(OverlayAction::Share),
            KeyCode::Char('d') => self.gif().cloned().map(OverlayAction::Download),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gif;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn open_overlay() -> Overlay {
        let mut overlay = Overlay::new();
        overlay.open(Gif {
            id: "abc".to_string(),
            title: "a gif".to_string(),
            preview_url: String::new(),
            original_url: "https://media.test/abc/giphy.gif".to_string(),
            width: 480,
            height: 270,
        });
        overlay
    }

    #[test]
    fn escape_requests_close() {
        let mut overlay = open_overlay();
        assert!(matches!(
            overlay.process_event(&key(KeyCode::Esc)),
            Some(OverlayAction::Close)
        ));
    }

    #[test]
    fn share_carries_the_selected_gif() {
        let mut overlay = open_overlay();
        let action = overlay.process_event(&key(KeyCode::Char('s')));
        assert!(matches!(action, Some(OverlayAction::Share(gif)) if gif.id == "abc"));
    }

    #[test]
    fn download_carries_the_selected_gif() {
        let mut overlay = open_overlay();
        let action = overlay.process_event(&key(KeyCode::Char('d')));
        assert!(matches!(action, Some(OverlayAction::Download(gif)) if gif.id == "abc"));
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut overlay = open_overlay();
        assert!(overlay.process_event(&key(KeyCode::Char('x'))).is_none());
    }
}
