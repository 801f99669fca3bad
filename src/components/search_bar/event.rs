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

//! Input handling for the search bar.
//!
//! Keyboard events are delegated to the managed text input; any resulting
//! change to the query text is surfaced as an action. `Esc` and `Enter`
//! return focus to the grid, keeping the current text and results.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{SearchBar, SearchBarAction};

impl SearchBar {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchBarAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.active = false;
                None
            }

            _ => {
                let before = self.input.value().to_string();
                self.input.handle_event(event);

                if self.input.value() != before {
                    Some(SearchBarAction::QueryChanged(self.input.value().to_string()))
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_emits_query_changed_per_keystroke() {
        let mut bar = SearchBar::new();
        bar.activate();

        let action = bar.process_event(&key(KeyCode::Char('c')));
        assert!(matches!(action, Some(SearchBarAction::QueryChanged(q)) if q == "c"));

        let action = bar.process_event(&key(KeyCode::Char('a')));
        assert!(matches!(action, Some(SearchBarAction::QueryChanged(q)) if q == "ca"));
    }

    #[test]
    fn backspace_to_empty_emits_empty_query() {
        let mut bar = SearchBar::new();
        bar.activate();
        bar.process_event(&key(KeyCode::Char('x')));

        let action = bar.process_event(&key(KeyCode::Backspace));
        assert!(matches!(action, Some(SearchBarAction::QueryChanged(q)) if q.is_empty()));
    }

    #[test]
    fn escape_dismisses_keeping_text() {
        let mut bar = SearchBar::new();
        bar.activate();
        bar.process_event(&key(KeyCode::Char('c')));

        assert!(bar.process_event(&key(KeyCode::Esc)).is_none());
        assert!(!bar.active());
        assert_eq!(bar.value(), "c");
    }

    #[test]
    fn cursor_movement_emits_nothing() {
        let mut bar = SearchBar::new();
        bar.activate();
        bar.process_event(&key(KeyCode::Char('c')));

        assert!(bar.process_event(&key(KeyCode::Left)).is_none());
    }
}
