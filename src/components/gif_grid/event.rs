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

//! Input handling and event processing for the result grid.
//!
//! This module maps raw terminal keyboard events to grid navigation and
//! surfaces the actions the host must react to: opening the selected item
//! and approaching the end of the loaded content.

use crossterm::event::{Event, KeyCode};

use crate::components::{GifGrid, GifGridAction};

impl GifGrid<'_> {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<GifGridAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('l') | KeyCode::Right => self.goto_next(),
            KeyCode::Char('h') | KeyCode::Left => self.goto_previous(),
            KeyCode::Char('j') | KeyCode::Down => self.goto_row_down(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_row_up(),
            KeyCode::Char('g') => self.goto_first(),
            KeyCode::Char('G') => self.goto_last(),

            KeyCode::Enter => {
                return self
                    .selected_gif()
                    .cloned()
                    .map(GifGridAction::Open);
            }

            _ => return None,
        }

        if self.on_last_row() {
            return Some(GifGridAction::NearEnd);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::GifGridState;
    use crate::model::Gif;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn gifs(count: usize) -> Vec<Gif> {
        (0..count)
            .map(|i| Gif {
                id: format!("g{i}"),
                title: format!("gif {i}"),
                preview_url: String::new(),
                original_url: String::new(),
                width: 0,
                height: 0,
            })
            .collect()
    }

    #[test]
    fn navigation_moves_by_cell_and_row() {
        let gifs = gifs(9);
        let mut state = GifGridState::new();

        let mut grid = state.as_widget(&gifs);
        grid.process_event(&key(KeyCode::Right));
        grid.process_event(&key(KeyCode::Down));
        assert_eq!(state.selected, 4);

        let mut grid = state.as_widget(&gifs);
        grid.process_event(&key(KeyCode::Up));
        grid.process_event(&key(KeyCode::Left));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn entering_last_row_signals_near_end() {
        let gifs = gifs(6);
        let mut state = GifGridState::new();

        let mut grid = state.as_widget(&gifs);
        let action = grid.process_event(&key(KeyCode::Down));
        assert_eq!(state.selected, 3);
        assert_eq!(action, Some(GifGridAction::NearEnd));
    }

    #[test]
    fn moving_within_earlier_rows_is_silent() {
        let gifs = gifs(9);
        let mut state = GifGridState::new();

        let mut grid = state.as_widget(&gifs);
        assert!(grid.process_event(&key(KeyCode::Right)).is_none());
        assert!(grid.process_event(&key(KeyCode::Down)).is_none());
    }

    #[test]
    fn enter_opens_the_selected_gif() {
        let gifs = gifs(3);
        let mut state = GifGridState::new();
        state.selected = 2;

        let mut grid = state.as_widget(&gifs);
        let action = grid.process_event(&key(KeyCode::Enter));
        assert!(matches!(action, Some(GifGridAction::Open(gif)) if gif.id == "g2"));
    }

    #[test]
    fn navigation_clamps_at_collection_bounds() {
        let gifs = gifs(4);
        let mut state = GifGridState::new();

        let mut grid = state.as_widget(&gifs);
        grid.process_event(&key(KeyCode::Down));
        grid.process_event(&key(KeyCode::Down));
        assert_eq!(state.selected, 3);

        let mut grid = state.as_widget(&gifs);
        grid.process_event(&key(KeyCode::Char('G')));
        grid.process_event(&key(KeyCode::Right));
        assert_eq!(state.selected, 3);
    }

    #[test]
    fn empty_grid_emits_nothing() {
        let gifs: Vec<Gif> = vec![];
        let mut state = GifGridState::new();

        let mut grid = state.as_widget(&gifs);
        assert!(grid.process_event(&key(KeyCode::Down)).is_none());
        assert!(grid.process_event(&key(KeyCode::Enter)).is_none());
    }
}
