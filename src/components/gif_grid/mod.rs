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

//! Interactive result grid widget and state management.
//!
//! This module provides the fixed-column grid for browsing results. It
//! separates persistent state (`GifGridState`) from the transient widget view
//! (`GifGrid`) built against the current result slice. Moving the cursor into
//! the last loaded row surfaces a near-end action, which the host translates
//! into a "load more" request.

mod event;
mod render;

use crate::model::Gif;

pub(crate) const GRID_COLUMNS: usize = 3;

#[derive(Debug, PartialEq)]
pub(crate) enum GifGridAction {
    NearEnd,
    Open(Gif),
}

pub(crate) struct GifGridState {
    pub(crate) selected: usize,
    pub(crate) scroll_row: usize,
}

impl GifGridState {
    pub(crate) fn new() -> Self {
        Self {
            selected: 0,
            scroll_row: 0,
        }
    }

    /// Moves the cursor back to the top-left cell. Called when a fresh page
    /// replaces the collection.
    pub(crate) fn reset(&mut self) {
        self.selected = 0;
        self.scroll_row = 0;
    }

    pub(crate) fn as_widget<'a>(&'a mut self, gifs: &'a [Gif]) -> GifGrid<'a> {
        GifGrid { gifs, state: self }
    }
}

pub(crate) struct GifGrid<'a> {
    gifs: &'a [Gif],
    state: &'a mut GifGridState,
}

impl GifGrid<'_> {
    fn goto_next(&mut self) {
        if self.gifs.is_empty() {
            return;
        }
        if self.state.selected + 1 < self.gifs.len() {
            self.state.selected += 1;
        }
    }

    fn goto_previous(&mut self) {
        if self.state.selected > 0 {
            self.state.selected -= 1;
        }
    }

    fn goto_row_down(&mut self) {
        if self.gifs.is_empty() {
            return;
        }
        let candidate = self.state.selected + GRID_COLUMNS;
        if candidate < self.gifs.len() {
            self.state.selected = candidate;
        } else {
            self.state.selected = self.gifs.len() - 1;
        }
    }

    fn goto_row_up(&mut self) {
        self.state.selected = self.state.selected.saturating_sub(GRID_COLUMNS);
    }

    fn goto_first(&mut self) {
        self.state.selected = 0;
    }

    fn goto_last(&mut self) {
        if !self.gifs.is_empty() {
            self.state.selected = self.gifs.len() - 1;
        }
    }

    fn selected_gif(&self) -> Option<&Gif> {
        self.gifs.get(self.state.selected)
    }

    /// Whether the cursor sits in the final loaded row of the grid.
    fn on_last_row(&self) -> bool {
        if self.gifs.is_empty() {
            return false;
        }
        let rows = self.gifs.len().div_ceil(GRID_COLUMNS);
        self.state.selected / GRID_COLUMNS + 1 >= rows
    }
}
