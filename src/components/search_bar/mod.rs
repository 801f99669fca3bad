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

//! Search input state management.
//!
//! This module manages the text input component for the query. While the bar
//! has focus, every change to the text emits a query-changed action so each
//! keystroke triggers a fresh page request.

mod event;
mod render;

use tui_input::Input;

#[derive(Debug)]
pub(crate) enum SearchBarAction {
    QueryChanged(String),
}

pub(crate) struct SearchBar {
    active: bool,
    pub(crate) input: Input,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn activate(&mut self) {
        self.active = true;
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }
}
