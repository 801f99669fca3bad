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

//! Reusable user interface components.
//!
//! Each component pairs its state with event handling and rendering
//! sub-modules:
//!
//! * [`search_bar`]: the query input driving search and trending requests.
//! * [`gif_grid`]: the paged grid of results.
//! * [`overlay`]: the full-screen detail view with share and download
//!   actions.
//!
//! All public members of sub-modules are re-exported at this level for
//! convenient access.

mod gif_grid;
mod overlay;
mod search_bar;

pub(crate) use gif_grid::{GifGrid, GifGridAction, GifGridState};
pub(crate) use overlay::{Overlay, OverlayAction};
pub(crate) use search_bar::{SearchBar, SearchBarAction};
