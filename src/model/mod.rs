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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application: GIFs as
//! returned by the content service, and the paged result collection that
//! accumulates them.

pub(crate) mod results;

/// Number of items requested per page.
pub(crate) const PAGE_SIZE: usize = 20;

/// A single animated image as returned by the content service.
///
/// Only the fields the UI actually touches are kept: a stable identifier,
/// the fixed-width preview used in the grid, and the original-resolution
/// variant used for sharing and downloading.
#[derive(Debug, Clone, PartialEq)]
pub struct Gif {
    pub id: String,
    pub title: String,
    pub preview_url: String,
    pub original_url: String,
    pub width: u32,
    pub height: u32,
}

/// Describes one outbound page request.
///
/// The sequence token orders requests so that a response arriving late for a
/// superseded query can be recognised and discarded.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PageRequest {
    pub(crate) seq: u64,
    pub(crate) query: String,
    pub(crate) offset: usize,
}
