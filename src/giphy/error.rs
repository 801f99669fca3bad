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

//! Error types for the content service client.

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum GiphyError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("api returned http {status} for {url}")]
    Status { status: u16, url: String },

    #[error("invalid api url: {0}")]
    Url(#[from] url::ParseError),
}

pub(crate) type GiphyResult<T> = Result<T, GiphyError>;
