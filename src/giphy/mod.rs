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

//! Content service client.
//!
//! This module issues the read-only page requests against the Giphy API.
//! A non-empty (after trimming) query selects the `search` endpoint, an empty
//! one selects `trending`; both carry the API key, the fixed page size, and
//! the caller's offset. The API key and base URL come from the application
//! configuration rather than being baked into the binary.
//!
//! Requests are blocking by design: the client lives on the background task
//! worker thread, never on the UI thread.

mod error;
mod response;

use std::time::Duration;

use url::Url;

pub(crate) use crate::giphy::error::{GiphyError, GiphyResult};
use crate::{
    config::AppConfig,
    giphy::response::PageResponse,
    model::{Gif, PAGE_SIZE},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) struct GiphyClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: Url,
}

impl GiphyClient {
    pub(crate) fn new(config: &AppConfig) -> GiphyResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: Url::parse(&config.api_base_url)?,
        })
    }

    /// Fetches one page of results.
    ///
    /// On success the parsed items are returned in API order; pagination
    /// bookkeeping stays with the caller.
    pub(crate) fn fetch_page(&self, query: &str, offset: usize) -> GiphyResult<Vec<Gif>> {
        let url = self.page_url(query, offset)?;

        let response = self.http.get(url.as_str()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GiphyError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let page: PageResponse = response.json()?;
        Ok(page.into_gifs())
    }

    /// Builds the request URL for one page, choosing the endpoint shape from
    /// the (trimmed) query text.
    fn page_url(&self, query: &str, offset: usize) -> GiphyResult<Url> {
        let query = query.trim();
        let endpoint = if query.is_empty() {
            "gifs/trending"
        } else {
            "gifs/search"
        };

        let mut url = self.base_url.join(endpoint)?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            if !query.is_empty() {
                pairs.append_pair("q", query);
            }
            pairs.append_pair("limit", &PAGE_SIZE.to_string());
            pairs.append_pair("offset", &offset.to_string());
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GiphyClient {
        let config = AppConfig {
            api_key: "test-key".to_string(),
            ..AppConfig::default()
        };
        GiphyClient::new(&config).unwrap()
    }

    #[test]
    fn empty_query_uses_trending_endpoint() {
        let url = client().page_url("", 0).unwrap();
        assert_eq!(url.path(), "/v1/gifs/trending");
        assert_eq!(
            url.query(),
            Some("api_key=test-key&limit=20&offset=0")
        );
    }

    #[test]
    fn whitespace_query_uses_trending_endpoint() {
        let url = client().page_url("   ", 40).unwrap();
        assert_eq!(url.path(), "/v1/gifs/trending");
        assert_eq!(
            url.query(),
            Some("api_key=test-key&limit=20&offset=40")
        );
    }

    #[test]
    fn non_empty_query_uses_search_endpoint() {
        let url = client().page_url("dancing cats", 20).unwrap();
        assert_eq!(url.path(), "/v1/gifs/search");
        assert_eq!(
            url.query(),
            Some("api_key=test-key&q=dancing+cats&limit=20&offset=20")
        );
    }

    #[test]
    fn query_is_trimmed_before_shaping() {
        let url = client().page_url("  cats  ", 0).unwrap();
        assert_eq!(url.path(), "/v1/gifs/search");
        assert!(url.query().unwrap().contains("q=cats&"));
    }
}
