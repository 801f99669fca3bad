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

//! Paged result collection management.
//!
//! This module owns the search text, the pagination offset, and the
//! accumulated list of GIFs. Every query change resets the offset to zero and
//! replaces the collection when its page arrives; "load more" advances the
//! offset by one page and appends.
//!
//! Requests are stamped with a monotonically increasing sequence token.
//! Responses carrying a stale token (issued before the most recent request)
//! are discarded, so a slow response for a superseded query can never
//! overwrite fresher results.

use crate::model::{Gif, PAGE_SIZE, PageRequest};

pub(crate) struct Results {
    query: String,
    offset: usize,
    gifs: Vec<Gif>,
    latest_seq: u64,

    pub(crate) loading: bool,
    pub(crate) fetching_more: bool,
}

impl Results {
    pub(crate) fn new() -> Self {
        Self {
            query: String::new(),
            offset: 0,
            gifs: vec![],
            latest_seq: 0,
            loading: false,
            fetching_more: false,
        }
    }

    pub(crate) fn gifs(&self) -> &[Gif] {
        &self.gifs
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the current query text and starts a fresh page request.
    ///
    /// The offset always resets to zero; the existing collection is kept on
    /// screen until the replacement page arrives. Rapid successive calls each
    /// issue a new request, the sequence token makes sure only the newest one
    /// takes effect.
    pub(crate) fn set_query(&mut self, text: &str) -> PageRequest {
        self.query = text.to_string();
        self.offset = 0;
        self.loading = true;
        self.fetching_more = false;
        self.next_request()
    }

    /// Advances the offset by one page and requests the next page.
    ///
    /// Returns `None` while a fetch is already in flight, so reaching the end
    /// of the grid repeatedly cannot issue overlapping "load more" requests.
    pub(crate) fn load_more(&mut self) -> Option<PageRequest> {
        if self.loading || self.fetching_more || self.gifs.is_empty() {
            return None;
        }

        self.offset += PAGE_SIZE;
        self.fetching_more = true;
        Some(self.next_request())
    }

    /// Merges an arrived page into the collection.
    ///
    /// Stale responses are ignored entirely, including their loading flags,
    /// a newer request is still outstanding and will clear them when it
    /// resolves. Returns whether the page was applied.
    pub(crate) fn apply_page(&mut self, seq: u64, offset: usize, page: Vec<Gif>) -> bool {
        if seq != self.latest_seq {
            return false;
        }

        if offset == 0 {
            self.gifs = page;
        } else {
            self.gifs.extend(page);
        }

        self.loading = false;
        self.fetching_more = false;
        true
    }

    /// Clears the loading flags after a failed fetch.
    ///
    /// The collection is left as-is; there is no retry and no user-visible
    /// error state beyond the status line.
    pub(crate) fn fetch_failed(&mut self, seq: u64) {
        if seq == self.latest_seq {
            self.loading = false;
            self.fetching_more = false;
        }
    }

    fn next_request(&mut self) -> PageRequest {
        self.latest_seq += 1;
        PageRequest {
            seq: self.latest_seq,
            query: self.query.clone(),
            offset: self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gif(id: &str) -> Gif {
        Gif {
            id: id.to_string(),
            title: format!("gif {id}"),
            preview_url: format!("https://media.test/{id}/200w.gif"),
            original_url: format!("https://media.test/{id}/giphy.gif"),
            width: 480,
            height: 270,
        }
    }

    fn page(prefix: &str, count: usize) -> Vec<Gif> {
        (0..count).map(|i| gif(&format!("{prefix}{i}"))).collect()
    }

    #[test]
    fn set_query_resets_offset_and_flags() {
        let mut results = Results::new();
        let first = results.set_query("");
        results.apply_page(first.seq, 0, page("t", 20));
        results.load_more();

        let request = results.set_query("cats");
        assert_eq!(request.offset, 0);
        assert_eq!(request.query, "cats");
        assert!(results.loading);
        assert!(!results.fetching_more);
    }

    #[test]
    fn fresh_page_replaces_collection() {
        let mut results = Results::new();
        let first = results.set_query("");
        assert!(results.apply_page(first.seq, first.offset, page("t", 20)));
        assert_eq!(results.gifs().len(), 20);

        let second = results.set_query("cats");
        assert!(results.apply_page(second.seq, second.offset, page("c", 5)));
        assert_eq!(results.gifs().len(), 5);
        assert_eq!(results.gifs()[0].id, "c0");
    }

    #[test]
    fn load_more_appends_preserving_order() {
        let mut results = Results::new();
        let first = results.set_query("dogs");
        results.apply_page(first.seq, first.offset, page("a", 20));

        let more = results.load_more().expect("load more should be issued");
        assert_eq!(more.offset, 20);
        results.apply_page(more.seq, more.offset, page("b", 20));

        assert_eq!(results.gifs().len(), 40);
        assert_eq!(results.gifs()[0].id, "a0");
        assert_eq!(results.gifs()[20].id, "b0");

        let even_more = results.load_more().expect("load more should be issued");
        assert_eq!(even_more.offset, 40);
    }

    #[test]
    fn load_more_is_noop_while_fetching() {
        let mut results = Results::new();
        let first = results.set_query("");
        results.apply_page(first.seq, first.offset, page("a", 20));

        let more = results.load_more();
        assert!(more.is_some());
        // Second trigger before the page arrives must not advance the offset.
        assert!(results.load_more().is_none());

        let more = more.unwrap();
        results.apply_page(more.seq, more.offset, page("b", 20));
        assert_eq!(results.load_more().unwrap().offset, 40);
    }

    #[test]
    fn load_more_is_noop_with_empty_collection() {
        let mut results = Results::new();
        let first = results.set_query("nothing");
        results.apply_page(first.seq, first.offset, vec![]);
        assert!(results.load_more().is_none());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut results = Results::new();
        let stale = results.set_query("cats");
        let fresh = results.set_query("cats2");

        // The response for the earlier request arrives last, it must lose.
        assert!(results.apply_page(fresh.seq, fresh.offset, page("fresh", 3)));
        assert!(!results.apply_page(stale.seq, stale.offset, page("stale", 20)));

        assert_eq!(results.gifs().len(), 3);
        assert_eq!(results.gifs()[0].id, "fresh0");
    }

    #[test]
    fn stale_failure_keeps_loading_flag() {
        let mut results = Results::new();
        let stale = results.set_query("cats");
        let fresh = results.set_query("cats2");

        results.fetch_failed(stale.seq);
        assert!(results.loading);

        results.fetch_failed(fresh.seq);
        assert!(!results.loading);
    }

    #[test]
    fn failed_fetch_leaves_collection_unchanged() {
        let mut results = Results::new();
        let first = results.set_query("");
        results.apply_page(first.seq, first.offset, page("a", 20));

        let more = results.load_more().unwrap();
        results.fetch_failed(more.seq);

        assert_eq!(results.gifs().len(), 20);
        assert!(!results.fetching_more);
    }

    #[test]
    fn duplicate_ids_across_pages_are_kept() {
        let mut results = Results::new();
        let first = results.set_query("");
        results.apply_page(first.seq, first.offset, page("x", 20));

        let more = results.load_more().unwrap();
        results.apply_page(more.seq, more.offset, page("x", 20));

        assert_eq!(results.gifs().len(), 40);
    }
}
