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

//! Wire format for content service responses.
//!
//! The search and trending endpoints share one response envelope: a `data`
//! array of GIF records, each carrying a map of image variants keyed by
//! rendition name. Only the `fixed_width` preview and the `original` variant
//! are used; records missing either are dropped rather than failing the page.

use serde::Deserialize;

use crate::model::Gif;

#[derive(Debug, Deserialize)]
pub(crate) struct PageResponse {
    #[serde(default)]
    pub(crate) data: Vec<GifRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GifRecord {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) title: String,
    pub(crate) images: ImageVariants,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImageVariants {
    pub(crate) fixed_width: Option<ImageVariant>,
    pub(crate) original: Option<ImageVariant>,
}

// Giphy serialises the dimensions as decimal strings, not numbers.
#[derive(Debug, Deserialize)]
pub(crate) struct ImageVariant {
    pub(crate) url: String,
    #[serde(default)]
    pub(crate) width: String,
    #[serde(default)]
    pub(crate) height: String,
}

impl PageResponse {
    pub(crate) fn into_gifs(self) -> Vec<Gif> {
        self.data
            .into_iter()
            .filter_map(|record| {
                let preview = record.images.fixed_width?;
                let original = record.images.original?;

                Some(Gif {
                    id: record.id,
                    title: record.title,
                    preview_url: preview.url,
                    original_url: original.url,
                    width: original.width.parse().unwrap_or(0),
                    height: original.height.parse().unwrap_or(0),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_page_envelope() {
        let body = json!({
            "data": [
                {
                    "id": "abc123",
                    "title": "Dancing Cat",
                    "images": {
                        "fixed_width": { "url": "https://media.test/abc123/200w.gif", "width": "200", "height": "113" },
                        "original": { "url": "https://media.test/abc123/giphy.gif", "width": "480", "height": "270" }
                    }
                }
            ],
            "pagination": { "total_count": 1234, "count": 1, "offset": 0 },
            "meta": { "status": 200, "msg": "OK" }
        });

        let response: PageResponse = serde_json::from_value(body).unwrap();
        let gifs = response.into_gifs();

        assert_eq!(gifs.len(), 1);
        assert_eq!(gifs[0].id, "abc123");
        assert_eq!(gifs[0].title, "Dancing Cat");
        assert_eq!(gifs[0].preview_url, "https://media.test/abc123/200w.gif");
        assert_eq!(gifs[0].original_url, "https://media.test/abc123/giphy.gif");
        assert_eq!(gifs[0].width, 480);
        assert_eq!(gifs[0].height, 270);
    }

    #[test]
    fn drops_records_missing_image_variants() {
        let body = json!({
            "data": [
                {
                    "id": "no-original",
                    "title": "",
                    "images": {
                        "fixed_width": { "url": "https://media.test/x/200w.gif" }
                    }
                },
                {
                    "id": "complete",
                    "title": "",
                    "images": {
                        "fixed_width": { "url": "https://media.test/y/200w.gif" },
                        "original": { "url": "https://media.test/y/giphy.gif" }
                    }
                }
            ]
        });

        let response: PageResponse = serde_json::from_value(body).unwrap();
        let gifs = response.into_gifs();

        assert_eq!(gifs.len(), 1);
        assert_eq!(gifs[0].id, "complete");
    }

    #[test]
    fn tolerates_missing_fields() {
        let response: PageResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.into_gifs().is_empty());

        let body = json!({
            "data": [
                {
                    "id": "bare",
                    "images": {
                        "fixed_width": { "url": "https://media.test/b/200w.gif" },
                        "original": { "url": "https://media.test/b/giphy.gif", "width": "not-a-number" }
                    }
                }
            ]
        });

        let response: PageResponse = serde_json::from_value(body).unwrap();
        let gifs = response.into_gifs();
        assert_eq!(gifs[0].title, "");
        assert_eq!(gifs[0].width, 0);
    }
}
