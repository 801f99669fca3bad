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

//! Application configuration.
//!
//! This module manages the application configuration file. The API key is a
//! configuration value, not a compile-time constant, so a deployment can use
//! its own key without rebuilding.

use std::path::PathBuf;

use directories::UserDirs;
use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "gifui";

// Giphy's public beta key, fine for casual use but rate-limited.
const DEFAULT_API_KEY: &str = "dc6zaTOxFJmzC";

const DEFAULT_API_BASE_URL: &str = "https://api.giphy.com/v1/";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    pub api_key: String,
    pub api_base_url: String,
    pub download_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_key: DEFAULT_API_KEY.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            download_dir: None,
        }
    }
}

impl AppConfig {
    /// Resolves the directory downloads are written to: the configured
    /// directory if set, otherwise the platform download folder, otherwise
    /// the current directory.
    pub fn download_dir(&self) -> PathBuf {
        if let Some(dir) = &self.download_dir {
            return PathBuf::from(dir);
        }

        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

// confy writes the default file on first load, so users can find it and set
// their own API key.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_download_dir_wins() {
        let config = AppConfig {
            download_dir: Some("/tmp/gifs".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(config.download_dir(), PathBuf::from("/tmp/gifs"));
    }
}
