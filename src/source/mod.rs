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

//! Puzzle data source.
//!
//! Retrieves the puzzle document for a given day, either from the remote
//! puzzle service or from a local JSON file. The fetch is a single blocking
//! call made once before the game starts, there are no retries.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

use crate::{config::AppConfig, model::document::PuzzleDocument};

#[derive(Error, Debug)]
pub(crate) enum PuzzleLoadError {
    #[error("Failed to fetch daily data: {0}")]
    Network(String),

    #[error("Failed to fetch daily data: HTTP status {code} from {url}")]
    Status { code: u16, url: String },

    #[error("Failed to read puzzle file {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to parse JSON data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PuzzleSource {
    Remote { url: String },
    File(PathBuf),
}

impl PuzzleSource {
    /// The remote puzzle for a given day.
    pub(crate) fn for_date(config: &AppConfig, date: NaiveDate) -> Self {
        let base = config.api_base_url.trim_end_matches('/');
        Self::Remote {
            url: format!("{}/{}.json", base, date.format("%Y-%m-%d")),
        }
    }

    pub(crate) fn fetch(&self) -> Result<PuzzleDocument, PuzzleLoadError> {
        let body = match self {
            PuzzleSource::Remote { url } => fetch_url(url)?,
            PuzzleSource::File(path) => read_file(path)?,
        };

        let document = parse_document(&body)?;
        info!(
            status = document.status.as_deref().unwrap_or("unknown"),
            print_date = document.print_date.as_deref().unwrap_or("unknown"),
            categories = document.categories.len(),
            "Puzzle document loaded"
        );

        Ok(document)
    }
}

fn fetch_url(url: &str) -> Result<String, PuzzleLoadError> {
    info!(%url, "Fetching puzzle");

    let response = match ureq::get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => {
            return Err(PuzzleLoadError::Status {
                code,
                url: url.to_string(),
            });
        }
        Err(e) => return Err(PuzzleLoadError::Network(e.to_string())),
    };

    response
        .into_string()
        .map_err(|e| PuzzleLoadError::Network(e.to_string()))
}

fn read_file(path: &Path) -> Result<String, PuzzleLoadError> {
    debug!(path = %path.display(), "Reading puzzle file");

    fs::read_to_string(path).map_err(|source| PuzzleLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn parse_document(body: &str) -> Result<PuzzleDocument, PuzzleLoadError> {
    Ok(serde_json::from_str(body)?)
}
