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

//! Wire representation of a daily puzzle document.
//!
//! Only the fields the game needs are modelled, anything else in the
//! document is ignored.

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct PuzzleDocument {
    pub(crate) status: Option<String>,
    pub(crate) print_date: Option<String>,
    pub(crate) editor: Option<String>,
    pub(crate) categories: Vec<CategoryDocument>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct CategoryDocument {
    pub(crate) title: String,
    pub(crate) cards: Vec<Card>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct Card {
    // Picture cards carry an image instead of text, those end up empty here
    #[serde(default)]
    pub(crate) content: String,
}

#[cfg(test)]
impl CategoryDocument {
    pub(crate) fn new(title: &str, words: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            cards: words
                .iter()
                .map(|word| Card {
                    content: word.to_string(),
                })
                .collect(),
        }
    }
}
