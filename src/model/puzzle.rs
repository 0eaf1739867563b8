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

//! The hidden partition of a puzzle.
//!
//! A [`Puzzle`] is built once from a fetched [`PuzzleDocument`] and never
//! changes afterwards. It is the authority used to validate guesses.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{
    CATEGORY_COUNT, WORDS_PER_CATEGORY,
    document::PuzzleDocument,
};

/// Difficulty rank of a category, fixed by its position in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Difficulty {
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Difficulty {
    pub(crate) const ALL: [Difficulty; CATEGORY_COUNT] = [
        Difficulty::Yellow,
        Difficulty::Green,
        Difficulty::Blue,
        Difficulty::Purple,
    ];

    pub(crate) fn from_position(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Difficulty::Yellow => "yellow",
            Difficulty::Green => "green",
            Difficulty::Blue => "blue",
            Difficulty::Purple => "purple",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum MalformedPuzzleError {
    #[error("expected 4 categories but the puzzle has {0}")]
    CategoryCount(usize),

    #[error("category \"{title}\" has {count} cards, expected 4")]
    CardCount { title: String, count: usize },

    #[error("category \"{title}\" contains an empty card")]
    EmptyWord { title: String },

    #[error("the word \"{0}\" appears more than once")]
    DuplicateWord(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Category {
    pub(crate) title: String,
    pub(crate) words: Vec<String>,
}

impl Category {
    fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    fn overlap(&self, guess: &HashSet<&str>) -> usize {
        self.words.iter().filter(|w| guess.contains(w.as_str())).count()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Puzzle {
    categories: Vec<Category>,
    print_date: Option<String>,
    editor: Option<String>,
}

impl Puzzle {
    /// Validates a fetched document and builds the puzzle from it.
    ///
    /// The document must hold exactly four categories of exactly four
    /// non-empty cards, and no word may appear twice anywhere in the
    /// puzzle. Difficulty is assigned by category position.
    pub(crate) fn load(document: PuzzleDocument) -> Result<Self, MalformedPuzzleError> {
        if document.categories.len() != CATEGORY_COUNT {
            return Err(MalformedPuzzleError::CategoryCount(
                document.categories.len(),
            ));
        }

        let mut seen = HashSet::new();
        let mut categories = Vec::with_capacity(CATEGORY_COUNT);

        for category in document.categories {
            if category.cards.len() != WORDS_PER_CATEGORY {
                return Err(MalformedPuzzleError::CardCount {
                    title: category.title,
                    count: category.cards.len(),
                });
            }

            let mut words = Vec::with_capacity(WORDS_PER_CATEGORY);
            for card in category.cards {
                if card.content.trim().is_empty() {
                    return Err(MalformedPuzzleError::EmptyWord {
                        title: category.title,
                    });
                }
                if !seen.insert(card.content.clone()) {
                    return Err(MalformedPuzzleError::DuplicateWord(card.content));
                }
                words.push(card.content);
            }

            categories.push(Category {
                title: category.title,
                words,
            });
        }

        Ok(Self {
            categories,
            print_date: document.print_date,
            editor: document.editor,
        })
    }

    /// Every word in the puzzle, in category order.
    pub(crate) fn all_words(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|c| c.words.iter().cloned())
            .collect()
    }

    pub(crate) fn difficulty_of(&self, index: usize) -> Option<Difficulty> {
        if index < self.categories.len() {
            Difficulty::from_position(index)
        } else {
            None
        }
    }

    pub(crate) fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the index of the first category whose word set equals the
    /// guess.
    pub(crate) fn matching_category(&self, guess: &HashSet<&str>) -> Option<usize> {
        if guess.len() != WORDS_PER_CATEGORY {
            return None;
        }
        self.categories
            .iter()
            .position(|c| guess.iter().all(|word| c.contains(word)))
    }

    /// A four word guess that shares all but one word with some category.
    pub(crate) fn is_one_away(&self, guess: &HashSet<&str>) -> bool {
        guess.len() == WORDS_PER_CATEGORY
            && self
                .categories
                .iter()
                .any(|c| c.overlap(guess) == WORDS_PER_CATEGORY - 1)
    }

    pub(crate) fn print_date(&self) -> Option<&str> {
        self.print_date.as_deref()
    }

    pub(crate) fn editor(&self) -> Option<&str> {
        self.editor.as_deref()
    }
}
