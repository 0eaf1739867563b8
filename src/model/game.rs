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

//! Game session state.
//!
//! [`GameState`] holds everything that changes while the player works
//! through a puzzle: the words still on the board, the cursor, the current
//! selection, the groups solved so far and the mistake count. Every player
//! action is a transition on this value; invalid moves are clamped and wrong
//! guesses are counted, nothing here is treated as an error.

use std::collections::{BTreeSet, HashSet};

use rand::{rng, seq::SliceRandom};
use tracing::{debug, info};

use crate::model::{CATEGORY_COUNT, Difficulty, GRID_COLUMNS, MAX_MISTAKES, Puzzle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GameStatus {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolvedGroup {
    pub(crate) title: String,
    pub(crate) words: Vec<String>,
    pub(crate) difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GuessOutcome {
    Correct(SolvedGroup),
    Incorrect { one_away: bool },
}

#[derive(Debug, Clone)]
pub(crate) struct GameState {
    words: Vec<String>,
    cursor: usize,
    selected: BTreeSet<usize>,
    solved: Vec<SolvedGroup>,
    mistakes: usize,
}

impl GameState {
    /// Starts a new session with the words laid out in random order.
    pub(crate) fn initialize(mut words: Vec<String>) -> Self {
        words.shuffle(&mut rng());
        Self::with_order(words)
    }

    /// Starts a new session with the words laid out exactly as given.
    pub(crate) fn with_order(words: Vec<String>) -> Self {
        Self {
            words,
            cursor: 0,
            selected: BTreeSet::new(),
            solved: Vec::new(),
            mistakes: 0,
        }
    }

    pub(crate) fn status(&self) -> GameStatus {
        if self.solved.len() >= CATEGORY_COUNT {
            GameStatus::Won
        } else if self.mistakes >= MAX_MISTAKES {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    /// Re-orders the remaining words at random.
    ///
    /// The selection follows the selected words to their new positions, the
    /// cursor stays where it is on the grid.
    pub(crate) fn shuffle(&mut self) {
        let selected_words: HashSet<String> = self
            .selected
            .iter()
            .filter_map(|&i| self.words.get(i).cloned())
            .collect();

        self.words.shuffle(&mut rng());

        self.selected = self
            .words
            .iter()
            .enumerate()
            .filter(|(_, word)| selected_words.contains(*word))
            .map(|(i, _)| i)
            .collect();

        debug!(selected = self.selected.len(), "Shuffled remaining words");
    }

    /// Moves the cursor one step on a grid of [`GRID_COLUMNS`] columns.
    ///
    /// Rows and columns are clamped to the grid, and the resulting index is
    /// clamped to the last remaining word, so moving into the missing cells
    /// of a short final row lands on the last word.
    pub(crate) fn move_cursor(&mut self, direction: Direction) {
        let len = self.words.len();
        if len == 0 {
            return;
        }

        let rows = len.div_ceil(GRID_COLUMNS);
        let mut row = self.cursor / GRID_COLUMNS;
        let mut col = self.cursor % GRID_COLUMNS;

        match direction {
            Direction::Up => row = row.saturating_sub(1),
            Direction::Down => row = (row + 1).min(rows - 1),
            Direction::Left => col = col.saturating_sub(1),
            Direction::Right => col = (col + 1).min(GRID_COLUMNS - 1),
        }

        self.cursor = (row * GRID_COLUMNS + col).min(len - 1);
    }

    /// Selects the word under the cursor, or deselects it if it was already
    /// selected.
    ///
    /// There is no limit on the number of selected words, a guess that is
    /// not exactly four words can never match a category.
    pub(crate) fn toggle_selection(&mut self) {
        if self.cursor >= self.words.len() {
            return;
        }
        if !self.selected.insert(self.cursor) {
            self.selected.remove(&self.cursor);
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Checks the selected words against the puzzle.
    ///
    /// A correct guess moves the group off the board and clears the
    /// selection. A wrong guess costs a mistake and leaves the selection as
    /// it was. Returns `None` once the game is over.
    pub(crate) fn submit_guess(&mut self, puzzle: &Puzzle) -> Option<GuessOutcome> {
        if self.status() != GameStatus::Playing {
            return None;
        }

        let guess: HashSet<&str> = self
            .selected
            .iter()
            .filter_map(|&i| self.words.get(i))
            .map(String::as_str)
            .collect();

        let Some(index) = puzzle.matching_category(&guess) else {
            let one_away = puzzle.is_one_away(&guess);
            self.mistakes += 1;
            info!(
                guessed = guess.len(),
                mistakes = self.mistakes,
                one_away,
                "Incorrect guess"
            );
            return Some(GuessOutcome::Incorrect { one_away });
        };

        let category = &puzzle.categories()[index];
        let group = SolvedGroup {
            title: category.title.clone(),
            words: category.words.clone(),
            difficulty: puzzle.difficulty_of(index)?,
        };

        self.words.retain(|word| !group.words.contains(word));
        self.selected.clear();
        self.cursor = self.cursor.min(self.words.len().saturating_sub(1));
        self.solved.push(group.clone());

        info!(
            title = %group.title,
            difficulty = group.difficulty.label(),
            solved = self.solved.len(),
            "Correct guess"
        );

        Some(GuessOutcome::Correct(group))
    }

    pub(crate) fn words(&self) -> &[String] {
        &self.words
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub(crate) fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub(crate) fn solved(&self) -> &[SolvedGroup] {
        &self.solved
    }

    pub(crate) fn mistakes(&self) -> usize {
        self.mistakes
    }

    pub(crate) fn mistakes_remaining(&self) -> usize {
        MAX_MISTAKES.saturating_sub(self.mistakes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::puzzle::tests::sample_puzzle;

    const ALL_DIRECTIONS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn ordered_game(puzzle: &Puzzle) -> GameState {
        GameState::with_order(puzzle.all_words())
    }

    fn game_of(len: usize) -> GameState {
        GameState::with_order((0..len).map(|i| format!("w{i}")).collect())
    }

    fn select_words(game: &mut GameState, words: &[&str]) {
        for word in words {
            let index = game.words().iter().position(|w| w == word).unwrap();
            game.cursor = index;
            game.toggle_selection();
        }
    }

    fn selected_words(game: &GameState) -> HashSet<String> {
        game.selected()
            .iter()
            .map(|&i| game.words()[i].clone())
            .collect()
    }

    #[test]
    fn initialize_permutes_all_words() {
        let puzzle = sample_puzzle();
        let game = GameState::initialize(puzzle.all_words());

        let mut words = game.words().to_vec();
        words.sort();
        let mut expected = puzzle.all_words();
        expected.sort();

        assert_eq!(words, expected);
        assert_eq!(game.cursor(), 0);
        assert!(game.selected().is_empty());
        assert!(game.solved().is_empty());
        assert_eq!(game.mistakes(), 0);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn cursor_moves_on_four_column_grid() {
        let mut game = game_of(16);

        game.move_cursor(Direction::Right);
        assert_eq!(game.cursor(), 1);
        game.move_cursor(Direction::Down);
        assert_eq!(game.cursor(), 5);
        game.move_cursor(Direction::Left);
        assert_eq!(game.cursor(), 4);
        game.move_cursor(Direction::Up);
        assert_eq!(game.cursor(), 0);
    }

    #[test]
    fn cursor_clamps_at_grid_edges() {
        let mut game = game_of(16);

        game.move_cursor(Direction::Up);
        assert_eq!(game.cursor(), 0);
        game.move_cursor(Direction::Left);
        assert_eq!(game.cursor(), 0);

        for _ in 0..10 {
            game.move_cursor(Direction::Right);
        }
        assert_eq!(game.cursor(), 3);

        for _ in 0..10 {
            game.move_cursor(Direction::Down);
        }
        assert_eq!(game.cursor(), 15);
    }

    #[test]
    fn move_up_on_top_row_keeps_row() {
        let mut game = game_of(16);
        for col in 0..4 {
            game.cursor = col;
            game.move_cursor(Direction::Up);
            assert_eq!(game.cursor(), col);
        }
    }

    #[test]
    fn cursor_lands_on_last_word_of_short_row() {
        let mut game = game_of(6);

        game.cursor = 3;
        game.move_cursor(Direction::Down);
        assert_eq!(game.cursor(), 5);

        game.cursor = 5;
        game.move_cursor(Direction::Right);
        assert_eq!(game.cursor(), 5);

        game.cursor = 2;
        game.move_cursor(Direction::Down);
        assert_eq!(game.cursor(), 5);
    }

    #[test]
    fn cursor_stays_in_bounds_for_every_move() {
        for len in 1..=16 {
            let mut game = game_of(len);
            for start in 0..len {
                for direction in ALL_DIRECTIONS {
                    game.cursor = start;
                    game.move_cursor(direction);
                    assert!(game.cursor() < len, "len {len} start {start} {direction:?}");
                }
            }
        }
    }

    #[test]
    fn move_on_empty_board_is_ignored() {
        let mut game = game_of(0);
        for direction in ALL_DIRECTIONS {
            game.move_cursor(direction);
            assert_eq!(game.cursor(), 0);
        }
        game.toggle_selection();
        assert!(game.selected().is_empty());
    }

    #[test]
    fn toggle_selection_adds_and_removes() {
        let mut game = game_of(16);
        game.toggle_selection();
        assert!(game.is_selected(0));
        game.toggle_selection();
        assert!(!game.is_selected(0));
    }

    #[test]
    fn selection_is_not_capped() {
        let mut game = game_of(16);
        for index in 0..6 {
            game.cursor = index;
            game.toggle_selection();
        }
        assert_eq!(game.selected().len(), 6);
    }

    #[test]
    fn clear_selection_empties_selection() {
        let mut game = game_of(16);
        game.toggle_selection();
        game.move_cursor(Direction::Right);
        game.toggle_selection();
        game.clear_selection();
        assert!(game.selected().is_empty());
    }

    #[test]
    fn shuffle_keeps_selected_words() {
        let puzzle = sample_puzzle();
        let mut game = ordered_game(&puzzle);
        select_words(&mut game, &["a", "f", "k"]);
        let cursor = game.cursor();

        game.shuffle();

        assert_eq!(game.words().len(), 16);
        assert_eq!(game.cursor(), cursor);
        let expected: HashSet<String> = ["a", "f", "k"].iter().map(|s| s.to_string()).collect();
        assert_eq!(selected_words(&game), expected);
    }

    #[test]
    fn correct_guess_in_any_order() {
        let puzzle = sample_puzzle();
        let mut game = ordered_game(&puzzle);
        select_words(&mut game, &["p", "n", "m", "o"]);

        let outcome = game.submit_guess(&puzzle).unwrap();
        let GuessOutcome::Correct(group) = outcome else {
            panic!("expected a correct guess");
        };
        assert_eq!(group.title, "P");
        assert_eq!(group.difficulty, Difficulty::Purple);
    }

    #[test]
    fn correct_guess_removes_group() {
        let puzzle = sample_puzzle();
        let mut game = ordered_game(&puzzle);
        select_words(&mut game, &["a", "b", "c", "d"]);

        let outcome = game.submit_guess(&puzzle).unwrap();

        assert!(matches!(
            outcome,
            GuessOutcome::Correct(SolvedGroup { ref title, difficulty: Difficulty::Yellow, .. }) if title == "Y"
        ));
        assert_eq!(game.solved().len(), 1);
        assert_eq!(game.words().len(), 12);
        for word in ["a", "b", "c", "d"] {
            assert!(!game.words().iter().any(|w| w == word));
            assert!(game.solved()[0].words.iter().any(|w| w == word));
        }
        assert!(game.selected().is_empty());
        assert!(game.cursor() < game.words().len());
        assert_eq!(game.mistakes(), 0);
    }

    #[test]
    fn correct_guess_reclamps_cursor() {
        let puzzle = sample_puzzle();
        let mut game = ordered_game(&puzzle);
        select_words(&mut game, &["m", "n", "o", "p"]);
        assert_eq!(game.cursor(), 15);

        game.submit_guess(&puzzle);

        assert_eq!(game.cursor(), 11);
    }

    #[test]
    fn cross_category_guess_is_a_mistake() {
        let puzzle = sample_puzzle();
        let mut game = ordered_game(&puzzle);
        select_words(&mut game, &["a", "b", "c", "e"]);

        let outcome = game.submit_guess(&puzzle).unwrap();

        assert_eq!(outcome, GuessOutcome::Incorrect { one_away: true });
        assert_eq!(game.mistakes(), 1);
        assert_eq!(game.words().len(), 16);
        assert_eq!(game.selected().len(), 4);
    }

    #[test]
    fn wrong_sized_guesses_are_mistakes() {
        let puzzle = sample_puzzle();
        let mut game = ordered_game(&puzzle);

        assert_eq!(
            game.submit_guess(&puzzle),
            Some(GuessOutcome::Incorrect { one_away: false })
        );
        assert_eq!(game.mistakes(), 1);

        select_words(&mut game, &["a", "b", "c", "d", "e"]);
        assert_eq!(
            game.submit_guess(&puzzle),
            Some(GuessOutcome::Incorrect { one_away: false })
        );
        assert_eq!(game.mistakes(), 2);
        assert_eq!(game.mistakes_remaining(), 2);
    }

    #[test]
    fn four_mistakes_lose_the_game() {
        let puzzle = sample_puzzle();
        let mut game = ordered_game(&puzzle);
        select_words(&mut game, &["a", "e", "i", "m"]);

        for expected in 1..=4 {
            assert_eq!(game.status(), GameStatus::Playing);
            game.submit_guess(&puzzle);
            assert_eq!(game.mistakes(), expected);
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.mistakes_remaining(), 0);
        assert_eq!(game.submit_guess(&puzzle), None);
        assert_eq!(game.mistakes(), 4);
    }

    #[test]
    fn four_correct_guesses_win_the_game() {
        let puzzle = sample_puzzle();
        let mut game = ordered_game(&puzzle);

        let groups = [
            ["a", "b", "c", "d"],
            ["e", "f", "g", "h"],
            ["i", "j", "k", "l"],
            ["m", "n", "o", "p"],
        ];

        for (solved, group) in groups.iter().enumerate() {
            assert_eq!(game.status(), GameStatus::Playing);
            select_words(&mut game, group);
            assert!(matches!(
                game.submit_guess(&puzzle),
                Some(GuessOutcome::Correct(_))
            ));
            assert_eq!(game.solved().len(), solved + 1);
        }

        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.words().is_empty());
        let order: Vec<Difficulty> = game.solved().iter().map(|g| g.difficulty).collect();
        assert_eq!(order, Difficulty::ALL.to_vec());
    }
}
