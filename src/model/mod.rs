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

//! Domain models and core game logic.
//!
//! This module defines the puzzle being played and the state of a single
//! game session.
//!
//! # Sub-modules
//!
//! * [`document`]: The shape of the puzzle document as it arrives from the
//!   data source.
//! * [`puzzle`]: The validated, immutable category partition.
//! * [`game`]: The mutable session state and its transitions.

pub(crate) mod document;
pub(crate) mod game;
pub(crate) mod puzzle;

pub(crate) use game::{Direction, GameState, GameStatus, GuessOutcome, SolvedGroup};
pub(crate) use puzzle::{Difficulty, Puzzle};

pub(crate) const GRID_COLUMNS: usize = 4;
pub(crate) const CATEGORY_COUNT: usize = 4;
pub(crate) const WORDS_PER_CATEGORY: usize = 4;
pub(crate) const MAX_MISTAKES: usize = 4;
