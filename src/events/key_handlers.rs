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

//! Keyboard input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{events::Action, model::Direction};

/// Maps a raw key event to the game action it stands for.
///
/// Both the arrow keys and `h`/`j`/`k`/`l` move the cursor. Anything that is
/// not a recognised key press maps to [`Action::None`].
pub(crate) fn map_key(key: &KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q' | 'Q'), _) => Action::Quit,

        (KeyCode::Char('s' | 'S'), _) => Action::Shuffle,
        (KeyCode::Char('d' | 'D'), _) => Action::ClearSelection,
        (KeyCode::Char(' '), _) => Action::ToggleSelection,
        (KeyCode::Enter, _) => Action::SubmitGuess,

        // Navigation
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => Action::Move(Direction::Up),
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => Action::Move(Direction::Down),
        (KeyCode::Char('h'), _) | (KeyCode::Left, _) => Action::Move(Direction::Left),
        (KeyCode::Char('l'), _) | (KeyCode::Right, _) => Action::Move(Direction::Right),

        _ => Action::None,
    }
}
