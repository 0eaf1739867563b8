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

//! Game loop, input handling and action dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. It reads one key at a time, translates it into an
//! [`Action`] and applies that action to the game state, redrawing the
//! screen before every key.
//!
//! # Organization
//!
//! * [`key_handlers`]: Maps raw key events to actions.
//! * [`handlers`]: Applies each action to the application state.

mod handlers;
pub(crate) mod key_handlers;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::{debug, info};

use crate::{
    App,
    events::{handlers::handle_action, key_handlers::map_key},
    model::{Direction, GameStatus, MAX_MISTAKES},
    render::Screen,
};

/// A logical player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Quit,
    Shuffle,
    ToggleSelection,
    ClearSelection,
    SubmitGuess,
    Move(Direction),
    None,
}

/// How a game came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Ending {
    Won,
    Lost,
    Quit,
}

impl Ending {
    pub(crate) fn message(self) -> String {
        match self {
            Ending::Won => "Congratulations! You've completed the puzzle!".to_string(),
            Ending::Lost => format!("Game Over. You've made {MAX_MISTAKES} mistakes."),
            Ending::Quit => "Thanks for playing!".to_string(),
        }
    }
}

/// A blocking source of key presses.
pub(crate) trait KeySource {
    fn next_key(&mut self) -> Result<KeyEvent>;
}

/// Reads key presses from the terminal.
pub(crate) struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }
}

/// Runs the game loop until the game is won, lost or the player quits.
///
/// The screen is redrawn before every key press. Once the game reaches a
/// terminal state no further actions are applied.
///
/// # Errors
///
/// Returns an error if the screen cannot be drawn or input cannot be read.
pub(crate) fn play<S, K>(app: &mut App, screen: &mut S, keys: &mut K) -> Result<Ending>
where
    S: Screen,
    K: KeySource,
{
    loop {
        match app.game.status() {
            GameStatus::Won => return Ok(Ending::Won),
            GameStatus::Lost => return Ok(Ending::Lost),
            GameStatus::Playing => {}
        }

        screen.show_game(app)?;

        let key = keys.next_key()?;
        let action = map_key(&key);
        debug!(code = ?key.code, ?action, "Key pressed");

        if action == Action::Quit {
            return Ok(Ending::Quit);
        }

        handle_action(app, action);
    }
}

/// Shows the final screen and waits for the player to acknowledge it.
pub(crate) fn finish<S, K>(app: &App, screen: &mut S, keys: &mut K, ending: Ending) -> Result<()>
where
    S: Screen,
    K: KeySource,
{
    info!(
        ?ending,
        solved = app.game.solved().len(),
        mistakes = app.game.mistakes(),
        "Game finished"
    );

    screen.show_ending(app, ending)?;
    keys.next_key()?;

    Ok(())
}
