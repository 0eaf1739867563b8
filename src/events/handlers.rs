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

use crate::{
    App, StatusMessage,
    events::Action,
    model::{Direction, GuessOutcome},
};

pub(super) fn handle_action(app: &mut App, action: Action) {
    if action == Action::None {
        return;
    }

    app.message = None;

    match action {
        Action::Shuffle => handle_shuffle(app),
        Action::ToggleSelection => handle_toggle_selection(app),
        Action::ClearSelection => handle_clear_selection(app),
        Action::SubmitGuess => handle_submit_guess(app),
        Action::Move(direction) => handle_move(app, direction),
        Action::Quit | Action::None => {}
    }
}

fn handle_shuffle(app: &mut App) {
    app.game.shuffle();
}

fn handle_toggle_selection(app: &mut App) {
    app.game.toggle_selection();
}

fn handle_clear_selection(app: &mut App) {
    app.game.clear_selection();
}

fn handle_move(app: &mut App, direction: Direction) {
    app.game.move_cursor(direction);
}

fn handle_submit_guess(app: &mut App) {
    let Some(outcome) = app.game.submit_guess(&app.puzzle) else {
        return;
    };

    app.message = Some(match outcome {
        GuessOutcome::Correct(group) => StatusMessage::success(format!("Solved: {}", group.title)),
        GuessOutcome::Incorrect { one_away: true } => StatusMessage::warning("One away..."),
        GuessOutcome::Incorrect { one_away: false } => StatusMessage::warning("Not quite."),
    });
}
