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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The game loop only talks to a [`Screen`], the terminal implementation
//! of which calls [`draw`] for every key press, [`draw_ending`] once the
//! game is over and [`draw_message`] for loading and error notices.

mod board;
mod status;

use std::io::Stdout;

use anyhow::Result;
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    App,
    events::Ending,
    model::{CATEGORY_COUNT, GRID_COLUMNS},
    render::{
        board::{GROUP_HEIGHT, TILE_HEIGHT, draw_grid, draw_group, draw_solved},
        status::{draw_header, draw_help, draw_mistakes, draw_status},
    },
    theme::Theme,
};

const BOARD_WIDTH: u16 = 72;
const MESSAGE_HEIGHT: u16 = 5;

/// The display the game loop draws to.
pub(crate) trait Screen {
    fn show_game(&mut self, app: &App) -> Result<()>;
    fn show_ending(&mut self, app: &App, ending: Ending) -> Result<()>;
    fn show_message(&mut self, theme: &Theme, message: &str) -> Result<()>;
}

impl Screen for Terminal<CrosstermBackend<Stdout>> {
    fn show_game(&mut self, app: &App) -> Result<()> {
        self.draw(|f| draw(f, app))?;
        Ok(())
    }

    fn show_ending(&mut self, app: &App, ending: Ending) -> Result<()> {
        self.draw(|f| draw_ending(f, app, ending))?;
        Ok(())
    }

    fn show_message(&mut self, theme: &Theme, message: &str) -> Result<()> {
        self.draw(|f| draw_message(f, theme, message))?;
        Ok(())
    }
}

/// Renders the game screen.
///
/// From top to bottom: the header, the solved groups, the grid of remaining
/// words, the result of the last guess, the mistake counter and the key
/// help.
pub(crate) fn draw(f: &mut Frame, app: &App) {
    let area = board_area(f.area());

    let solved_height = GROUP_HEIGHT * app.game.solved().len() as u16;
    let grid_height = TILE_HEIGHT * app.game.words().len().div_ceil(GRID_COLUMNS) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(solved_height),
            Constraint::Length(grid_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, chunks[0], app);
    draw_solved(f, chunks[1], app.game.solved(), &app.theme);
    draw_grid(f, chunks[2], &app.game, &app.theme);
    draw_status(f, chunks[4], app);
    draw_mistakes(f, chunks[5], app);
    draw_help(f, chunks[7], &app.theme);
}

/// Renders the final screen: the outcome, then every category revealed in
/// difficulty order.
pub(crate) fn draw_ending(f: &mut Frame, app: &App, ending: Ending) {
    let area = board_area(f.area());
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(GROUP_HEIGHT * CATEGORY_COUNT as u16),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let colour = match ending {
        Ending::Won => theme.success_colour,
        Ending::Lost => theme.warning_colour,
        Ending::Quit => theme.accent_colour,
    };

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            ending.message(),
            Style::default().fg(colour).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        chunks[0],
    );

    let summary = format!(
        "Solved {} of {} groups with {} mistakes",
        app.game.solved().len(),
        CATEGORY_COUNT,
        app.game.mistakes()
    );
    f.render_widget(
        Paragraph::new(summary)
            .style(Style::default().fg(theme.text_colour))
            .alignment(Alignment::Center),
        chunks[1],
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(GROUP_HEIGHT);
            app.puzzle.categories().len()
        ])
        .split(chunks[2]);

    for (index, (category, row)) in app.puzzle.categories().iter().zip(rows.iter()).enumerate() {
        if let Some(difficulty) = app.puzzle.difficulty_of(index) {
            draw_group(f, *row, &category.title, &category.words, difficulty, theme);
        }
    }

    f.render_widget(
        Paragraph::new("Press any key to exit")
            .style(Style::default().fg(theme.muted_colour))
            .alignment(Alignment::Center),
        chunks[4],
    );
}

/// Renders a single notice in the middle of the screen.
pub(crate) fn draw_message(f: &mut Frame, theme: &Theme, message: &str) {
    let area = board_area(f.area());
    let top = area.y + area.height.saturating_sub(MESSAGE_HEIGHT) / 2;
    let area = Rect::new(area.x, top, area.width, MESSAGE_HEIGHT.min(area.height));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(theme.text_colour))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

// Centres a column of at most BOARD_WIDTH cells, leaving a one line margin.
fn board_area(area: Rect) -> Rect {
    let width = area.width.min(BOARD_WIDTH);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + 1.min(area.height);
    let height = area.height.saturating_sub(1);
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{
        StatusMessage,
        model::{
            GameState, Puzzle,
            document::{CategoryDocument, PuzzleDocument},
        },
    };

    fn fruit_puzzle() -> Puzzle {
        Puzzle::load(PuzzleDocument {
            status: None,
            print_date: Some("2026-10-17".to_string()),
            editor: Some("Wyna Liu".to_string()),
            categories: vec![
                CategoryDocument::new("Fruit", &["APPLE", "BANANA", "CHERRY", "GRAPE"]),
                CategoryDocument::new("Fish", &["BASS", "PIKE", "CARP", "SOLE"]),
                CategoryDocument::new("Planets", &["MARS", "VENUS", "EARTH", "PLUTO"]),
                CategoryDocument::new("Colours", &["RED", "TEAL", "CYAN", "PINK"]),
            ],
        })
        .unwrap()
    }

    fn fruit_app() -> App {
        let puzzle = fruit_puzzle();
        let game = GameState::with_order(puzzle.all_words());
        App::new(puzzle, game)
    }

    fn render(draw_fn: impl FnOnce(&mut Frame)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(draw_fn).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn game_screen_shows_board() {
        let app = fruit_app();
        let screen = render(|f| draw(f, &app));

        assert!(screen.contains("Connections"));
        assert!(screen.contains("Edited by Wyna Liu"));
        assert!(screen.contains("BANANA"));
        assert!(screen.contains("PLUTO"));
        assert!(screen.contains("Selected 0/4"));
        assert!(screen.contains("Mistakes remaining: ● ● ● ●"));
    }

    #[test]
    fn solved_group_is_shown_above_grid() {
        let mut app = fruit_app();
        for _ in 0..4 {
            app.game.toggle_selection();
            app.game.move_cursor(crate::model::Direction::Right);
        }
        app.game.submit_guess(&app.puzzle);
        app.message = Some(StatusMessage::success("Solved: Fruit"));

        let screen = render(|f| draw(f, &app));

        assert!(screen.contains("FRUIT"));
        assert!(screen.contains("APPLE, BANANA, CHERRY, GRAPE"));
        assert!(screen.contains("Solved: Fruit"));
    }

    #[test]
    fn ending_screen_reveals_categories() {
        let app = fruit_app();
        let screen = render(|f| draw_ending(f, &app, Ending::Lost));

        assert!(screen.contains("Game Over. You've made 4 mistakes."));
        assert!(screen.contains("BASS, PIKE, CARP, SOLE"));
        assert!(screen.contains("PLANETS"));
        assert!(screen.contains("Press any key to exit"));
    }

    #[test]
    fn message_screen_shows_notice() {
        let theme = Theme::default();
        let screen = render(|f| draw_message(f, &theme, "An error occurred: offline"));

        assert!(screen.contains("An error occurred: offline"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = fruit_app();
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        terminal.draw(|f| draw_ending(f, &app, Ending::Won)).unwrap();
        terminal
            .draw(|f| draw_message(f, &app.theme, "Fetching puzzle..."))
            .unwrap();
    }
}
