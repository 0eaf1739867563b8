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

//! # Connections TUI.
//!
//! A terminal version of the daily word grouping puzzle.
//!
//! Sixteen words are shown in a shuffled grid. They belong to four hidden
//! categories of four words each, and the player has to find all four
//! groups before making four mistakes.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even when something goes wrong:
//!
//! * The puzzle document is fetched once, with a single blocking call, and
//!   validated into an immutable [`Puzzle`].
//! * The game loop in [`events`] owns the [`App`] value, reads one key at a
//!   time and applies the matching transition to the [`GameState`].
//! * Rendering in [`render`] draws a snapshot of the state before every key.

mod config;
mod events;
mod model;
mod render;
mod source;
mod theme;
mod util;

use std::{io, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

use crate::{
    config::AppConfig,
    events::{KeySource, TerminalKeys},
    model::{GameState, Puzzle},
    render::Screen,
    source::PuzzleSource,
    theme::Theme,
    util::logging::LogTarget,
};

#[derive(Parser, Debug)]
#[command(
    name = "connections-tui",
    about = "Play the daily Connections puzzle in the terminal",
    version
)]
struct Cli {
    /// Puzzle date to play (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Play a puzzle from a local JSON file instead of fetching it
    #[arg(short, long, conflicts_with = "date")]
    file: Option<PathBuf>,

    /// Append debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MessageKind {
    Success,
    Warning,
}

/// A one line note about the last guess.
#[derive(Debug, Clone)]
pub(crate) struct StatusMessage {
    pub(crate) text: String,
    pub(crate) kind: MessageKind,
}

impl StatusMessage {
    pub(crate) fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub(crate) fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Warning,
        }
    }
}

/// Application state.
pub(crate) struct App {
    pub theme: Theme,

    pub puzzle: Puzzle,
    pub game: GameState,

    pub message: Option<StatusMessage>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(puzzle: Puzzle, game: GameState) -> Self {
        Self {
            theme: Theme::default(),
            puzzle,
            game,
            message: None,
        }
    }
}

/// The entry point of the application.
///
/// Parses the command line, loads the configuration, manages the terminal
/// lifecycle, and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config();

    util::logging::init_logging(log_target(&cli, &config))?;

    let source = puzzle_source(&cli, &config);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut TerminalKeys, &source);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

fn log_target<'a>(cli: &'a Cli, config: &'a AppConfig) -> LogTarget<'a> {
    match (&cli.log_file, &config.log_file) {
        (Some(path), _) => LogTarget::Requested(path),
        (None, Some(path)) => LogTarget::Configured(Path::new(path)),
        (None, None) => LogTarget::Disabled,
    }
}

fn puzzle_source(cli: &Cli, config: &AppConfig) -> PuzzleSource {
    match &cli.file {
        Some(path) => PuzzleSource::File(path.clone()),
        None => {
            let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
            PuzzleSource::for_date(config, date)
        }
    }
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`] and makes the cursor
/// visible again. It is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Loads the puzzle and plays one game.
///
/// A puzzle that cannot be fetched or is malformed ends the session before
/// any game state exists: the error is shown on screen and the function
/// returns once the player presses a key.
///
/// # Errors
///
/// Returns an error if the terminal cannot be drawn to or read from.
fn run<S, K>(screen: &mut S, keys: &mut K, source: &PuzzleSource) -> Result<()>
where
    S: Screen,
    K: KeySource,
{
    let theme = Theme::default();

    screen.show_message(&theme, "Fetching puzzle...")?;

    let puzzle = match load_puzzle(source) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            error!(error = %e, "Failed to load puzzle");
            screen.show_message(&theme, &format!("An error occurred: {}", e))?;
            keys.next_key()?;
            return Ok(());
        }
    };

    let game = GameState::initialize(puzzle.all_words());
    let mut app = App::new(puzzle, game);
    info!(words = app.game.words().len(), "Game started");

    let ending = events::play(&mut app, screen, keys)?;
    events::finish(&app, screen, keys, ending)
}

fn load_puzzle(source: &PuzzleSource) -> Result<Puzzle> {
    let document = source.fetch()?;
    Ok(Puzzle::load(document)?)
}
