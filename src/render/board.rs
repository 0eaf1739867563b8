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

//! Render the game board.
//!
//! The board is made of the groups solved so far, drawn as coloured bars in
//! the order they were solved, followed by the grid of remaining words.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    model::{Difficulty, GRID_COLUMNS, GameState, SolvedGroup},
    theme::Theme,
    util::format::format_group,
};

pub(crate) const TILE_HEIGHT: u16 = 3;
pub(crate) const GROUP_HEIGHT: u16 = 3;

pub(crate) fn draw_solved(f: &mut Frame, area: Rect, groups: &[SolvedGroup], theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(GROUP_HEIGHT); groups.len()])
        .split(area);

    for (group, row) in groups.iter().zip(rows.iter()) {
        draw_group(f, *row, &group.title, &group.words, group.difficulty, theme);
    }
}

/// Renders one category as a coloured bar with its title above its words.
pub(crate) fn draw_group(
    f: &mut Frame,
    area: Rect,
    title: &str,
    words: &[String],
    difficulty: Difficulty,
    theme: &Theme,
) {
    let style = Style::default()
        .fg(theme.solved_fg)
        .bg(theme.difficulty_colour(difficulty));

    let lines = vec![
        Line::from(Span::styled(
            title.to_uppercase(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format_group(words)),
    ];

    let block = Block::default().padding(Padding::horizontal(1)).style(style);

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}

pub(crate) fn draw_grid(f: &mut Frame, area: Rect, game: &GameState, theme: &Theme) {
    let row_count = game.words().len().div_ceil(GRID_COLUMNS);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(TILE_HEIGHT); row_count])
        .split(area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = row_index * GRID_COLUMNS + col;
            if let Some(word) = game.words().get(index) {
                let is_cursor = index == game.cursor();
                draw_tile(f, *cell, word, is_cursor, game.is_selected(index), theme);
            }
        }
    }
}

fn draw_tile(
    f: &mut Frame,
    area: Rect,
    word: &str,
    is_cursor: bool,
    is_selected: bool,
    theme: &Theme,
) {
    let (fg, bg) = if is_selected {
        (theme.selected_fg, theme.selected_bg)
    } else {
        (theme.tile_fg, theme.tile_bg)
    };

    let mut text_style = Style::default().fg(fg).bg(bg);
    let mut border_style = Style::default().fg(theme.border_colour).bg(bg);

    // The cursor is shown by the border so it stays visible on selected tiles
    if is_cursor {
        text_style = text_style.add_modifier(Modifier::BOLD);
        border_style = border_style
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(bg));

    f.render_widget(
        Paragraph::new(word)
            .style(text_style)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
