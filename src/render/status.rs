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

//! Render the header, status line, mistake counter and key help.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App, MessageKind,
    model::{MAX_MISTAKES, WORDS_PER_CATEGORY},
    theme::Theme,
    util::format::format_mistakes,
};

const TITLE: &str = "Connections";

const HELP: &str =
    "\u{2190}\u{2191}\u{2193}\u{2192} move  space select  enter submit  s shuffle  d deselect  q quit";

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let mut details = Vec::new();
    if let Some(date) = app.puzzle.print_date() {
        details.push(date.to_string());
    }
    if let Some(editor) = app.puzzle.editor() {
        details.push(format!("Edited by {}", editor));
    }

    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            details.join(" \u{00B7} "),
            Style::default().fg(app.theme.muted_colour),
        )),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Renders the result of the last guess, or the selection size when there
/// is nothing to report.
pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let line = match &app.message {
        Some(message) => {
            let colour = match message.kind {
                MessageKind::Success => app.theme.success_colour,
                MessageKind::Warning => app.theme.warning_colour,
            };
            Line::from(Span::styled(
                message.text.as_str(),
                Style::default().fg(colour).add_modifier(Modifier::BOLD),
            ))
        }
        None => Line::from(Span::styled(
            format!(
                "Selected {}/{}",
                app.game.selected().len(),
                WORDS_PER_CATEGORY
            ),
            Style::default().fg(app.theme.muted_colour),
        )),
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

pub(crate) fn draw_mistakes(f: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            "Mistakes remaining: ",
            Style::default().fg(app.theme.text_colour),
        ),
        Span::styled(
            format_mistakes(app.game.mistakes_remaining(), MAX_MISTAKES),
            Style::default().fg(app.theme.accent_colour),
        ),
    ]);

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

pub(crate) fn draw_help(f: &mut Frame, area: Rect, theme: &Theme) {
    f.render_widget(
        Paragraph::new(HELP)
            .style(Style::default().fg(theme.muted_colour))
            .alignment(Alignment::Center),
        area,
    );
}
