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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette, including the
//! colour used for each category difficulty.

use ratatui::style::Color;

use crate::model::Difficulty;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,

    pub(crate) tile_bg: Color,
    pub(crate) tile_fg: Color,
    pub(crate) selected_bg: Color,
    pub(crate) selected_fg: Color,
    pub(crate) solved_fg: Color,

    pub(crate) success_colour: Color,
    pub(crate) warning_colour: Color,

    pub(crate) yellow_colour: Color,
    pub(crate) green_colour: Color,
    pub(crate) blue_colour: Color,
    pub(crate) purple_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            text_colour: Color::Rgb(255, 255, 255),
            muted_colour: Color::Rgb(162, 161, 166),

            tile_bg: Color::Rgb(239, 239, 230),
            tile_fg: Color::Rgb(0, 0, 0),
            selected_bg: Color::Rgb(90, 89, 78),
            selected_fg: Color::Rgb(255, 255, 255),
            solved_fg: Color::Rgb(0, 0, 0),

            success_colour: Color::Rgb(160, 195, 90),
            warning_colour: Color::Rgb(255, 140, 100),

            yellow_colour: Color::Rgb(249, 223, 109),
            green_colour: Color::Rgb(160, 195, 90),
            blue_colour: Color::Rgb(176, 196, 239),
            purple_colour: Color::Rgb(186, 129, 197),
        }
    }

    pub(crate) fn difficulty_colour(&self, difficulty: Difficulty) -> Color {
        match difficulty {
            Difficulty::Yellow => self.yellow_colour,
            Difficulty::Green => self.green_colour,
            Difficulty::Blue => self.blue_colour,
            Difficulty::Purple => self.purple_colour,
        }
    }
}
