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

const FILLED_DOT: &str = "\u{25CF}";
const EMPTY_DOT: &str = "\u{25CB}";

/// Formats the remaining mistakes as a row of dots.
///
/// Remaining mistakes are drawn as filled dots followed by one empty dot
/// for every mistake already made.
///
/// # Arguments
///
/// * `remaining` - The number of mistakes the player can still make.
/// * `total` - The number of mistakes allowed in a game.
pub(crate) fn format_mistakes(remaining: usize, total: usize) -> String {
    let remaining = remaining.min(total);
    let mut dots = vec![FILLED_DOT; remaining];
    dots.extend(vec![EMPTY_DOT; total - remaining]);
    dots.join(" ")
}

/// Formats a category's words as a single comma separated line.
pub(crate) fn format_group(words: &[String]) -> String {
    words.join(", ")
}
