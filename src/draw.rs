/*
draw.rs

Copyright 2025 Hervé Quatremain

This file is part of Pipeturn.

Pipeturn is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Pipeturn is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Pipeturn. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Draw the board and the scoreboard with box-drawing characters.
//!
//! A 3x3 board looks like this, with the row and column numbers around it:
//!
//! ```text
//!  │123
//! ─┼───
//! 1│╞╦╗
//! 2│║╠╣
//! 3│╚╩╨
//! ```

use std::fmt::Write;

use crate::board::Board;
use crate::highscores::HighScores;
use crate::pipe::{Direction, PipeCell};

/// Glyph for pipes that cannot be drawn.
const INVALID: char = '▞';

/// Return the glyph of a regular pipe.
fn pipe_glyph(cell: PipeCell) -> char {
    let open = |d: Direction| cell.is_open(d);
    match (
        open(Direction::Top),
        open(Direction::Left),
        open(Direction::Bottom),
        open(Direction::Right),
    ) {
        (true, true, true, true) => '╬',
        (false, true, true, true) => '╦',
        (true, false, true, true) => '╠',
        (true, true, false, true) => '╩',
        (true, true, true, false) => '╣',
        (true, false, true, false) => '║',
        (false, true, false, true) => '═',
        (true, true, false, false) => '╝',
        (false, true, true, false) => '╗',
        (false, false, true, true) => '╔',
        (true, false, false, true) => '╚',
        (false, false, false, false) => '█',
        _ => INVALID,
    }
}

/// Return the glyph of the start or end pipe, which has exactly one opening.
fn terminal_glyph(cell: PipeCell) -> char {
    if cell.open_count() != 1 {
        return INVALID;
    }
    if cell.is_open(Direction::Top) {
        '╨'
    } else if cell.is_open(Direction::Left) {
        '╡'
    } else if cell.is_open(Direction::Bottom) {
        '╥'
    } else {
        '╞'
    }
}

/// Number of decimal digits in `n`.
fn digits(n: u8) -> usize {
    n.to_string().len()
}

/// Draw the board, preceded and followed by an empty line.
pub fn board(board: &Board) -> String {
    let row_digits: usize = digits(board.height());
    let col_digits: usize = digits(board.width());
    let mut out: String = String::from("\n");

    // Column numbers, written vertically, most significant digit first
    for line in 0..col_digits {
        out.push_str(&" ".repeat(row_digits));
        out.push('│');
        let divisor: u32 = 10u32.pow((col_digits - line - 1) as u32);
        for col in 1..=board.width() as u32 {
            out.push_str(&(col / divisor % 10).to_string());
        }
        out.push('\n');
    }

    out.push_str(&"─".repeat(row_digits));
    out.push('┼');
    out.push_str(&"─".repeat(board.width() as usize));
    out.push('\n');

    for (row, cells) in board.rows().enumerate() {
        let _ = write!(out, "{:0row_digits$}│", row + 1);
        for (col, cell) in cells.iter().enumerate() {
            if board.is_terminal((row as u8, col as u8)) {
                out.push(terminal_glyph(*cell));
            } else {
                out.push(pipe_glyph(*cell));
            }
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Draw the scoreboard.
pub fn highscores(highscores: &HighScores) -> String {
    let mut out: String = String::from("Highscore:\n");
    for (name, score) in highscores.render() {
        let _ = writeln!(out, "   {name} {score}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::Score;

    fn board_from(width: u8, height: u8, start: (u8, u8), end: (u8, u8), bytes: &[u8]) -> Board {
        let cells: Vec<PipeCell> = bytes.iter().map(|b| PipeCell::from_byte(*b)).collect();
        Board::new(width, height, start, end, cells).unwrap()
    }

    #[test]
    fn glyphs_follow_the_openings() {
        let glyph = |b: u8| pipe_glyph(PipeCell::from_byte(b));
        assert_eq!(glyph(0xAA), '╬');
        assert_eq!(glyph(0xFF), '╬');
        assert_eq!(glyph(0x2A), '╦');
        assert_eq!(glyph(0x8A), '╠');
        assert_eq!(glyph(0xA2), '╩');
        assert_eq!(glyph(0xA8), '╣');
        assert_eq!(glyph(0x88), '║');
        assert_eq!(glyph(0x22), '═');
        assert_eq!(glyph(0xA0), '╝');
        assert_eq!(glyph(0x28), '╗');
        assert_eq!(glyph(0x0A), '╔');
        assert_eq!(glyph(0x82), '╚');
        assert_eq!(glyph(0x00), '█');
        assert_eq!(glyph(0x55), '█');
        assert_eq!(glyph(0x80), INVALID);

        let terminal = |b: u8| terminal_glyph(PipeCell::from_byte(b));
        assert_eq!(terminal(0x80), '╨');
        assert_eq!(terminal(0x20), '╡');
        assert_eq!(terminal(0x08), '╥');
        assert_eq!(terminal(0x02), '╞');
        assert_eq!(terminal(0x88), INVALID);
        assert_eq!(terminal(0x00), INVALID);
    }

    #[test]
    fn small_board() {
        let b: Board = board_from(
            3,
            3,
            (0, 0),
            (2, 2),
            &[0x02, 0x2A, 0x28, 0x88, 0x8A, 0xA8, 0x82, 0xA2, 0x80],
        );
        assert_eq!(board(&b), "\n │123\n─┼───\n1│╞╦╗\n2│║╠╣\n3│╚╩╨\n\n");
    }

    #[test]
    fn wide_and_tall_board_headers() {
        let b: Board = board_from(12, 10, (0, 0), (9, 11), &[0x22; 120]);
        let text: String = board(&b);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "  │000000000111");
        assert_eq!(lines[2], "  │123456789012");
        assert_eq!(lines[3], "──┼────────────");
        assert!(lines[4].starts_with("01│▞═"));
        assert!(lines[13].starts_with("10│══"));
        assert!(lines[13].ends_with('▞'));
    }

    #[test]
    fn scoreboard() {
        let h: HighScores = HighScores::new(vec![
            Score {
                score: 0,
                name: [0; 3],
            },
            Score {
                score: 12,
                name: *b"ABC",
            },
        ]);
        assert_eq!(highscores(&h), "Highscore:\n   ABC 12\n   --- 0\n");
    }
}
