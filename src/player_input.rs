/*
player_input.rs

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

//! Parse the lines that the player types.
//!
//! Commands are case-insensitive and their words are separated by spaces or tabs:
//!
//! ```text
//! rotate ( left | right ) ROW COLUMN
//! help
//! quit
//! restart
//! ```
//!
//! Rows and columns start at 1, as displayed on the board.

use crate::board::Coord;
use crate::highscores::NAME_LENGTH;
use crate::input_errors::{CommandError, NameError};
use crate::pipe::Rotation;

/// Commands that the player can enter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty line.
    None,

    /// Turn the pipe at the given row and column (both starting at 1).
    Rotate {
        rotation: Rotation,
        row: Coord,
        col: Coord,
    },

    Help,
    Quit,
    Restart,
}

/// Parse a line into a [`Command`].
///
/// # Errors
///
/// The function returns [`CommandError::Unknown`] with the lowercase first word when that word
/// is not a command, and [`CommandError::RotateUsage`] when the `rotate` arguments are wrong.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_ascii_whitespace();

    let keyword: String = match words.next() {
        Some(w) => w.to_ascii_lowercase(),
        None => return Ok(Command::None),
    };

    match keyword.as_str() {
        "rotate" => parse_rotate(words),
        "help" => Ok(Command::Help),
        "quit" => Ok(Command::Quit),
        "restart" => Ok(Command::Restart),
        _ => Err(CommandError::Unknown(keyword)),
    }
}

/// Parse the arguments of the `rotate` command.
fn parse_rotate<'a>(mut words: impl Iterator<Item = &'a str>) -> Result<Command, CommandError> {
    let rotation: Rotation = match words.next().map(|w| w.to_ascii_lowercase()).as_deref() {
        Some("left") => Rotation::Left,
        Some("right") => Rotation::Right,
        _ => return Err(CommandError::RotateUsage),
    };
    let row: Coord = parse_coord(words.next())?;
    let col: Coord = parse_coord(words.next())?;

    // No extra arguments allowed
    if words.next().is_some() {
        return Err(CommandError::RotateUsage);
    }
    Ok(Command::Rotate { rotation, row, col })
}

/// Parse a row or column number. Numbers start at 1.
fn parse_coord(word: Option<&str>) -> Result<Coord, CommandError> {
    match word.map(str::parse::<Coord>) {
        Some(Ok(n)) if n >= 1 => Ok(n),
        _ => Err(CommandError::RotateUsage),
    }
}

/// Verify the name that the player entered for the scoreboard, and return it in uppercase.
///
/// # Errors
///
/// The name must have exactly three characters, all ASCII letters.
pub fn validate_name(line: &str) -> Result<[u8; NAME_LENGTH], NameError> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() != NAME_LENGTH {
        return Err(NameError::WrongLength);
    }

    let mut name: [u8; NAME_LENGTH] = [0; NAME_LENGTH];
    for (letter, c) in name.iter_mut().zip(chars) {
        if !c.is_ascii_alphabetic() {
            return Err(NameError::NotAlphabetic);
        }
        *letter = c.to_ascii_uppercase() as u8;
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_commands() {
        assert_eq!(parse_command(""), Ok(Command::None));
        assert_eq!(parse_command(" \t "), Ok(Command::None));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("  QUIT "), Ok(Command::Quit));
        assert_eq!(parse_command("Restart"), Ok(Command::Restart));
        // Extra words after simple commands are ignored
        assert_eq!(parse_command("help me"), Ok(Command::Help));
    }

    #[test]
    fn rotate_command() {
        assert_eq!(
            parse_command("rotate left 2 3"),
            Ok(Command::Rotate {
                rotation: Rotation::Left,
                row: 2,
                col: 3
            })
        );
        assert_eq!(
            parse_command("ROTATE\tRight  10 1"),
            Ok(Command::Rotate {
                rotation: Rotation::Right,
                row: 10,
                col: 1
            })
        );
    }

    #[test]
    fn rotate_usage_errors() {
        for line in [
            "rotate",
            "rotate up 1 1",
            "rotate left",
            "rotate left 1",
            "rotate left 0 1",
            "rotate left 1 0",
            "rotate left -1 2",
            "rotate left 1x 2",
            "rotate left 1 256",
            "rotate left 1 2 3",
        ] {
            assert_eq!(parse_command(line), Err(CommandError::RotateUsage), "{line}");
        }
    }

    #[test]
    fn unknown_command_reports_the_word() {
        assert_eq!(
            parse_command("Jump 1 2"),
            Err(CommandError::Unknown("jump".to_string()))
        );
        assert_eq!(
            CommandError::Unknown("jump".to_string()).to_string(),
            "Error: Unknown command: jump"
        );
    }

    #[test]
    fn names() {
        assert_eq!(validate_name("abc"), Ok(*b"ABC"));
        assert_eq!(validate_name("XyZ"), Ok(*b"XYZ"));
        assert_eq!(validate_name("ab"), Err(NameError::WrongLength));
        assert_eq!(validate_name("abcd"), Err(NameError::WrongLength));
        assert_eq!(validate_name(""), Err(NameError::WrongLength));
        assert_eq!(validate_name("a1c"), Err(NameError::NotAlphabetic));
        assert_eq!(validate_name("a c"), Err(NameError::NotAlphabetic));
        assert_eq!(validate_name("äbc"), Err(NameError::NotAlphabetic));
    }
}
