/*
input_errors.rs

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

//! Mistakes in the player's input.
//!
//! The messages are displayed as is, after which the player is prompted again.

use thiserror::Error;

/// Line that could not be turned into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// `rotate` with a wrong direction, a wrong number, or a wrong number of arguments.
    #[error("Usage: rotate ( left | right ) ROW COLUMN")]
    RotateUsage,

    /// The first word is not a command.
    #[error("Error: Unknown command: {0}")]
    Unknown(String),
}

/// Name that cannot be used in the scoreboard.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Error: Invalid name. Only alphabetic letters allowed")]
    NotAlphabetic,

    #[error("Error: Invalid name. Name must be exactly 3 letters long")]
    WrongLength,
}
