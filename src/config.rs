/*
config.rs

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

//! Constants shared by the application.

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (C) 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// First bytes of every configuration file.
pub const MAGIC_NUMBER: &[u8; 7] = b"ESPipes";

/// Offset of the high scores in the configuration file: magic number, width, height, start and
/// end coordinates, and the number of high scores.
pub const HIGHSCORES_OFFSET: usize = MAGIC_NUMBER.len() + 1 + 1 + 2 + 2 + 1;

/// Name displayed for unused scoreboard slots.
pub const EMPTY_NAME: &str = "---";

// Process exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_WRONG_PARAMETER: u8 = 1;
pub const EXIT_CANNOT_OPEN_FILE: u8 = 2;
pub const EXIT_INVALID_FILE: u8 = 3;
pub const EXIT_OUT_OF_MEMORY: u8 = 4;
pub const EXIT_TERMINAL_ERROR: u8 = 5;

pub const USAGE_APPLICATION: &str = "Usage: ./pipeturn CONFIG_FILE";

pub const HELP_TEXT: &str = "Commands:
 - rotate <DIRECTION> <ROW> <COLUMN>
    <DIRECTION> is either `left` or `right`.

 - help
    Prints this help text.

 - quit
    Terminates the game.

 - restart
    Restarts the game.
";
