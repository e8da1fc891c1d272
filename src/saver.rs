/*
saver.rs

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

//! Read and write the configuration file.
//!
//! The configuration file is a flat binary file:
//!
//! | offset   | size           | content                                   |
//! |----------|----------------|-------------------------------------------|
//! | 0        | 7              | magic number `ESPipes`                    |
//! | 7        | 1              | board width                               |
//! | 8        | 1              | board height                              |
//! | 9        | 2              | start row and column (starting at 0)      |
//! | 11       | 2              | end row and column (starting at 0)        |
//! | 13       | 1              | number of high scores, `N`                |
//! | 14       | 4 × `N`        | high scores: score byte and 3 name bytes  |
//! | 14 + 4N  | width × height | pipes, row after row (see [`crate::pipe`]) |
//!
//! * [`config::SaverConfig`] loads the whole file when the game starts or restarts.
//! * [`highscores::SaverHighScores`] writes the high scores back, in place, after the player
//!   made it to the scoreboard.

pub mod config;
pub mod highscores;
