/*
highscores.rs

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

//! Manage the high scores of the puzzle.
//!
//! The main object, [`HighScores`], is a scoreboard with a fixed number of slots.
//! It is read from the configuration file when the game starts, and written back when the player
//! solves the puzzle and makes it to the scoreboard.
//! See the [`crate::saver::highscores`] module that saves the [`HighScores`] object.

use serde::Serialize;

use crate::config::EMPTY_NAME;

/// Number of letters in a player name.
pub const NAME_LENGTH: usize = 3;

/// Number of bytes of a score in the configuration file: the score and the name.
pub const RECORD_SIZE: usize = 1 + NAME_LENGTH;

/// Object that represent a score.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Number of moves it took to solve the puzzle. Zero marks an unused slot.
    pub score: u8,

    /// Player name, three uppercase ASCII letters.
    pub name: [u8; NAME_LENGTH],
}

impl Score {
    /// Whether the slot is unused.
    pub fn is_empty(&self) -> bool {
        self.score == 0
    }

    /// Return the player name, or the placeholder for unused slots.
    pub fn display_name(&self) -> String {
        if self.is_empty() {
            EMPTY_NAME.to_string()
        } else {
            String::from_utf8_lossy(&self.name).into_owned()
        }
    }
}

/// Result of [`HighScores::record_score`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The score entered the board at the given position. The position starts at 1 (top score).
    Updated { position: usize },

    /// The score is not good enough for the board.
    NotQualified,
}

/// Sorted list of the top scores.
///
/// Lower scores are better. Real scores come first, in ascending order, followed by the unused
/// slots.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HighScores {
    /// Scoreboard slots. The number of slots never changes.
    top: Vec<Score>,
}

impl HighScores {
    /// Create a [`HighScores`] object from the slots read from the configuration file.
    ///
    /// Unused slots are moved after the real scores, and the real scores are sorted.
    pub fn new(mut top: Vec<Score>) -> Self {
        top.sort_by_key(|s| (s.is_empty(), s.score));
        Self { top }
    }

    /// Decode the scoreboard from consecutive records of one score byte and three name bytes.
    ///
    /// A trailing partial record is ignored.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let top: Vec<Score> = bytes
            .chunks_exact(RECORD_SIZE)
            .map(|r| Score {
                score: r[0],
                name: [r[1], r[2], r[3]],
            })
            .collect();
        Self::new(top)
    }

    /// Encode the scoreboard in the configuration file layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = Vec::with_capacity(self.top.len() * RECORD_SIZE);
        for s in &self.top {
            bytes.push(s.score);
            bytes.extend_from_slice(&s.name);
        }
        bytes
    }

    /// Number of slots in the scoreboard.
    pub fn capacity(&self) -> usize {
        self.top.len()
    }

    /// Whether the score would make it to the scoreboard.
    ///
    /// A score qualifies when a slot is free or when it is strictly better than a score already
    /// on the board. Zero is not a score.
    pub fn qualifies(&self, score: u8) -> bool {
        score != 0 && self.top.iter().any(|s| s.is_empty() || score < s.score)
    }

    /// Add a score to the scoreboard.
    ///
    /// The new score takes the place of the first worse score, which moves down one slot, and so
    /// on until an unused slot absorbs the last displaced score. On a full board, the worst score
    /// falls off. Equal scores keep their order, so older scores stay ahead.
    pub fn record_score(&mut self, score: u8, name: [u8; NAME_LENGTH]) -> RecordOutcome {
        if !self.qualifies(score) {
            return RecordOutcome::NotQualified;
        }

        let mut pending: Score = Score { score, name };
        let mut position: Option<usize> = None;

        for (i, slot) in self.top.iter_mut().enumerate() {
            if slot.is_empty() {
                *slot = pending;
                position.get_or_insert(i + 1);
                break;
            }
            if slot.score > pending.score {
                std::mem::swap(slot, &mut pending);
                position.get_or_insert(i + 1);
            }
        }

        match position {
            Some(position) => RecordOutcome::Updated { position },
            None => RecordOutcome::NotQualified,
        }
    }

    /// Return the scoreboard as `(name, score)` pairs, best score first.
    ///
    /// Unused slots report the placeholder name.
    pub fn render(&self) -> Vec<(String, u8)> {
        self.top
            .iter()
            .map(|s| (s.display_name(), s.score))
            .collect()
    }
}
