/*
game.rs

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

//! Manage the status of a game in progress.

use log::debug;
use thiserror::Error;

use crate::board::{Board, Coord, RotateError};
use crate::pipe::Rotation;
use crate::player_input::Command;
use crate::solver;

/// Status of the game.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    QuitRequested,
    RestartRequested,
}

/// Commands that the game refused.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Rotate(#[from] RotateError),

    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

/// Manage the status of the game in progress.
///
/// The board belongs to the caller, who reloads it from the configuration file to restart.
#[derive(Debug)]
pub struct Game<'a> {
    /// Board being played.
    board: &'a mut Board,

    /// Number of pipes that the player successfully turned. This is the score.
    moves: u32,

    /// Current status.
    state: GameState,
}

impl<'a> Game<'a> {
    /// Create a [`Game`] object.
    ///
    /// A board that is already solved is won right away, with no moves.
    pub fn new(board: &'a mut Board) -> Self {
        let state: GameState = if solver::is_solved(board) {
            debug!("The board is solved before the first move");
            GameState::Won
        } else {
            GameState::Playing
        };
        Self {
            board,
            moves: 0,
            state,
        }
    }

    /// Return the board being played.
    pub fn board(&self) -> &Board {
        self.board
    }

    /// Return the number of successful moves so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Return the status of the game.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Process a command and return the new status of the game.
    ///
    /// # Errors
    ///
    /// The method returns an error when the pipe cannot be turned, or when the game is over. In
    /// both cases nothing changes and the move is not counted.
    pub fn handle(&mut self, command: &Command) -> Result<GameState, SessionError> {
        if self.state != GameState::Playing {
            return Err(SessionError::AlreadyEnded);
        }

        match *command {
            Command::None | Command::Help => (),
            Command::Quit => self.state = GameState::QuitRequested,
            Command::Restart => self.state = GameState::RestartRequested,
            Command::Rotate { rotation, row, col } => self.rotate(rotation, row, col)?,
        }
        Ok(self.state)
    }

    /// Turn a pipe. The row and column start at 1.
    fn rotate(&mut self, rotation: Rotation, row: Coord, col: Coord) -> Result<(), SessionError> {
        let (Some(row), Some(col)) = (row.checked_sub(1), col.checked_sub(1)) else {
            return Err(SessionError::Rotate(RotateError::OutOfBounds));
        };
        self.board.rotate(row, col, rotation)?;
        self.moves += 1;

        if solver::is_solved(self.board) {
            debug!("Puzzle solved in {} moves", self.moves);
            self.state = GameState::Won;
        }
        Ok(())
    }
}
