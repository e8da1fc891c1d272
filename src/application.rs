/*
application.rs

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

//! Interactive terminal session.
//!
//! The [`Application`] object loads the configuration file, runs the prompt loop, and manages
//! the scoreboard when the player solves the puzzle.

use log::debug;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::board::Board;
use crate::config::{EXIT_CANNOT_OPEN_FILE, EXIT_TERMINAL_ERROR, HELP_TEXT};
use crate::draw;
use crate::game::{Game, GameState};
use crate::highscores::{HighScores, NAME_LENGTH, RecordOutcome};
use crate::player_input::{self, Command};
use crate::saver::config::{ConfigError, GameConfig, SaverConfig};
use crate::saver::highscores::SaverHighScores;

/// Errors that end the application.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The high scores could not be written back.
    #[error("Error: Cannot open file: {}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error>,
    },

    #[error("Error: Terminal: {0}")]
    Terminal(#[from] io::Error),
}

impl ApplicationError {
    /// Process exit code for the error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ApplicationError::Config(error) => error.exit_code(),
            ApplicationError::Save { .. } => EXIT_CANNOT_OPEN_FILE,
            ApplicationError::Terminal(_) => EXIT_TERMINAL_ERROR,
        }
    }
}

/// Terminal session, reading the player's lines from `input` and writing to `output`.
pub struct Application<R: BufRead, W: Write> {
    /// Path to the configuration file.
    config_file: PathBuf,

    /// Player's input.
    input: R,

    /// Messages for the player.
    output: W,
}

impl<R: BufRead, W: Write> Application<R, W> {
    /// Create an [`Application`] object.
    pub fn new(config_file: &Path, input: R, output: W) -> Self {
        Self {
            config_file: config_file.to_path_buf(),
            input,
            output,
        }
    }

    /// Play until the player solves the puzzle or quits.
    ///
    /// Restarting the game reloads the configuration file.
    ///
    /// # Errors
    ///
    /// The method returns an error when the configuration file cannot be loaded, when the high
    /// scores cannot be saved, or when the terminal fails.
    pub fn run(&mut self) -> Result<(), ApplicationError> {
        loop {
            let GameConfig {
                mut board,
                mut highscores,
            } = SaverConfig::new(&self.config_file).load()?;

            let (state, moves) = self.play(&mut board)?;
            match state {
                GameState::RestartRequested => {
                    debug!("Restarting the game");
                    continue;
                }
                GameState::Won => {
                    self.handle_score(&mut highscores, moves)?;
                    return Ok(());
                }
                GameState::QuitRequested | GameState::Playing => {
                    debug!("Game abandoned after {moves} moves");
                    return Ok(());
                }
            }
        }
    }

    /// Run the prompt loop on a board. Return the final status and the number of moves.
    fn play(&mut self, board: &mut Board) -> Result<(GameState, u32), ApplicationError> {
        let mut game: Game = Game::new(board);
        let mut redraw: bool = true;

        while game.state() == GameState::Playing {
            if redraw {
                write!(self.output, "{}", draw::board(game.board()))?;
            }
            redraw = true;

            write!(self.output, "{} > ", game.moves() + 1)?;
            self.output.flush()?;
            let line: String = match self.read_line()? {
                Some(l) => l,
                None => {
                    // End of input
                    writeln!(self.output)?;
                    game.handle(&Command::Quit).ok();
                    break;
                }
            };

            let command: Command = match player_input::parse_command(&line) {
                Ok(Command::None) => {
                    redraw = false;
                    continue;
                }
                Ok(c) => c,
                Err(error) => {
                    writeln!(self.output, "{error}")?;
                    redraw = false;
                    continue;
                }
            };

            match game.handle(&command) {
                Ok(_) => {
                    if command == Command::Help {
                        write!(self.output, "{HELP_TEXT}")?;
                    }
                }
                Err(error) => {
                    writeln!(self.output, "{error}")?;
                    redraw = false;
                }
            }
        }

        if game.state() == GameState::Won {
            write!(self.output, "{}", draw::board(game.board()))?;
        }
        Ok((game.state(), game.moves()))
    }

    /// Announce the score, add it to the scoreboard if it qualifies, and display the scoreboard.
    fn handle_score(
        &mut self,
        highscores: &mut HighScores,
        moves: u32,
    ) -> Result<(), ApplicationError> {
        writeln!(self.output, "Puzzle solved!")?;
        writeln!(self.output, "Score: {moves}")?;

        let mut updated: bool = false;
        // Scores that do not fit in a byte cannot be stored
        let qualified: Option<u8> = u8::try_from(moves)
            .ok()
            .filter(|score| highscores.qualifies(*score));
        if let Some(score) = qualified {
            writeln!(self.output, "Beat Highscore!")?;
            if let Some(name) = self.read_name()? {
                if let RecordOutcome::Updated { position } = highscores.record_score(score, name) {
                    debug!("New high score {score} at position {position}");
                    updated = true;
                }
            } else {
                debug!("No name entered, the score is not recorded");
            }
        }

        if updated {
            SaverHighScores::new(&self.config_file)
                .save_highscores(highscores)
                .map_err(|source| ApplicationError::Save {
                    path: self.config_file.clone(),
                    source,
                })?;
        }

        write!(self.output, "{}", draw::highscores(highscores))?;
        Ok(())
    }

    /// Prompt for a name until the player enters a valid one. Return None at the end of the
    /// input.
    fn read_name(&mut self) -> Result<Option<[u8; NAME_LENGTH]>, ApplicationError> {
        loop {
            write!(self.output, "Please enter 3-letter name: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(None);
            };
            match player_input::validate_name(&line) {
                Ok(name) => return Ok(Some(name)),
                Err(error) => writeln!(self.output, "{error}")?,
            }
        }
    }

    /// Read a line without its line terminator. Return None at the end of the input.
    fn read_line(&mut self) -> Result<Option<String>, ApplicationError> {
        let mut buffer: Vec<u8> = Vec::new();
        if self.input.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(None);
        }
        let line: String = String::from_utf8_lossy(&buffer).into_owned();
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
