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

//! Load the board and the high scores from the configuration file.
//!
//! [`GameConfig::decode`] parses the bytes, and [`SaverConfig`] reads them from the file and
//! reports errors with the file name.

use log::debug;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::board::{Board, BoardError};
use crate::config::{
    EXIT_CANNOT_OPEN_FILE, EXIT_INVALID_FILE, EXIT_OUT_OF_MEMORY, HIGHSCORES_OFFSET, MAGIC_NUMBER,
};
use crate::highscores::{HighScores, RECORD_SIZE};
use crate::pipe::PipeCell;

/// Problems found in the content of a configuration file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("missing or wrong magic number")]
    BadMagic,

    #[error("file ends in the {0} section")]
    Truncated(&'static str),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("cannot allocate {0} pipes")]
    OutOfMemory(usize),
}

/// Errors that prevent the game from starting.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error: Cannot open file: {}", .0.display())]
    CannotOpen(PathBuf),

    #[error("Error: Invalid file: {}", .0.display())]
    InvalidFormat(PathBuf),

    #[error("Error: Out of memory")]
    OutOfMemory,
}

impl ConfigError {
    /// Process exit code for the error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::CannotOpen(_) => EXIT_CANNOT_OPEN_FILE,
            ConfigError::InvalidFormat(_) => EXIT_INVALID_FILE,
            ConfigError::OutOfMemory => EXIT_OUT_OF_MEMORY,
        }
    }
}

/// Content of a configuration file.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Board, with its connected flags computed.
    pub board: Board,

    /// Scoreboard.
    pub highscores: HighScores,
}

/// Remove `len` bytes from the front of `bytes` and return them.
fn take<'a>(bytes: &mut &'a [u8], len: usize, section: &'static str) -> Result<&'a [u8], FormatError> {
    let (head, tail) = bytes
        .split_at_checked(len)
        .ok_or(FormatError::Truncated(section))?;
    *bytes = tail;
    Ok(head)
}

impl GameConfig {
    /// Parse the content of a configuration file.
    ///
    /// Bytes after the last pipe are ignored.
    ///
    /// # Errors
    ///
    /// The method returns an error when the magic number is wrong, when the file is too short,
    /// when the board is inconsistent, or when memory for the board cannot be reserved.
    pub fn decode(mut bytes: &[u8]) -> Result<Self, FormatError> {
        if take(&mut bytes, MAGIC_NUMBER.len(), "magic number").ok() != Some(&MAGIC_NUMBER[..]) {
            return Err(FormatError::BadMagic);
        }

        let header: &[u8] = take(&mut bytes, HIGHSCORES_OFFSET - MAGIC_NUMBER.len(), "header")?;
        let (width, height) = (header[0], header[1]);
        let start = (header[2], header[3]);
        let end = (header[4], header[5]);
        let count: usize = header[6] as usize;
        debug!("Board {width}x{height}, start {start:?}, end {end:?}, {count} high scores");

        let records: &[u8] = take(&mut bytes, count * RECORD_SIZE, "high scores")?;
        let highscores: HighScores = HighScores::from_bytes(records);

        let num_cells: usize = width as usize * height as usize;
        let raw: &[u8] = take(&mut bytes, num_cells, "board")?;
        if !bytes.is_empty() {
            debug!("Ignoring {} trailing bytes", bytes.len());
        }

        let mut cells: Vec<PipeCell> = Vec::new();
        cells
            .try_reserve_exact(num_cells)
            .map_err(|_| FormatError::OutOfMemory(num_cells))?;
        cells.extend(raw.iter().map(|b| PipeCell::from_byte(*b)));

        let board: Board = Board::new(width, height, start, end, cells)?;
        Ok(Self { board, highscores })
    }
}

/// Object to load the configuration file.
pub struct SaverConfig {
    /// Path to the configuration file.
    config_file: PathBuf,
}

impl SaverConfig {
    /// Create a [`SaverConfig`] object for the given configuration file.
    pub fn new(config_file: &Path) -> Self {
        debug!("Configuration file: {config_file:?}");
        Self {
            config_file: config_file.to_path_buf(),
        }
    }

    /// Read and parse the configuration file.
    ///
    /// # Errors
    ///
    /// The method returns [`ConfigError::CannotOpen`] when the file cannot be read,
    /// [`ConfigError::OutOfMemory`] when the board cannot be allocated, and
    /// [`ConfigError::InvalidFormat`] for all the other problems.
    pub fn load(&self) -> Result<GameConfig, ConfigError> {
        let bytes: Vec<u8> = match fs::read(&self.config_file) {
            Ok(b) => b,
            Err(error) => {
                debug!("Cannot read {:?}: {error}", self.config_file);
                return Err(ConfigError::CannotOpen(self.config_file.clone()));
            }
        };

        GameConfig::decode(&bytes).map_err(|error| {
            debug!("Invalid configuration file {:?}: {error}", self.config_file);
            match error {
                FormatError::OutOfMemory(_) => ConfigError::OutOfMemory,
                _ => ConfigError::InvalidFormat(self.config_file.clone()),
            }
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::pipe::Direction;

    /// Build the content of a configuration file.
    pub(crate) fn file_bytes(
        width: u8,
        height: u8,
        start: (u8, u8),
        end: (u8, u8),
        scores: &[(u8, &[u8; 3])],
        cells: &[u8],
    ) -> Vec<u8> {
        let mut bytes: Vec<u8> = MAGIC_NUMBER.to_vec();
        bytes.extend_from_slice(&[width, height, start.0, start.1, end.0, end.1]);
        bytes.push(scores.len() as u8);
        for (score, name) in scores {
            bytes.push(*score);
            bytes.extend_from_slice(*name);
        }
        bytes.extend_from_slice(cells);
        bytes
    }

    /// Write a configuration file in the temporary directory and return its path.
    pub(crate) fn temp_file(name: &str, content: &[u8]) -> PathBuf {
        let path: PathBuf =
            std::env::temp_dir().join(format!("pipeturn-{}-{name}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn decode_full_file() {
        let bytes: Vec<u8> = file_bytes(
            2,
            1,
            (0, 0),
            (0, 1),
            &[(4, b"ABC"), (0, b"\0\0\0")],
            &[0x02, 0x20],
        );
        let config: GameConfig = GameConfig::decode(&bytes).unwrap();
        assert_eq!(config.board.width(), 2);
        assert_eq!(config.board.height(), 1);
        assert_eq!(config.board.start(), (0, 0));
        assert_eq!(config.board.end(), (0, 1));
        assert!(config.board.get((0, 0)).unwrap().is_connected(Direction::Right));
        assert_eq!(config.highscores.capacity(), 2);
        assert_eq!(config.highscores.render()[0], ("ABC".to_string(), 4));
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut bytes: Vec<u8> = file_bytes(1, 1, (0, 0), (0, 0), &[], &[0x80]);
        bytes.extend_from_slice(b"junk");
        assert!(GameConfig::decode(&bytes).is_ok());
    }

    #[test]
    fn decode_errors() {
        assert_eq!(GameConfig::decode(b"ESPip"), Err(FormatError::BadMagic));
        assert_eq!(
            GameConfig::decode(b"XXPipes\x01\x01\0\0\0\0\0\0"),
            Err(FormatError::BadMagic)
        );
        assert_eq!(
            GameConfig::decode(b"ESPipes\x01\x01"),
            Err(FormatError::Truncated("header"))
        );

        let bytes: Vec<u8> = file_bytes(2, 2, (0, 0), (1, 1), &[(1, b"ABC")], &[0; 4]);
        assert_eq!(
            GameConfig::decode(&bytes[..HIGHSCORES_OFFSET + 2]),
            Err(FormatError::Truncated("high scores"))
        );
        assert_eq!(
            GameConfig::decode(&bytes[..bytes.len() - 1]),
            Err(FormatError::Truncated("board"))
        );

        let bytes: Vec<u8> = file_bytes(0, 2, (0, 0), (0, 0), &[], &[]);
        assert_eq!(
            GameConfig::decode(&bytes),
            Err(FormatError::Board(BoardError::EmptyBoard))
        );

        let bytes: Vec<u8> = file_bytes(2, 2, (0, 0), (2, 0), &[], &[0; 4]);
        assert_eq!(
            GameConfig::decode(&bytes),
            Err(FormatError::Board(BoardError::EndOutOfBounds((2, 0))))
        );
    }

    #[test]
    fn load_reports_the_file_name() {
        let missing: PathBuf = std::env::temp_dir().join("pipeturn-does-not-exist");
        let error: ConfigError = SaverConfig::new(&missing).load().unwrap_err();
        assert_eq!(error.exit_code(), EXIT_CANNOT_OPEN_FILE);
        assert_eq!(
            error.to_string(),
            format!("Error: Cannot open file: {}", missing.display())
        );

        let path: PathBuf = temp_file("invalid.bin", b"not a pipe file");
        let error: ConfigError = SaverConfig::new(&path).load().unwrap_err();
        assert_eq!(error.exit_code(), EXIT_INVALID_FILE);
        assert!(error.to_string().starts_with("Error: Invalid file: "));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_valid_file() {
        let path: PathBuf = temp_file(
            "valid.bin",
            &file_bytes(1, 1, (0, 0), (0, 0), &[(3, b"JOE")], &[0x00]),
        );
        let config: GameConfig = SaverConfig::new(&path).load().unwrap();
        assert_eq!(config.highscores.render(), vec![("JOE".to_string(), 3)]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn dump_as_json() {
        let bytes: Vec<u8> = file_bytes(2, 1, (0, 0), (0, 1), &[(7, b"AMY")], &[0x02, 0x20]);
        let config: GameConfig = GameConfig::decode(&bytes).unwrap();
        let json: serde_json::Value = serde_json::to_value(&config).unwrap();
        assert_eq!(json["board"]["width"], 2);
        assert_eq!(json["board"]["start"], serde_json::json!([0, 0]));
        // Pipes are dumped as their file byte, with the connected flags computed
        assert_eq!(json["board"]["cells"], serde_json::json!([0x03, 0x30]));
        assert_eq!(json["highscores"]["top"][0]["score"], 7);
    }
}
