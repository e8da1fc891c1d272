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

//! Save the high scores back into the configuration file.
//!
//! Only the high score records are rewritten. The rest of the file, including the board, is left
//! untouched.

use log::debug;
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::config::{HIGHSCORES_OFFSET, MAGIC_NUMBER};
use crate::highscores::HighScores;

/// Object to save the high scores.
pub struct SaverHighScores {
    /// Path to the configuration file.
    config_file: PathBuf,
}

impl SaverHighScores {
    /// Create a [`SaverHighScores`] object for the given configuration file.
    pub fn new(config_file: &Path) -> Self {
        Self {
            config_file: config_file.to_path_buf(),
        }
    }

    /// Save the provided [`HighScores`] object.
    ///
    /// # Errors
    ///
    /// The method returns an error when the file cannot be opened for writing, or when the file
    /// is not a configuration file with the same number of high scores.
    pub fn save_highscores(&self, highscores: &HighScores) -> Result<(), Box<dyn Error>> {
        let mut file: File = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.config_file)?;

        // Verify that the file still has the layout it had when the game started
        let mut header: [u8; HIGHSCORES_OFFSET] = [0; HIGHSCORES_OFFSET];
        file.read_exact(&mut header)?;
        if header[..MAGIC_NUMBER.len()] != MAGIC_NUMBER[..] {
            return Err(Box::new(io::Error::new(
                ErrorKind::InvalidData,
                "wrong magic number",
            )));
        }
        let count: usize = header[HIGHSCORES_OFFSET - 1] as usize;
        if count != highscores.capacity() {
            return Err(Box::new(io::Error::new(
                ErrorKind::InvalidData,
                format!(
                    "file has {count} high score slots instead of {}",
                    highscores.capacity()
                ),
            )));
        }

        file.seek(SeekFrom::Start(HIGHSCORES_OFFSET as u64))?;
        file.write_all(&highscores.to_bytes())?;
        file.flush()?;
        debug!("High scores saved to {:?}", self.config_file);
        Ok(())
    }
}
