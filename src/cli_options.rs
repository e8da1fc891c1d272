/*
cli_options.rs

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

//! Process command-line options.
//!
//! Besides the configuration file to play, two options are intended for developers creating
//! configuration files.
//!
//! # Examples
//!
//! Display the scoreboard of a configuration file:
//!
//! ```
//! $ pipeturn level1.bin --scores
//! Highscore:
//!    ANN 7
//!    JOE 12
//!    --- 0
//! ```
//!
//! Dump the content of a configuration file, with the connected flags computed:
//!
//! ```
//! $ pipeturn level1.bin --dump
//! {
//!   "board": {
//!     "width": 2,
//!     "height": 1,
//!     "start": [0, 0],
//!     "end": [0, 1],
//!     "cells": [3, 48]
//!   },
//!   ...
//! }
//! ```

use clap::Parser;
use clap::error::ErrorKind;
use log::debug;
use std::env;
use std::path::PathBuf;

use crate::config::{COPYRIGHT_NOTICE, EXIT_SUCCESS, EXIT_WRONG_PARAMETER, USAGE_APPLICATION};
use crate::draw;
use crate::saver::config::{GameConfig, SaverConfig};

/// Rotate the pipes until the water flows from the start to the end.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Configuration file with the board and the high scores
    config_file: PathBuf,

    /// Print the high scores and exit
    #[arg(short, long, default_value_t = false, conflicts_with = "dump")]
    scores: bool,

    /// Print the content of the configuration file as JSON and exit
    #[arg(long, default_value_t = false)]
    dump: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// What the program does after the command line has been processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Play the game with the given configuration file.
    Play(PathBuf),

    /// Exit with the given code.
    Exit(u8),
}

/// Parse and process command-line options.
pub fn parse() -> CliAction {
    let args: Args = match Args::try_parse() {
        Ok(a) => a,
        Err(error) => {
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    // Printing can only fail when stdout is closed
                    let _ = error.print();
                    CliAction::Exit(EXIT_SUCCESS)
                }
                _ => {
                    eprintln!("{USAGE_APPLICATION}");
                    CliAction::Exit(EXIT_WRONG_PARAMETER)
                }
            };
        }
    };

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("Command-line options: {args:?}");

    if !args.scores && !args.dump {
        return CliAction::Play(args.config_file);
    }

    let config: GameConfig = match SaverConfig::new(&args.config_file).load() {
        Ok(c) => c,
        Err(error) => {
            eprintln!("{error}");
            return CliAction::Exit(error.exit_code());
        }
    };

    //
    // Display the scoreboard
    //
    if args.scores {
        print!("{}", draw::highscores(&config.highscores));
        return CliAction::Exit(EXIT_SUCCESS);
    }

    //
    // Dump the configuration
    //
    match serde_json::to_string_pretty(&config) {
        Ok(json) => {
            println!("{json}");
            CliAction::Exit(EXIT_SUCCESS)
        }
        Err(error) => {
            eprintln!("Error: {error}");
            CliAction::Exit(EXIT_WRONG_PARAMETER)
        }
    }
}
