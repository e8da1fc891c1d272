/*
main.rs

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

mod application;
mod board;
mod cli_options;
mod config;
mod draw;
mod game;
mod highscores;
mod input_errors;
mod pipe;
mod player_input;
mod saver;
mod solver;

use self::application::{Application, ApplicationError};
use self::cli_options::CliAction;

use config::EXIT_SUCCESS;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config_file = match cli_options::parse() {
        CliAction::Play(path) => path,
        CliAction::Exit(ret) => return ExitCode::from(ret),
    };

    let result: Result<(), ApplicationError> = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Application::new(&config_file, stdin.lock(), stdout.lock()).run()
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}
