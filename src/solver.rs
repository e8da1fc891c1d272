/*
solver.rs

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

//! Verify whether the start and the end pipes are connected.
//!
//! The search only follows pairs of pipes that are open toward each other.
//! It reads the openings directly instead of the connected flags, so the result does not depend
//! on the flags being up to date.

use log::debug;

use crate::board::{Board, Position};
use crate::pipe::Direction;

/// Search status of a pipe.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Mark {
    Unvisited,
    Visited,
    /// The end pipe. Reaching it completes the search.
    Found,
}

/// Whether a path of pipes links the start pipe to the end pipe.
///
/// Depth-first search from the start pipe. Every pipe is expanded at most once, so boards with
/// loops are fine.
pub fn is_solved(board: &Board) -> bool {
    let width: usize = board.width() as usize;
    let index = |pos: Position| pos.0 as usize * width + pos.1 as usize;

    let mut marks: Vec<Mark> = vec![Mark::Unvisited; width * board.height() as usize];
    marks[index(board.end())] = Mark::Found;

    let mut stack: Vec<Position> = vec![board.start()];
    let mut visited: usize = 0;

    while let Some(pos) = stack.pop() {
        match marks[index(pos)] {
            Mark::Found => {
                debug!("End pipe reached after visiting {visited} pipes");
                return true;
            }
            Mark::Visited => continue,
            Mark::Unvisited => (),
        }
        marks[index(pos)] = Mark::Visited;
        visited += 1;

        for dir in Direction::ALL {
            if !board.is_linked(pos, dir) {
                continue;
            }
            if let Some(n) = board.neighbor(pos, dir)
                && marks[index(n)] != Mark::Visited
            {
                stack.push(n);
            }
        }
    }
    debug!("End pipe not reachable, {visited} pipes visited");
    false
}
