/*
board.rs

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

//! Grid of pipes.
//!
//! The [`Board`] object owns the pipes, the start and the end pipes, and keeps the connected
//! flags of every pipe up to date when the player turns a pipe.

use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::pipe::{Direction, PipeCell, Rotation};

/// Row or column index.
pub type Coord = u8;

/// `(row, column)` coordinates, starting at 0.
pub type Position = (Coord, Coord);

/// Reasons for refusing to turn a pipe.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RotateError {
    /// The coordinates are outside the board.
    #[error("Usage: rotate ( left | right ) ROW COLUMN")]
    OutOfBounds,

    /// The start and end pipes cannot be turned.
    #[error("Error: Rotating start- or end-pipe is not allowed")]
    ProtectedCell,
}

/// Inconsistencies detected when building a board.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must not be zero")]
    EmptyBoard,

    #[error("board has {actual} pipes instead of {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("start pipe {0:?} is outside the board")]
    StartOutOfBounds(Position),

    #[error("end pipe {0:?} is outside the board")]
    EndOutOfBounds(Position),
}

/// Board of pipes.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Board {
    /// Number of columns.
    width: Coord,

    /// Number of rows.
    height: Coord,

    /// Coordinates of the start pipe.
    start: Position,

    /// Coordinates of the end pipe.
    end: Position,

    /// Pipes, row after row.
    cells: Vec<PipeCell>,
}

impl Board {
    /// Create a [`Board`] object.
    ///
    /// The connected flags stored in `cells` are not trusted: they are computed again from the
    /// openings of the pipes.
    ///
    /// # Errors
    ///
    /// The method returns an error when a dimension is zero, when the number of pipes does not
    /// match the dimensions, or when the start or end pipe is outside the board.
    pub fn new(
        width: Coord,
        height: Coord,
        start: Position,
        end: Position,
        cells: Vec<PipeCell>,
    ) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyBoard);
        }
        let expected: usize = width as usize * height as usize;
        if cells.len() != expected {
            return Err(BoardError::ShapeMismatch {
                expected,
                actual: cells.len(),
            });
        }

        let mut board: Board = Self {
            width,
            height,
            start,
            end,
            cells,
        };
        if !board.is_on_board(start.0, start.1) {
            return Err(BoardError::StartOutOfBounds(start));
        }
        if !board.is_on_board(end.0, end.1) {
            return Err(BoardError::EndOutOfBounds(end));
        }
        board.recompute_connectivity();
        Ok(board)
    }

    /// Number of columns.
    pub fn width(&self) -> Coord {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> Coord {
        self.height
    }

    /// Coordinates of the start pipe.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Coordinates of the end pipe.
    pub fn end(&self) -> Position {
        self.end
    }

    /// Whether the pipe at the given coordinates is the start or the end pipe.
    pub fn is_terminal(&self, pos: Position) -> bool {
        pos == self.start || pos == self.end
    }

    /// Whether the coordinates are on the board.
    pub fn is_on_board(&self, row: Coord, col: Coord) -> bool {
        row < self.height && col < self.width
    }

    /// Return the pipe at the given coordinates, or None if the coordinates are outside the
    /// board.
    pub fn get(&self, pos: Position) -> Option<PipeCell> {
        if self.is_on_board(pos.0, pos.1) {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// Iterate over the rows of the board. Each row is a slice of `width` pipes.
    pub fn rows(&self) -> impl Iterator<Item = &[PipeCell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Return the coordinates of the neighbor in the given direction, or None when the pipe is
    /// on the edge of the board.
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (row, col) = pos;
        let next: Position = match dir {
            Direction::Top => (row.checked_sub(1)?, col),
            Direction::Left => (row, col.checked_sub(1)?),
            Direction::Bottom => (row.checked_add(1)?, col),
            Direction::Right => (row, col.checked_add(1)?),
        };
        if self.is_on_board(next.0, next.1) {
            Some(next)
        } else {
            None
        }
    }

    /// Turn the pipe at the given coordinates, and update the connected flags around it.
    ///
    /// # Errors
    ///
    /// The method returns an error, and leaves the board untouched, when the coordinates are
    /// outside the board or designate the start or the end pipe.
    pub fn rotate(&mut self, row: Coord, col: Coord, rotation: Rotation) -> Result<(), RotateError> {
        if !self.is_on_board(row, col) {
            return Err(RotateError::OutOfBounds);
        }
        if self.is_terminal((row, col)) {
            return Err(RotateError::ProtectedCell);
        }

        let i: usize = self.index((row, col));
        self.cells[i] = self.cells[i].rotate(rotation);
        debug!("Rotated pipe ({row}, {col}) {rotation:?}: {:#04x}", self.cells[i].to_byte());
        self.refresh_connectivity((row, col));
        Ok(())
    }

    /// Recompute the connected flags of a pipe and, for each of its neighbors, the flag that faces
    /// back to that pipe.
    ///
    /// Only the flags that depend on the given pipe are updated. All the other flags must already
    /// be correct.
    pub fn refresh_connectivity(&mut self, pos: Position) {
        for dir in Direction::ALL {
            self.update_connected_flag(pos, dir);
            if let Some(n) = self.neighbor(pos, dir) {
                self.update_connected_flag(n, dir.opposite());
            }
        }
    }

    /// Recompute the connected flags of every pipe on the board.
    pub fn recompute_connectivity(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                for dir in Direction::ALL {
                    self.update_connected_flag((row, col), dir);
                }
            }
        }
    }

    /// Whether the pipe at `pos` and its neighbor in direction `dir` are both open toward each
    /// other.
    pub fn is_linked(&self, pos: Position, dir: Direction) -> bool {
        if !self.get(pos).is_some_and(|cell| cell.is_open(dir)) {
            return false;
        }
        self.neighbor(pos, dir)
            .and_then(|n| self.get(n))
            .is_some_and(|cell| cell.is_open(dir.opposite()))
    }

    /// Set the connected flag of a pipe in one direction.
    fn update_connected_flag(&mut self, pos: Position, dir: Direction) {
        let linked: bool = self.is_linked(pos, dir);
        let i: usize = self.index(pos);
        self.cells[i] = self.cells[i].set_connected(dir, linked);
    }

    /// Position in the cell vector. The coordinates must be on the board.
    fn index(&self, pos: Position) -> usize {
        pos.0 as usize * self.width as usize + pos.1 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: u8 = 0x80;
    const LEFT: u8 = 0x20;
    const BOTTOM: u8 = 0x08;
    const RIGHT: u8 = 0x02;

    fn board(width: Coord, height: Coord, start: Position, end: Position, bytes: &[u8]) -> Board {
        let cells: Vec<PipeCell> = bytes.iter().map(|b| PipeCell::from_byte(*b)).collect();
        Board::new(width, height, start, end, cells).unwrap()
    }

    #[test]
    fn rejects_inconsistent_layouts() {
        let one: Vec<PipeCell> = vec![PipeCell::default()];
        assert_eq!(
            Board::new(0, 1, (0, 0), (0, 0), Vec::new()),
            Err(BoardError::EmptyBoard)
        );
        assert_eq!(
            Board::new(2, 1, (0, 0), (0, 1), one.clone()),
            Err(BoardError::ShapeMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            Board::new(1, 1, (1, 0), (0, 0), one.clone()),
            Err(BoardError::StartOutOfBounds((1, 0)))
        );
        assert_eq!(
            Board::new(1, 1, (0, 0), (0, 1), one),
            Err(BoardError::EndOutOfBounds((0, 1)))
        );
    }

    #[test]
    fn connected_flags_are_computed_on_load() {
        // The file claims that everything is connected, which is wrong for the second pair
        let b: Board = board(2, 2, (0, 0), (1, 1), &[0x03, 0x30, 0xC3, 0xF0]);
        assert!(b.get((0, 0)).unwrap().is_connected(Direction::Right));
        assert!(b.get((0, 1)).unwrap().is_connected(Direction::Left));
        assert!(!b.get((1, 0)).unwrap().is_connected(Direction::Top));
        assert!(b.get((1, 0)).unwrap().is_connected(Direction::Right));
        assert!(!b.get((1, 1)).unwrap().is_connected(Direction::Top));
    }

    #[test]
    fn neighbors_stay_on_the_board() {
        let b: Board = board(3, 2, (0, 0), (1, 2), &[0; 6]);
        assert_eq!(b.neighbor((0, 0), Direction::Top), None);
        assert_eq!(b.neighbor((0, 0), Direction::Left), None);
        assert_eq!(b.neighbor((0, 0), Direction::Bottom), Some((1, 0)));
        assert_eq!(b.neighbor((0, 0), Direction::Right), Some((0, 1)));
        assert_eq!(b.neighbor((1, 2), Direction::Bottom), None);
        assert_eq!(b.neighbor((1, 2), Direction::Right), None);
        assert_eq!(b.neighbor((1, 2), Direction::Top), Some((0, 2)));
    }

    #[test]
    fn rotate_refuses_terminals_and_off_board_pipes() {
        let mut b: Board = board(2, 1, (0, 0), (0, 1), &[RIGHT, LEFT]);
        let before: Board = b.clone();
        for rotation in [Rotation::Left, Rotation::Right] {
            assert_eq!(b.rotate(0, 0, rotation), Err(RotateError::ProtectedCell));
            assert_eq!(b.rotate(0, 1, rotation), Err(RotateError::ProtectedCell));
            assert_eq!(b.rotate(1, 0, rotation), Err(RotateError::OutOfBounds));
            assert_eq!(b.rotate(0, 2, rotation), Err(RotateError::OutOfBounds));
        }
        assert_eq!(b, before);
    }

    #[test]
    fn rotate_updates_neighbor_flags() {
        // start ═ ? end, where the middle pipe is vertical
        let mut b: Board = board(3, 1, (0, 0), (0, 2), &[RIGHT, TOP | BOTTOM, LEFT]);
        assert!(!b.get((0, 0)).unwrap().is_connected(Direction::Right));

        b.rotate(0, 1, Rotation::Left).unwrap();
        let middle: PipeCell = b.get((0, 1)).unwrap();
        assert!(middle.is_open(Direction::Left) && middle.is_open(Direction::Right));
        assert!(middle.is_connected(Direction::Left) && middle.is_connected(Direction::Right));
        assert!(b.get((0, 0)).unwrap().is_connected(Direction::Right));
        assert!(b.get((0, 2)).unwrap().is_connected(Direction::Left));

        b.rotate(0, 1, Rotation::Right).unwrap();
        assert!(!b.get((0, 0)).unwrap().is_connected(Direction::Right));
        assert!(!b.get((0, 2)).unwrap().is_connected(Direction::Left));
        assert!(!b.get((0, 1)).unwrap().is_connected(Direction::Top));
    }

    #[test]
    fn local_refresh_matches_full_recompute() {
        let bytes: [u8; 16] = [
            RIGHT,
            LEFT | BOTTOM,
            TOP | RIGHT,
            LEFT | BOTTOM | RIGHT,
            TOP | BOTTOM,
            TOP | LEFT | BOTTOM | RIGHT,
            LEFT | RIGHT,
            TOP | LEFT,
            BOTTOM | RIGHT,
            TOP | LEFT | RIGHT,
            0,
            TOP | BOTTOM,
            TOP | RIGHT,
            LEFT | BOTTOM,
            TOP | LEFT | BOTTOM,
            TOP,
        ];
        let mut b: Board = board(4, 4, (0, 0), (3, 3), &bytes);
        let moves: [(Coord, Coord, Rotation); 12] = [
            (1, 1, Rotation::Left),
            (0, 1, Rotation::Right),
            (2, 3, Rotation::Left),
            (1, 2, Rotation::Left),
            (3, 0, Rotation::Right),
            (2, 2, Rotation::Left),
            (1, 1, Rotation::Right),
            (0, 3, Rotation::Left),
            (2, 0, Rotation::Right),
            (3, 2, Rotation::Left),
            (2, 1, Rotation::Left),
            (1, 0, Rotation::Right),
        ];
        for (row, col, rotation) in moves {
            b.rotate(row, col, rotation).unwrap();
            let mut fresh: Board = b.clone();
            fresh.recompute_connectivity();
            assert_eq!(b, fresh, "after rotating ({row}, {col})");
        }
    }

    #[test]
    fn rows_follow_the_board_shape() {
        let b: Board = board(3, 2, (0, 0), (1, 2), &[1, 2, 3, 4, 5, 6]);
        let rows: Vec<&[PipeCell]> = b.rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.len() == 3));
    }
}
