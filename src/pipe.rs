/*
pipe.rs

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

//! Pipe segments and their openings.
//!
//! In the configuration file, a pipe is stored in one byte.
//! For each [`Direction`] `d`, bit `7 - 2*d` indicates that the pipe is open in that direction,
//! and bit `6 - 2*d` indicates that the opening is connected to the neighboring pipe:
//!
//! ```text
//!   bit:    7     6     5     4     3     2     1     0
//!         open  conn  open  conn  open  conn  open  conn
//!         \____TOP__/ \___LEFT__/ \__BOTTOM_/ \__RIGHT__/
//! ```
//!
//! [`PipeCell`] keeps the two halves apart but converts to and from that byte without loss.

use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

/// The four sides of a pipe, in the order used by the byte encoding.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Direction {
    Top,
    Left,
    Bottom,
    Right,
}

impl Direction {
    /// All the directions, in encoding order.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Left,
        Direction::Bottom,
        Direction::Right,
    ];

    /// Return the direction on the other side of the pipe.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Left => Direction::Right,
            Direction::Bottom => Direction::Top,
            Direction::Right => Direction::Left,
        }
    }

    /// Return the direction an opening faces after the pipe has been turned.
    ///
    /// A left turn moves the top opening to the left, the left opening to the bottom, and so on.
    pub fn turned(self, rotation: Rotation) -> Self {
        let steps: u8 = match rotation {
            Rotation::Left => 1,
            Rotation::Right => 3,
        };
        Direction::from_repr((self as u8 + steps) % 4).expect("Direction index is always below 4")
    }

    /// Bit of the open flag in a nibble.
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// The two ways a pipe can be turned.
///
/// Turning "up" or "down" does not exist, so that case cannot be expressed.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rotation {
    Left,
    Right,
}

/// Turn a 4-bit direction set by one step.
fn turn_nibble(nibble: u8, rotation: Rotation) -> u8 {
    match rotation {
        Rotation::Left => ((nibble << 1) | (nibble >> 3)) & 0x0F,
        Rotation::Right => ((nibble >> 1) | (nibble << 3)) & 0x0F,
    }
}

/// State of a single pipe: which sides are open, and which open sides currently meet an open
/// side of the neighboring pipe.
///
/// The connected flags are a cache owned by [`crate::board::Board`], which recomputes them after
/// every rotation.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[serde(from = "u8", into = "u8")]
pub struct PipeCell {
    /// Open sides, one bit per [`Direction`] (bit `d` for direction `d`).
    open: u8,

    /// Connected sides, with the same layout as [`PipeCell::open`].
    connected: u8,
}

impl PipeCell {
    /// Decode a pipe from its configuration file byte.
    pub fn from_byte(byte: u8) -> Self {
        let mut cell: PipeCell = PipeCell::default();
        for dir in Direction::ALL {
            let shift: u8 = 2 * dir as u8;
            if byte & (0x80 >> shift) != 0 {
                cell.open |= dir.bit();
            }
            if byte & (0x40 >> shift) != 0 {
                cell.connected |= dir.bit();
            }
        }
        cell
    }

    /// Encode the pipe into its configuration file byte.
    pub fn to_byte(self) -> u8 {
        let mut byte: u8 = 0;
        for dir in Direction::ALL {
            let shift: u8 = 2 * dir as u8;
            if self.is_open(dir) {
                byte |= 0x80 >> shift;
            }
            if self.is_connected(dir) {
                byte |= 0x40 >> shift;
            }
        }
        byte
    }

    /// Whether the pipe has an opening in the given direction.
    pub fn is_open(self, dir: Direction) -> bool {
        self.open & dir.bit() != 0
    }

    /// Whether the opening in the given direction meets an opening of the neighboring pipe.
    pub fn is_connected(self, dir: Direction) -> bool {
        self.connected & dir.bit() != 0
    }

    /// Number of open sides.
    pub fn open_count(self) -> u32 {
        self.open.count_ones()
    }

    /// Return the pipe turned by a quarter.
    ///
    /// Both the open and the connected flags move with the pipe, so the connected flags are stale
    /// until the board refreshes them.
    pub fn rotate(self, rotation: Rotation) -> Self {
        Self {
            open: turn_nibble(self.open, rotation),
            connected: turn_nibble(self.connected, rotation),
        }
    }

    /// Return the pipe with the connected flag of the given direction set or cleared.
    pub fn set_connected(self, dir: Direction, value: bool) -> Self {
        let connected: u8 = if value {
            self.connected | dir.bit()
        } else {
            self.connected & !dir.bit()
        };
        Self { connected, ..self }
    }
}

impl From<u8> for PipeCell {
    fn from(byte: u8) -> Self {
        PipeCell::from_byte(byte)
    }
}

impl From<PipeCell> for u8 {
    fn from(cell: PipeCell) -> Self {
        cell.to_byte()
    }
}
