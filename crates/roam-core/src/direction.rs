//! Cardinal directions and their grid offsets.
//!
//! The four-direction set is closed: exits, movement commands, and the
//! map layout all consume this one enum. Declaration order is N, E, S, W;
//! the layout pass visits exits in this order, which decides who claims a
//! contested grid cell.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Movement directions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Get the delta (dx, dy) for this direction.
    ///
    /// The y axis grows southward, so North is (0, -1).
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Single-letter name used in the data file header and map output.
    pub const fn short_name(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
        }
    }

    /// Index into per-room exit storage.
    pub(crate) const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Parse player input into a direction. Accepts the single letter or
    /// the full word, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "N" | "NORTH" => Some(Direction::North),
            "E" | "EAST" => Some(Direction::East),
            "S" | "SOUTH" => Some(Direction::South),
            "W" | "WEST" => Some(Direction::West),
            _ => None,
        }
    }
}
