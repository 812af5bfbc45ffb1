//! A single location in the world.
//!
//! Rooms are identity plus text plus up to four directional exits. The
//! exit table is filled by the loader and never changes afterward; only
//! the visited flag mutates during play.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::direction::Direction;

/// Identifier of a loaded room. Ids come from the data file and are
/// always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node in the world graph.
///
/// An exit holds only a destination id; it may dangle (point at an id
/// that was never loaded). Dangling exits are tolerated everywhere and
/// surfaced as `MISSING` in the textual map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    name: String,
    description: String,
    visited: bool,
    exits: [Option<RoomId>; 4],
}

impl Room {
    /// Create a room with no exits. Name and description are trimmed.
    pub fn new(id: RoomId, name: &str, description: &str) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            visited: false,
            exits: [None; 4],
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Set the visited flag. Idempotent; there is no way to clear it.
    pub fn mark_visited(&mut self) {
        self.visited = true;
    }

    /// Record an exit. Called by the loader only; gameplay never rewires
    /// the graph.
    pub fn set_exit(&mut self, dir: Direction, destination: RoomId) {
        self.exits[dir.index()] = Some(destination);
    }

    /// Destination id in the given direction, if an exit is defined.
    pub fn exit(&self, dir: Direction) -> Option<RoomId> {
        self.exits[dir.index()]
    }

    /// All defined exits in N, E, S, W order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        Direction::iter().filter_map(|dir| self.exit(dir).map(|dest| (dir, dest)))
    }

    /// One-line summary of the available exits, e.g. `Exits: N, E`.
    pub fn exits_line(&self) -> String {
        let names: Vec<&str> = self.exits().map(|(dir, _)| dir.short_name()).collect();
        if names.is_empty() {
            "Exits: (none)".to_string()
        } else {
            format!("Exits: {}", names.join(", "))
        }
    }
}
