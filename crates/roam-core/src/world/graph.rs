//! The loaded world as a whole.
//!
//! `RoomGraph` owns every room keyed by id. Topology is fixed once the
//! loader hands the graph over; the only mutation gameplay performs is
//! setting visited flags. Lookups never fail; a missing id is `None`,
//! and all validation of malformed data belongs to the loader.

use std::collections::BTreeMap;

use crate::direction::Direction;
use crate::world::room::{Room, RoomId};

/// All rooms of the world, keyed by id. Iteration is in ascending id
/// order, which keeps map and legend output deterministic.
#[derive(Debug, Clone)]
pub struct RoomGraph {
    rooms: BTreeMap<RoomId, Room>,
}

impl RoomGraph {
    /// Wrap an already-validated room table. The loader guarantees at
    /// least one room and unique ids for graphs built from data files.
    pub fn new(rooms: BTreeMap<RoomId, Room>) -> Self {
        Self { rooms }
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Mutable room access, used by the game loop to set visited flags.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(&id)
    }

    pub fn contains(&self, id: RoomId) -> bool {
        self.rooms.contains_key(&id)
    }

    /// Destination of the exit leaving `id` in `dir`, if both the room
    /// and the exit exist. The destination itself may dangle.
    pub fn exit_of(&self, id: RoomId, dir: Direction) -> Option<RoomId> {
        self.rooms.get(&id).and_then(|room| room.exit(dir))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// All rooms in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// The room the traveler starts in: room 1 when present, otherwise
    /// the smallest loaded id. `None` only for an empty graph, which the
    /// loader never produces.
    pub fn start_room(&self) -> Option<RoomId> {
        if self.rooms.contains_key(&RoomId(1)) {
            return Some(RoomId(1));
        }
        self.rooms.keys().next().copied()
    }
}
