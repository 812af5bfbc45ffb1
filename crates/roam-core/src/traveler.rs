//! Traveler state and movement.
//!
//! The traveler is a single current-room pointer. Moves are validated
//! against the graph: a missing exit or a dangling destination blocks
//! the move and leaves state untouched, so malformed data degrades into
//! a closed door instead of a crash.

use thiserror::Error;

use crate::direction::Direction;
use crate::world::graph::RoomGraph;
use crate::world::room::RoomId;

/// Internal-consistency failure: the traveler's current room id does not
/// resolve to a loaded room. Topology never changes after load, so this
/// can only come from a construction bug, and the game loop halts on it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("current room {0} is missing from the room graph")]
pub struct LostTraveler(pub RoomId);

/// Result of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Advanced through the exit; carries the new current room.
    Moved(RoomId),
    /// No exit that way, or the exit points at a room that was never
    /// loaded. State unchanged.
    Blocked,
}

/// The player's position in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traveler {
    current: RoomId,
}

impl Traveler {
    /// Create a traveler in the start room. The caller passes an id that
    /// exists in the graph (`RoomGraph::start_room`).
    pub fn new(start: RoomId) -> Self {
        Self { current: start }
    }

    pub fn current_room(&self) -> RoomId {
        self.current
    }

    /// Attempt to move one room in `dir`.
    ///
    /// Marking the destination visited is the caller's job; the traveler
    /// only moves the pointer.
    pub fn step(&mut self, dir: Direction, graph: &RoomGraph) -> Result<MoveOutcome, LostTraveler> {
        let room = graph.room(self.current).ok_or(LostTraveler(self.current))?;

        let Some(dest) = room.exit(dir) else {
            return Ok(MoveOutcome::Blocked);
        };
        if !graph.contains(dest) {
            return Ok(MoveOutcome::Blocked);
        }

        self.current = dest;
        Ok(MoveOutcome::Moved(dest))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::world::room::Room;

    fn two_room_graph() -> RoomGraph {
        // 1 <-> 2 along the E/W axis, plus a dangling exit north of 1.
        let mut hall = Room::new(RoomId(1), "Hall", "A long hall.");
        hall.set_exit(Direction::East, RoomId(2));
        hall.set_exit(Direction::North, RoomId(99));
        let mut den = Room::new(RoomId(2), "Den", "A cozy den.");
        den.set_exit(Direction::West, RoomId(1));

        let mut rooms = BTreeMap::new();
        rooms.insert(RoomId(1), hall);
        rooms.insert(RoomId(2), den);
        RoomGraph::new(rooms)
    }

    #[test]
    fn test_step_through_valid_exit() {
        let graph = two_room_graph();
        let mut traveler = Traveler::new(RoomId(1));
        assert_eq!(
            traveler.step(Direction::East, &graph),
            Ok(MoveOutcome::Moved(RoomId(2)))
        );
        assert_eq!(traveler.current_room(), RoomId(2));
    }

    #[test]
    fn test_step_blocked_without_exit() {
        let graph = two_room_graph();
        let mut traveler = Traveler::new(RoomId(2));
        assert_eq!(
            traveler.step(Direction::North, &graph),
            Ok(MoveOutcome::Blocked)
        );
        assert_eq!(traveler.current_room(), RoomId(2));
    }

    #[test]
    fn test_step_blocked_by_dangling_exit() {
        let graph = two_room_graph();
        let mut traveler = Traveler::new(RoomId(1));
        assert_eq!(
            traveler.step(Direction::North, &graph),
            Ok(MoveOutcome::Blocked)
        );
        assert_eq!(traveler.current_room(), RoomId(1));
    }

    #[test]
    fn test_step_from_missing_room_is_fatal() {
        let graph = two_room_graph();
        let mut traveler = Traveler::new(RoomId(42));
        assert_eq!(
            traveler.step(Direction::East, &graph),
            Err(LostTraveler(RoomId(42)))
        );
    }

    proptest! {
        /// After any sequence of attempts the current room is either
        /// unchanged or exactly the exit target queried for that step.
        #[test]
        fn prop_moves_follow_single_exits(dirs in prop::collection::vec(0usize..4, 0..64)) {
            let graph = two_room_graph();
            let mut traveler = Traveler::new(RoomId(1));
            let all: Vec<Direction> = Direction::iter().collect();

            for &i in &dirs {
                let dir = all[i];
                let before = traveler.current_room();
                let queried = graph.exit_of(before, dir);
                match traveler.step(dir, &graph).unwrap() {
                    MoveOutcome::Moved(dest) => {
                        prop_assert_eq!(Some(dest), queried);
                        prop_assert_eq!(traveler.current_room(), dest);
                        prop_assert!(graph.contains(dest));
                    }
                    MoveOutcome::Blocked => {
                        prop_assert_eq!(traveler.current_room(), before);
                    }
                }
            }
        }
    }
}
