//! Grid placement for the visual map.
//!
//! Rooms carry no coordinates of their own; the layout derives them from
//! exit directions alone, breadth-first from the start room. Placement is
//! first-claim-wins: once a room or a cell is taken it is never
//! reassigned, so the pass always terminates and never double-places a
//! room, at the cost of omitting rooms whose exit directions are not
//! consistent with a planar grid. Unreachable rooms stay unplaced and
//! simply do not appear in the diagram.

use std::collections::{BTreeMap, HashSet, VecDeque};

use strum::IntoEnumIterator;

use crate::direction::Direction;
use crate::world::graph::RoomGraph;
use crate::world::room::RoomId;

/// Inclusive coordinate bounds of the placed rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

/// Integer grid coordinates for every room reachable from the start
/// room, with the start room at (0, 0).
#[derive(Debug, Clone, Default)]
pub struct GridLayout {
    coords: BTreeMap<RoomId, (i32, i32)>,
}

impl GridLayout {
    /// Place rooms by breadth-first expansion from `start`.
    ///
    /// Exits are tried in N, E, S, W order; with inconsistent data that
    /// order decides which room claims a contested cell.
    pub fn place(graph: &RoomGraph, start: RoomId) -> Self {
        let mut coords: BTreeMap<RoomId, (i32, i32)> = BTreeMap::new();
        let mut taken: HashSet<(i32, i32)> = HashSet::new();
        let mut frontier: VecDeque<RoomId> = VecDeque::new();

        if graph.contains(start) {
            coords.insert(start, (0, 0));
            taken.insert((0, 0));
            frontier.push_back(start);
        }

        while let Some(id) = frontier.pop_front() {
            let Some(room) = graph.room(id) else { continue };
            let Some(&(x, y)) = coords.get(&id) else { continue };

            for dir in Direction::iter() {
                let Some(neighbor) = room.exit(dir) else { continue };
                if !graph.contains(neighbor) {
                    continue;
                }
                let (dx, dy) = dir.delta();
                let cell = (x + dx, y + dy);
                if !coords.contains_key(&neighbor) && !taken.contains(&cell) {
                    coords.insert(neighbor, cell);
                    taken.insert(cell);
                    frontier.push_back(neighbor);
                }
            }
        }

        Self { coords }
    }

    pub fn coord(&self, id: RoomId) -> Option<(i32, i32)> {
        self.coords.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Placed rooms in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomId, (i32, i32))> + '_ {
        self.coords.iter().map(|(&id, &xy)| (id, xy))
    }

    /// Bounding box of the placed rooms, or `None` if nothing is placed.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut iter = self.coords.values();
        let &(x, y) = iter.next()?;
        let mut bounds = Bounds {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        };
        for &(x, y) in iter {
            bounds.min_x = bounds.min_x.min(x);
            bounds.max_x = bounds.max_x.max(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_y = bounds.max_y.max(y);
        }
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};

    use proptest::prelude::*;

    use super::*;
    use crate::world::load_from_str;
    use crate::world::room::Room;

    #[test]
    fn test_start_room_is_origin() {
        let graph = load_from_str("1|Hall|.|0,2,0,0\n2|Den|.|0,0,0,1").unwrap();
        let layout = GridLayout::place(&graph, RoomId(1));
        assert_eq!(layout.coord(RoomId(1)), Some((0, 0)));
        assert_eq!(layout.coord(RoomId(2)), Some((1, 0)));
    }

    #[test]
    fn test_unreachable_rooms_stay_unplaced() {
        let graph = load_from_str("1|Hall|.|0,0,0,0\n9|Attic|.|0,0,0,0").unwrap();
        let layout = GridLayout::place(&graph, RoomId(1));
        assert_eq!(layout.coord(RoomId(1)), Some((0, 0)));
        assert_eq!(layout.coord(RoomId(9)), None);
    }

    #[test]
    fn test_dangling_exits_are_skipped() {
        let graph = load_from_str("1|Hall|.|0,42,0,0").unwrap();
        let layout = GridLayout::place(&graph, RoomId(1));
        assert_eq!(layout.len(), 1);
    }

    #[test]
    fn test_placed_rooms_are_never_reassigned() {
        // Cell (1,1) is reachable from 2 going south and from 3 going
        // east. The BFS expands 2 first, places 4 there, and the second
        // path is a no-op.
        let data = "\
1|A|.|0,2,3,0
2|B|.|0,0,4,0
3|C|.|0,4,0,0
4|D|.|0,0,0,0
";
        let graph = load_from_str(data).unwrap();
        let layout = GridLayout::place(&graph, RoomId(1));
        assert_eq!(layout.coord(RoomId(4)), Some((1, 1)));
        assert_eq!(layout.len(), 4);
    }

    #[test]
    fn test_inconsistent_geometry_omits_the_loser() {
        // The data puts 3 west of 2, which is the start room's cell.
        // (0,0) is already claimed, so 3 stays unplaced.
        let data = "\
1|A|.|0,2,0,0
2|B|.|0,0,0,3
3|C|.|0,0,0,0
";
        let graph = load_from_str(data).unwrap();
        let layout = GridLayout::place(&graph, RoomId(1));
        assert_eq!(layout.coord(RoomId(2)), Some((1, 0)));
        assert_eq!(layout.coord(RoomId(3)), None);
    }

    #[test]
    fn test_bounds_cover_all_placed_rooms() {
        let data = "1|A|.|2,3,0,0\n2|B|.|0,0,1,0\n3|C|.|0,0,0,1";
        let graph = load_from_str(data).unwrap();
        let layout = GridLayout::place(&graph, RoomId(1));
        let bounds = layout.bounds().unwrap();
        assert_eq!((bounds.min_x, bounds.max_x), (0, 1));
        assert_eq!((bounds.min_y, bounds.max_y), (-1, 0));
    }

    #[test]
    fn test_missing_start_yields_empty_layout() {
        let graph = load_from_str("1|A|.|0,0,0,0").unwrap();
        let layout = GridLayout::place(&graph, RoomId(5));
        assert!(layout.is_empty());
        assert_eq!(layout.bounds(), None);
    }

    proptest! {
        /// No two rooms ever share a cell, whatever the exit data says.
        #[test]
        fn prop_coordinates_are_unique(exits in prop::collection::vec((0u32..8, 0u32..8, 0u32..8, 0u32..8), 1..8)) {
            let mut rooms = BTreeMap::new();
            for (i, &(n, e, s, w)) in exits.iter().enumerate() {
                let id = RoomId(i as u32 + 1);
                let mut room = Room::new(id, "R", "");
                for (dir, dest) in [
                    (Direction::North, n),
                    (Direction::East, e),
                    (Direction::South, s),
                    (Direction::West, w),
                ] {
                    if dest > 0 {
                        room.set_exit(dir, RoomId(dest));
                    }
                }
                rooms.insert(id, room);
            }
            let graph = RoomGraph::new(rooms);
            let layout = GridLayout::place(&graph, RoomId(1));

            let cells: HashSet<(i32, i32)> = layout.iter().map(|(_, xy)| xy).collect();
            prop_assert_eq!(cells.len(), layout.len());
            prop_assert_eq!(layout.coord(RoomId(1)), Some((0, 0)));
        }
    }
}
