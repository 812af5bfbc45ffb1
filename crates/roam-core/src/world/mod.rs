//! The room graph and how it gets loaded.

pub mod graph;
pub mod loader;
pub mod room;

pub use graph::RoomGraph;
pub use loader::{LoadError, load_from_file, load_from_str};
pub use room::{Room, RoomId};
