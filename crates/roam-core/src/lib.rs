//! roam-core: world logic for the Roam text explorer
//!
//! This crate contains the room graph, traveler state, map layout, and
//! text rendering with no interactive I/O. It is designed to be pure
//! and testable; the prompt loop and terminal plumbing live in roam-cli.

pub mod command;
pub mod direction;
pub mod map;
pub mod traveler;
pub mod world;

pub use command::Command;
pub use direction::Direction;
pub use map::{GridLayout, connection_map, visual_map};
pub use traveler::{LostTraveler, MoveOutcome, Traveler};
pub use world::{LoadError, Room, RoomGraph, RoomId};
