//! Deriving and drawing the 2-D map.

pub mod layout;
pub mod render;

pub use layout::{Bounds, GridLayout};
pub use render::{connection_map, visual_map};
