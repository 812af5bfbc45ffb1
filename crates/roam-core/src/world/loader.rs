//! Room data file loading.
//!
//! The world is described in a line-oriented UTF-8 file. Blank lines and
//! lines starting with `#` are ignored; every other line must read
//! `id|name|description|N,E,S,W`, where the last field holds the four
//! exit destinations in that fixed order and `0` means no exit.
//!
//! Loading is all-or-nothing: any structural or type violation aborts
//! with an error naming the offending line. Dangling exit ids, on the
//! other hand, are legal data and are handled at traversal/render time.

use std::collections::BTreeMap;
use std::path::Path;

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::direction::Direction;
use crate::world::graph::RoomGraph;
use crate::world::room::{Room, RoomId};

/// Fatal problems with a room data file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected id|name|description|N,E,S,W")]
    FieldCount { line: usize },

    #[error("line {line}: exits must be 4 comma-separated integers in N,E,S,W order")]
    ExitCount { line: usize },

    #[error("line {line}: {field} must be a non-negative integer")]
    BadNumber { line: usize, field: &'static str },

    #[error("line {line}: room id must be positive")]
    NonPositiveId { line: usize },

    #[error("line {line}: duplicate room id {id}")]
    DuplicateId { line: usize, id: RoomId },

    #[error("no rooms found in the data file")]
    Empty,
}

/// Read and parse a room data file.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<RoomGraph, LoadError> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

/// Parse room data from an in-memory string. Line numbers in errors
/// count every physical line, starting at 1.
pub fn load_from_str(text: &str) -> Result<RoomGraph, LoadError> {
    let mut rooms: BTreeMap<RoomId, Room> = BTreeMap::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = trimmed.split('|').collect();
        if parts.len() != 4 {
            return Err(LoadError::FieldCount { line });
        }

        let id = RoomId(parse_positive(parts[0], "id", line)?);
        if rooms.contains_key(&id) {
            return Err(LoadError::DuplicateId { line, id });
        }

        let exit_fields: Vec<&str> = parts[3].split(',').collect();
        if exit_fields.len() != 4 {
            return Err(LoadError::ExitCount { line });
        }

        let mut room = Room::new(id, parts[1], parts[2]);
        for (dir, field) in Direction::iter().zip(&exit_fields) {
            let dest = parse_non_negative(field, dir.short_name(), line)?;
            if dest > 0 {
                room.set_exit(dir, RoomId(dest));
            }
        }

        rooms.insert(id, room);
    }

    if rooms.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(RoomGraph::new(rooms))
}

fn parse_positive(field: &str, name: &'static str, line: usize) -> Result<u32, LoadError> {
    let value = parse_non_negative(field, name, line)?;
    if value == 0 {
        return Err(LoadError::NonPositiveId { line });
    }
    Ok(value)
}

fn parse_non_negative(field: &str, name: &'static str, line: usize) -> Result<u32, LoadError> {
    field
        .trim()
        .parse::<u32>()
        .map_err(|_| LoadError::BadNumber { line, field: name })
}
