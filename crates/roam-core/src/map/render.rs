//! Text rendering of the world map.
//!
//! Two views: a connection listing that needs no geometry and tolerates
//! dangling exits trivially, and an ASCII diagram drawn from a
//! `GridLayout`. The diagram reserves a fixed-size cell per grid
//! position plus a gap for connector glyphs; rooms show as a centered
//! `[id]` label and axis-aligned links as runs of `-` or `|`.

use std::fmt::Write as _;

use strum::IntoEnumIterator;

use crate::direction::Direction;
use crate::map::layout::GridLayout;
use crate::world::graph::RoomGraph;

/// Character columns reserved for a room label.
const CELL_W: usize = 7;
/// Columns between horizontally adjacent cells.
const GAP_W: usize = 3;
/// Character rows reserved for a room label.
const CELL_H: usize = 3;
/// Rows between vertically adjacent cells.
const GAP_H: usize = 1;

/// Fixed-size character canvas. Cells start blank; connector glyphs only
/// land on blank cells, so the first writer wins.
struct Canvas {
    width: usize,
    cells: Vec<char>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            cells: vec![' '; width * height],
        }
    }

    fn get(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, ch: char) {
        self.cells[y * self.width + x] = ch;
    }

    fn set_if_blank(&mut self, x: usize, y: usize, ch: char) {
        if self.get(x, y) == ' ' {
            self.set(x, y, ch);
        }
    }

    fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().collect::<String>())
    }
}

/// Canvas column/row of a cell's center, given normalized grid coords.
fn center(x: usize, y: usize) -> (usize, usize) {
    (
        x * (CELL_W + GAP_W) + CELL_W / 2,
        y * (CELL_H + GAP_H) + CELL_H / 2,
    )
}

/// Render the ASCII diagram of the placed rooms followed by a legend of
/// every loaded room, placed or not.
pub fn visual_map(graph: &RoomGraph, layout: &GridLayout) -> String {
    let mut out = String::new();

    if let Some(bounds) = layout.bounds() {
        let cols = (bounds.max_x - bounds.min_x + 1) as usize;
        let rows = (bounds.max_y - bounds.min_y + 1) as usize;
        let mut canvas = Canvas::new(
            cols * CELL_W + (cols - 1) * GAP_W,
            rows * CELL_H + (rows - 1) * GAP_H,
        );

        // Labels first; connectors afterwards only fill blank cells.
        for (id, (x, y)) in layout.iter() {
            let gx = (x - bounds.min_x) as usize;
            let gy = (y - bounds.min_y) as usize;
            let (cx, cy) = center(gx, gy);

            let label = format!("[{id}]");
            let left = cx as i64 - (label.len() / 2) as i64;
            for (i, ch) in label.chars().enumerate() {
                let px = left + i as i64;
                if px >= 0 && (px as usize) < canvas.width {
                    canvas.set(px as usize, cy, ch);
                }
            }
        }

        for (id, (x, y)) in layout.iter() {
            let Some(room) = graph.room(id) else { continue };
            let gx = (x - bounds.min_x) as usize;
            let gy = (y - bounds.min_y) as usize;
            let (cx1, cy1) = center(gx, gy);

            for dir in Direction::iter() {
                let Some(dest) = room.exit(dir) else { continue };
                let Some((nx, ny)) = layout.coord(dest) else {
                    continue;
                };
                let ngx = (nx - bounds.min_x) as usize;
                let ngy = (ny - bounds.min_y) as usize;
                let (cx2, cy2) = center(ngx, ngy);

                if cy1 == cy2 {
                    let (from, to) = (cx1.min(cx2), cx1.max(cx2));
                    for px in from + 1..to {
                        canvas.set_if_blank(px, cy1, '-');
                    }
                } else if cx1 == cx2 {
                    let (from, to) = (cy1.min(cy2), cy1.max(cy2));
                    for py in from + 1..to {
                        canvas.set_if_blank(cx1, py, '|');
                    }
                }
                // Pairs sharing neither coordinate draw nothing.
            }
        }

        for row in canvas.rows() {
            let _ = writeln!(out, "{row}");
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Legend:");
    for room in graph.iter() {
        let _ = writeln!(out, "  [{}] = {}", room.id(), room.name());
    }
    out
}

/// Render the non-spatial connection listing: every room with each
/// defined exit's direction, destination id, and destination name, or
/// `MISSING` when the destination was never loaded.
pub fn connection_map(graph: &RoomGraph) -> String {
    let mut out = String::new();
    for room in graph.iter() {
        let _ = write!(out, "Room {} ({}): ", room.id(), room.name());

        let mut any = false;
        for (dir, dest) in room.exits() {
            if any {
                out.push_str(", ");
            }
            let dest_name = graph.room(dest).map_or("MISSING", |r| r.name());
            let _ = write!(out, "{}->{}[{}]", dir.short_name(), dest, dest_name);
            any = true;
        }
        if !any {
            out.push_str("(no exits)");
        }
        out.push('\n');
    }
    out
}
