//! roam-cli: line-oriented front end for the Roam text explorer
//!
//! The REPL is generic over its input and output streams so the whole
//! interactive surface can be exercised against in-memory buffers.

use std::io::{self, BufRead, Write};

use roam_core::map::{GridLayout, connection_map, visual_map};
use roam_core::world::{RoomGraph, RoomId};
use roam_core::{Command, MoveOutcome, Traveler};

/// The interactive prompt loop.
///
/// One iteration per input line: show the current room, prompt, read,
/// dispatch. The loop ends on a quit command, on end of input, or on an
/// internal-consistency failure (the current room vanishing from the
/// graph, which indicates corrupted state rather than bad data).
pub struct Repl<R, W> {
    graph: RoomGraph,
    traveler: Traveler,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// `start` must be a room of `graph`; use `RoomGraph::start_room`.
    pub fn new(graph: RoomGraph, start: RoomId, input: R, output: W) -> Self {
        Self {
            graph,
            traveler: Traveler::new(start),
            input,
            output,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== ROAM ===")?;
        writeln!(self.output, "Commands: N E S W | LOOK | MAP | VMAP | HELP | EXIT")?;

        loop {
            let current = self.traveler.current_room();
            if self.graph.room(current).is_none() {
                writeln!(
                    self.output,
                    "ERROR: current room {current} is missing from loaded data."
                )?;
                break;
            }
            self.display_room(current)?;

            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // End of input is an implicit quit.
                writeln!(self.output, "Goodbye.")?;
                break;
            }

            match Command::parse(&line) {
                None => writeln!(
                    self.output,
                    "Invalid command. Use N/E/S/W, LOOK, MAP, VMAP, HELP, or EXIT."
                )?,
                Some(Command::Quit) => {
                    writeln!(self.output, "Goodbye.")?;
                    break;
                }
                Some(Command::Help) => self.print_help()?,
                Some(Command::Look) => self.look(current)?,
                Some(Command::Map) => self.print_map()?,
                Some(Command::VisualMap) => self.print_visual_map()?,
                Some(Command::Move(dir)) => match self.traveler.step(dir, &self.graph) {
                    Ok(MoveOutcome::Moved(dest)) => {
                        log::debug!("moved {dir} to room {dest}");
                    }
                    Ok(MoveOutcome::Blocked) => {
                        writeln!(self.output, "You cannot go this way.")?;
                    }
                    Err(err) => {
                        writeln!(self.output, "ERROR: {err}")?;
                        break;
                    }
                },
            }
        }
        Ok(())
    }

    /// Room header shown before every prompt. First arrival marks the
    /// room visited; later arrivals get the reminder instead.
    fn display_room(&mut self, id: RoomId) -> io::Result<()> {
        let Some(room) = self.graph.room_mut(id) else {
            return Ok(());
        };
        writeln!(self.output)?;
        writeln!(self.output, "{}", room.name())?;
        writeln!(self.output, "{}", room.description())?;
        if room.visited() {
            writeln!(self.output, "You have visited this room.")?;
        } else {
            room.mark_visited();
        }
        writeln!(self.output, "{}", room.exits_line())?;
        Ok(())
    }

    /// LOOK reprints the room without touching the visited flag.
    fn look(&mut self, id: RoomId) -> io::Result<()> {
        let Some(room) = self.graph.room(id) else {
            return Ok(());
        };
        writeln!(self.output, "{}", room.name())?;
        writeln!(self.output, "{}", room.description())?;
        writeln!(self.output, "{}", room.exits_line())?;
        Ok(())
    }

    fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "Commands:")?;
        writeln!(self.output, "  N E S W   - Move (or NORTH/EAST/SOUTH/WEST)")?;
        writeln!(self.output, "  LOOK      - Reprint current room details")?;
        writeln!(self.output, "  MAP       - Print room connections (logical map)")?;
        writeln!(self.output, "  VMAP      - Print a simple ASCII diagram (visual map)")?;
        writeln!(self.output, "  HELP      - Show commands")?;
        writeln!(self.output, "  EXIT / Q  - Quit")?;
        Ok(())
    }

    fn print_map(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== GAME MAP (Connections) ===")?;
        write!(self.output, "{}", connection_map(&self.graph))?;
        writeln!(self.output, "==============================")?;
        Ok(())
    }

    fn print_visual_map(&mut self) -> io::Result<()> {
        let Some(start) = self.graph.start_room() else {
            writeln!(self.output, "No rooms loaded.")?;
            return Ok(());
        };
        writeln!(self.output)?;
        writeln!(self.output, "=== VISUAL MAP (ASCII) ===")?;
        writeln!(
            self.output,
            "Room labels show [id]. Type MAP to see names and full connections."
        )?;
        writeln!(self.output)?;
        let layout = GridLayout::place(&self.graph, start);
        write!(self.output, "{}", visual_map(&self.graph, &layout))?;
        Ok(())
    }
}
