use crate::{Outcome, Snapshot, Tile};
use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::style::{PrintStyledContent, Stylize};
use std::io::{self, Write};

// Raw mode turns off output post-processing, so every line ends in CRLF.
const NEWLINE: &str = "\r\n";

const CONTROLS: [&str; 6] = [
    "",
    "------ MINESWEEPER ------",
    "Move: W, S, A, D",
    "Open a field: <SPACE>",
    "Flag a suspected mine: F",
    "-------------------------",
];

/// Writes frames to any byte sink, repainting in place between frames.
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn controls(&mut self) -> io::Result<()> {
        for line in CONTROLS {
            write!(self.out, "{line}{NEWLINE}")?;
        }
        write!(self.out, "{NEWLINE}")?;
        self.out.flush()
    }

    pub fn frame(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let cursor = snapshot.cursor();
        for (row, tiles) in snapshot.rows_iter().enumerate() {
            for (col, tile) in tiles.enumerate() {
                let selected = cursor.row == row && cursor.col == col;
                write!(self.out, "{}", if selected { '[' } else { ' ' })?;
                self.tile(tile)?;
                write!(self.out, "{}", if selected { ']' } else { ' ' })?;
            }
            write!(self.out, "{NEWLINE}")?;
        }
        self.out.flush()
    }

    /// Moves the terminal cursor back to the first line of the last frame.
    pub fn rewind(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let rows = u16::try_from(snapshot.rows()).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("cannot repaint a frame of {} rows", snapshot.rows()),
            )
        })?;
        queue!(self.out, MoveUp(rows), MoveToColumn(0))?;
        self.out.flush()
    }

    pub fn result(&mut self, outcome: Outcome) -> io::Result<()> {
        write!(self.out, "{NEWLINE}")?;
        match outcome {
            Outcome::Won => queue!(
                self.out,
                PrintStyledContent("Congratulations, you win!".green())
            )?,
            Outcome::Lost => write!(self.out, "OOPS! You lost...")?,
        }
        write!(self.out, "{NEWLINE}")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn tile(&mut self, tile: Tile) -> io::Result<()> {
        match tile {
            Tile::Flagged => queue!(self.out, PrintStyledContent("F".red())),
            Tile::Closed => write!(self.out, "."),
            Tile::OpenMine => write!(self.out, "@"),
            Tile::OpenEmpty(0) => write!(self.out, " "),
            Tile::OpenEmpty(n) => write!(self.out, "{n}"),
        }
    }
}
