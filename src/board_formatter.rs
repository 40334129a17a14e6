use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{Board, SIZE};

pub struct BoardFormatter<'a> {
    board: &'a Board,
    format: Format,
}

impl<'a> BoardFormatter<'a> {
    pub(crate) fn new(board: &'a Board, format: Format) -> Self {
        Self { board, format }
    }

    fn write_grid(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (r, row) in self.board.cells().chunks(SIZE).enumerate() {
            if r > 0 {
                writeln!(f, "---|---|---")?;
            }
            for (c, tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " |")?;
                }
                write!(f, " {}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_compact(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.board.cells().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

impl Display for BoardFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.format {
            Format::Grid => self.write_grid(f),
            Format::Compact => self.write_compact(f),
        }
    }
}

impl Debug for BoardFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
