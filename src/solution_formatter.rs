use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::Board;
use crate::moves::Moves;

pub struct SolutionFormatter<'a> {
    initial: &'a Board,
    moves: &'a Moves,
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(initial: &'a Board, moves: &'a Moves, format: Format) -> Self {
        Self {
            initial,
            moves,
            format,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.initial.format(self.format))?;
        let mut last = *self.initial;
        for &mov in self.moves {
            match last.apply(mov) {
                Some(board) => {
                    writeln!(f, "{}:", mov)?;
                    writeln!(f, "{}", board.format(self.format))?;
                    last = board;
                }
                None => return writeln!(f, "{} is not possible here", mov),
            }
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
