use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::fs;

use crate::config::Format;
use crate::data::Board;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::LoadPuzzle;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub initial: Board,
    pub goal: Board,
}

impl Puzzle {
    pub fn new(initial: Board, goal: Board) -> Self {
        Puzzle { initial, goal }
    }

    /// Half of all boards can't be reached from the other half.
    pub fn is_solvable(&self) -> bool {
        self.initial.same_parity(&self.goal)
    }

    pub fn solution<'a>(&'a self, moves: &'a Moves, format: Format) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.initial, moves, format)
    }
}

impl LoadPuzzle for str {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>> {
        let text = fs::read_to_string(self)?;
        Ok(text.parse::<Puzzle>()?)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.initial.grid())?;
        write!(f, "{}", self.goal.grid())
    }
}

impl Debug for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.initial.compact(), self.goal.compact())
    }
}
