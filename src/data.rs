use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::board_formatter::BoardFormatter;
use crate::config::Format;
use crate::moves::Move;

pub const SIZE: usize = 3;
pub const CELLS: usize = SIZE * SIZE;
pub const BLANK: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErr {
    OutOfRange(u8),
    Duplicate(u8),
}

impl Display for BoardErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardErr::OutOfRange(tile) => {
                write!(f, "Tile {} is out of range - only 0 to {} allowed", tile, CELLS - 1)
            }
            BoardErr::Duplicate(tile) => write!(f, "Tile {} appears more than once", tile),
        }
    }
}

impl Error for BoardErr {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    pub fn from_index(index: usize) -> Pos {
        Pos::new((index / SIZE) as u8, (index % SIZE) as u8)
    }

    pub fn dist(self, other: Pos) -> u32 {
        u32::from(self.r.abs_diff(other.r)) + u32::from(self.c.abs_diff(other.c))
    }
}

/// A 3x3 board in row-major order, 0 is the blank.
///
/// Always a permutation of 0..=8 - `new` is the only way to build one from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Board([u8; CELLS]);

impl Board {
    pub fn new(cells: [u8; CELLS]) -> Result<Board, BoardErr> {
        let mut seen = [false; CELLS];
        for &tile in &cells {
            let i = usize::from(tile);
            if i >= CELLS {
                return Err(BoardErr::OutOfRange(tile));
            }
            if seen[i] {
                return Err(BoardErr::Duplicate(tile));
            }
            seen[i] = true;
        }
        Ok(Board(cells))
    }

    /// The usual goal: tiles in order, blank in the bottom right corner.
    pub fn solved() -> Board {
        Board([1, 2, 3, 4, 5, 6, 7, 8, BLANK])
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.0
    }

    pub fn blank_index(&self) -> usize {
        match self.0.iter().position(|&tile| tile == BLANK) {
            Some(index) => index,
            None => unreachable!("Validated board without a blank"),
        }
    }

    /// `positions()[tile]` is the index of `tile`.
    pub fn positions(&self) -> [usize; CELLS] {
        let mut positions = [0; CELLS];
        for (i, &tile) in self.0.iter().enumerate() {
            positions[usize::from(tile)] = i;
        }
        positions
    }

    /// Moves the blank, `None` if it would leave the grid.
    pub fn apply(&self, mov: Move) -> Option<Board> {
        let blank = self.blank_index();
        let target = mov.target(blank)?;
        Some(self.swapped(blank, target))
    }

    pub(crate) fn swapped(&self, a: usize, b: usize) -> Board {
        let mut cells = self.0;
        cells.swap(a, b);
        Board(cells)
    }

    /// Pairs of tiles (ignoring the blank) that are in the wrong order relative to each other.
    pub fn inversions(&self) -> u32 {
        let mut cnt = 0;
        for (i, &a) in self.0.iter().enumerate() {
            if a == BLANK {
                continue;
            }
            cnt += self.0[i + 1..]
                .iter()
                .filter(|&&b| b != BLANK && b < a)
                .count() as u32;
        }
        cnt
    }

    /// Moving the blank never changes inversion parity on a grid with odd width
    /// so boards of different parity can't reach each other.
    pub fn same_parity(&self, other: &Board) -> bool {
        self.inversions() % 2 == other.inversions() % 2
    }

    pub fn grid(&self) -> BoardFormatter<'_> {
        BoardFormatter::new(self, Format::Grid)
    }

    pub fn compact(&self) -> BoardFormatter<'_> {
        BoardFormatter::new(self, Format::Compact)
    }

    pub fn format(&self, format: Format) -> BoardFormatter<'_> {
        BoardFormatter::new(self, format)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid())
    }
}
