use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FromIterator;

use crate::data::{Board, CELLS, SIZE};

/// Direction the blank moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// The order in which neighbors are generated.
pub const MOVES: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

impl Move {
    pub fn offset(self) -> isize {
        match self {
            Move::Up => -(SIZE as isize),
            Move::Down => SIZE as isize,
            Move::Left => -1,
            Move::Right => 1,
        }
    }

    pub fn inverse(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Where the blank at `blank` ends up, `None` if the move is illegal.
    pub fn target(self, blank: usize) -> Option<usize> {
        let c = blank % SIZE;
        match self {
            Move::Left if c == 0 => return None,
            Move::Right if c == SIZE - 1 => return None,
            _ => {}
        }
        // up and down can't wrap around so the range check is enough for them
        let target = blank as isize + self.offset();
        if target < 0 || target >= CELLS as isize {
            None
        } else {
            Some(target as usize)
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Up => write!(f, "Up"),
            Move::Down => write!(f, "Down"),
            Move::Left => write!(f, "Left"),
            Move::Right => write!(f, "Right"),
        }
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub(crate) fn reverse(&mut self) {
        self.0.reverse();
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    /// Applies all moves in order, `None` as soon as one of them is illegal.
    pub fn replay(&self, board: Board) -> Option<Board> {
        self.iter().try_fold(board, |board, &mov| board.apply(mov))
    }
}

impl FromIterator<Move> for Moves {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Moves(iter.into_iter().collect())
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, mov) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
