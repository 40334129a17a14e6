use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};

use crate::data::{Board, Pos, BLANK};
use crate::moves::{Move, Moves, MOVES};

/// One configuration reached during the search.
///
/// The path is stored as a link to the previous state, the whole prefix is shared
/// with the siblings and never mutated. Equality and hashing only look at the board.
#[derive(Clone)]
pub struct State<'a> {
    board: Board,
    blank: usize,
    prev: Option<&'a State<'a>>,
    last_move: Option<Move>,
    depth: u32,
}

impl<'a> State<'a> {
    pub fn new(board: Board) -> Self {
        State {
            board,
            blank: board.blank_index(),
            prev: None,
            last_move: None,
            depth: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn blank(&self) -> usize {
        self.blank
    }

    /// Number of moves from the initial state.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn moves(&self) -> Moves {
        let mut moves = Moves::default();
        let mut state = self;
        while let (Some(mov), Some(prev)) = (state.last_move, state.prev) {
            moves.add(mov);
            state = prev;
        }
        moves.reverse();
        moves
    }

    pub fn neighbors(&'a self) -> Vec<State<'a>> {
        MOVES
            .iter()
            .filter_map(|&mov| {
                let target = mov.target(self.blank)?;
                Some(State {
                    board: self.board.swapped(self.blank, target),
                    blank: target,
                    prev: Some(self),
                    last_move: Some(mov),
                    depth: self.depth + 1,
                })
            })
            .collect()
    }

    /// Sum of manhattan distances of all tiles (except blank) to their goal positions.
    pub fn heuristic(&self, goal: &Board) -> u32 {
        let goal_positions = goal.positions();
        self.board
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(i, &tile)| {
                Pos::from_index(i).dist(Pos::from_index(goal_positions[usize::from(tile)]))
            })
            .sum()
    }

    pub fn is_goal(&self, goal: &Board) -> bool {
        self.board == *goal
    }
}

impl PartialEq for State<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for State<'_> {}

impl Hash for State<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}

impl Debug for State<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("board", &self.board)
            .field("blank", &self.blank)
            .field("moves", &self.moves())
            .finish()
    }
}
