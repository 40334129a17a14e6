#[cfg(feature = "graph")]
mod graph;
mod search_node;
mod stats;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Formatter};

use fnv::FnvHashSet;
use log::debug;
use typed_arena::Arena;

use crate::config::Method;
use crate::data::Board;
use crate::moves::Moves;
use crate::puzzle::Puzzle;
use crate::state::State;
use crate::Solve;

#[cfg(feature = "graph")]
use self::graph::Graph;
use self::search_node::SearchNode;

pub use self::stats::Stats;

#[derive(Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved { moves: Moves, final_board: Board },
    /// The goal is not reachable - all reachable boards have been visited.
    NoSolution,
}

impl Outcome {
    pub fn moves(&self) -> Option<&Moves> {
        match *self {
            Outcome::Solved { ref moves, .. } => Some(moves),
            Outcome::NoSolution => None,
        }
    }
}

impl Debug for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::Solved {
                ref moves,
                ref final_board,
            } => write!(f, "Solved [{:?}] -> {}", moves, final_board.compact()),
            Outcome::NoSolution => write!(f, "No solution"),
        }
    }
}

pub struct SolverOk {
    pub outcome: Outcome,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    fn new(outcome: Outcome, stats: Stats, method: Method) -> Self {
        Self {
            outcome,
            stats,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.outcome.moves() {
            None => writeln!(f, "No solution")?,
            Some(moves) => writeln!(f, "{}: {}", self.method, moves.move_cnt())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, method: Method, print_status: bool) -> SolverOk {
        search(self.initial, &self.goal, method, print_status)
    }
}

/// Greedy best-first search from `initial` to `goal`.
///
/// The returned path is not necessarily the shortest one,
/// use `Method::AStar` through `Solve` for that.
pub fn solve(initial: Board, goal: Board) -> Outcome {
    search(initial, &goal, Method::Greedy, false).outcome
}

fn search(initial: Board, goal: &Board, method: Method, print_status: bool) -> SolverOk {
    debug!("Search called, method: {}", method);

    // all states live until the search ends so they can link to their parents
    let arena = Arena::new();

    let mut stats = Stats::new();
    let mut to_visit = BinaryHeap::new();
    let mut visited = FnvHashSet::default();
    let mut outcome = Outcome::NoSolution;

    #[cfg(feature = "graph")]
    let mut graph = Graph::new();

    let start: &State<'_> = arena.alloc(State::new(initial));
    let start_node = SearchNode::new(start, start.heuristic(goal), method);
    stats.add_created(&start_node);
    #[cfg(feature = "graph")]
    graph.add(&start_node, None);
    to_visit.push(Reverse(start_node));

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        // the frontier is not deduplicated so the same board can be queued more than once
        if visited.contains(cur_node.state.board()) {
            stats.add_reached_duplicate(&cur_node);
            #[cfg(feature = "graph")]
            graph.mark_duplicate(cur_node.state.board());
            continue;
        }
        if stats.add_unique_visited(&cur_node) && print_status {
            println!("Visited new depth: {}", cur_node.dist);
            println!("{:?}", stats);
        }
        #[cfg(feature = "graph")]
        graph.mark_unique(cur_node.state.board());

        if cur_node.state.is_goal(goal) {
            debug!("Solved, collecting moves");
            outcome = Outcome::Solved {
                moves: cur_node.state.moves(),
                final_board: *cur_node.state.board(),
            };
            break;
        }

        visited.insert(*cur_node.state.board());

        for neighbor in cur_node.state.neighbors() {
            if visited.contains(neighbor.board()) {
                continue;
            }
            let h = neighbor.heuristic(goal);
            let next_node = SearchNode::new(arena.alloc(neighbor), h, method);
            stats.add_created(&next_node);
            #[cfg(feature = "graph")]
            graph.add(&next_node, Some(cur_node.state.board()));
            to_visit.push(Reverse(next_node));
        }
    }

    debug!(
        "Search finished, visited {} of {} created states",
        stats.total_unique_visited(),
        stats.total_created()
    );

    #[cfg(feature = "graph")]
    {
        if let Err(err) = graph.draw_states() {
            log::warn!("Failed to draw the state space: {}", err);
        }
    }

    SolverOk::new(outcome, stats, method)
}

#[cfg(test)]
mod tests {
    use crate::moves::Move;

    use super::*;

    fn board(cells: [u8; 9]) -> Board {
        Board::new(cells).unwrap()
    }

    // all permutations of the same parity
    const REACHABLE: u32 = 181_440;

    #[test]
    fn one_move() {
        let initial = board([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let goal = board([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(
            solve(initial, goal),
            Outcome::Solved {
                moves: Moves::new(vec![Move::Left]),
                final_board: goal,
            }
        );

        for &method in &[Method::Greedy, Method::AStar] {
            let solver_ok = Puzzle::new(initial, goal).solve(method, false);
            assert_eq!(solver_ok.outcome.moves().unwrap().move_cnt(), 1);
            assert_eq!(solver_ok.stats.total_created(), 3);
            assert_eq!(solver_ok.stats.total_unique_visited(), 2);
            assert_eq!(solver_ok.stats.total_reached_duplicates(), 0);
        }
    }

    #[test]
    fn already_solved() {
        let goal = Board::solved();
        assert_eq!(
            solve(goal, goal),
            Outcome::Solved {
                moves: Moves::default(),
                final_board: goal,
            }
        );

        let solver_ok = Puzzle::new(goal, goal).solve(Method::AStar, false);
        assert_eq!(solver_ok.stats.total_created(), 1);
        assert_eq!(solver_ok.stats.total_unique_visited(), 1);
    }

    #[test]
    fn two_moves() {
        let initial = board([1, 2, 3, 4, 5, 6, 0, 7, 8]);
        let solver_ok = Puzzle::new(initial, Board::solved()).solve(Method::AStar, false);
        assert_eq!(
            solver_ok.outcome.moves(),
            Some(&Moves::new(vec![Move::Right, Move::Right]))
        );
    }

    #[test]
    fn no_solution_visits_everything() {
        let initial = Board::solved();
        let goal = board([2, 1, 3, 4, 5, 6, 7, 8, 0]);
        assert!(!initial.same_parity(&goal));

        let solver_ok = Puzzle::new(initial, goal).solve(Method::Greedy, false);
        assert_eq!(solver_ok.outcome, Outcome::NoSolution);
        assert_eq!(solver_ok.stats.total_unique_visited(), REACHABLE);
        assert_eq!(
            solver_ok.stats.total_created(),
            solver_ok.stats.total_unique_visited() + solver_ok.stats.total_reached_duplicates()
        );
        assert_eq!(format!("{:?}", solver_ok).lines().next(), Some("No solution"));
    }

    #[test]
    fn a_star_is_optimal() {
        // 31 is the maximum for the 8-puzzle
        let initial = board([8, 6, 7, 2, 5, 4, 3, 0, 1]);
        let goal = Board::solved();

        let optimal = Puzzle::new(initial, goal).solve(Method::AStar, false);
        let moves = optimal.outcome.moves().unwrap();
        assert_eq!(moves.move_cnt(), 31);
        assert_eq!(moves.replay(initial), Some(goal));

        let greedy = Puzzle::new(initial, goal).solve(Method::Greedy, false);
        let greedy_moves = greedy.outcome.moves().unwrap();
        assert!(greedy_moves.move_cnt() >= 31);
        assert_eq!(greedy_moves.replay(initial), Some(goal));
    }

    #[test]
    fn scrambled() {
        // deterministic pseudo-random walks away from an arbitrary goal
        let goal = board([1, 2, 3, 8, 0, 4, 7, 6, 5]);
        let mut seed: u32 = 12345;
        for walk_len in &[3, 10, 25, 60, 200] {
            let mut initial = goal;
            for _ in 0..*walk_len {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
                let mov = crate::moves::MOVES[(seed >> 16) as usize % 4];
                if let Some(next) = initial.apply(mov) {
                    initial = next;
                }
            }

            let greedy = solve(initial, goal);
            match greedy {
                Outcome::Solved {
                    ref moves,
                    final_board,
                } => {
                    assert_eq!(final_board, goal);
                    assert_eq!(moves.replay(initial), Some(goal));
                }
                Outcome::NoSolution => panic!("{} should be solvable", initial.compact()),
            }

            let optimal = Puzzle::new(initial, goal).solve(Method::AStar, false);
            let optimal_moves = optimal.outcome.moves().unwrap();
            assert_eq!(optimal_moves.replay(initial), Some(goal));
            assert!(optimal_moves.move_cnt() <= greedy.moves().unwrap().move_cnt());
            assert!(optimal_moves.move_cnt() <= *walk_len);
        }
    }
}
