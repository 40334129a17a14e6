use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Grid,
    Compact,
}

/// How the frontier is ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Heuristic only - fast but the path is not guaranteed to be shortest.
    Greedy,
    /// Path length + heuristic - always finds a shortest path.
    AStar,
}

impl Method {
    pub(crate) fn cost(self, dist: u32, h: u32) -> u32 {
        match self {
            Method::Greedy => h,
            Method::AStar => dist + h,
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Greedy => write!(f, "greedy"),
            Method::AStar => write!(f, "a-star"),
        }
    }
}
