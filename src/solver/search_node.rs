use std::cmp::Ordering;

use crate::config::Method;
use crate::state::State;

/// A frontier entry, ordered by cost only.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: &'a State<'a>,
    pub(crate) dist: u32,
    #[cfg(feature = "graph")]
    pub(crate) h: u32,
    pub(crate) cost: u32,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(state: &'a State<'a>, h: u32, method: Method) -> Self {
        let dist = state.depth();
        Self {
            state,
            dist,
            #[cfg(feature = "graph")]
            h,
            cost: method.cost(dist, h),
        }
    }
}

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl Eq for SearchNode<'_> {}
