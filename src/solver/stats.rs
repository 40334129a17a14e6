use std::fmt::{Debug, Display, Formatter, Result};

use separator::Separatable;

use crate::solver::search_node::SearchNode;

/// Counts of states by depth (number of moves from the initial state).
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<u32>,
    visited_states: Vec<u32>,
    duplicate_states: Vec<u32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> u32 {
        self.created_states.iter().sum::<u32>()
    }

    pub fn total_unique_visited(&self) -> u32 {
        self.visited_states.iter().sum::<u32>()
    }

    pub fn total_reached_duplicates(&self) -> u32 {
        self.duplicate_states.iter().sum::<u32>()
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    /// Returns true if this is the first state at its depth.
    fn add(counts: &mut Vec<u32>, node: &SearchNode<'_>) -> bool {
        let mut ret = false;

        // while because greedy search can jump over depths in the other vectors
        while node.dist as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[node.dist as usize] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "total created / unique visited / reached duplicates:")?;
        writeln!(
            f,
            "{:<16}{:<16}{}",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Unique", "Duplicates", "Unknown (not reached)"
        )?;
        // created_states is the longest vec
        for (i, &created) in self.created_states.iter().enumerate() {
            let visited = self.visited_states.get(i).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(i).cloned().unwrap_or(0);
            let left = created - visited - duplicates;
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", i),
                created.separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
                left.separated_string()
            )?;
        }
        Ok(())
    }
}
