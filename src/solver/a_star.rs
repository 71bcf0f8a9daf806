use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::data::{Dir, Pos};
use crate::state::State;

/// Search counters, indexed by depth (number of pushes).
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<u64>,
    duplicate_states: Vec<u64>,
    visited_states: Vec<u64>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> u64 {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum()
    }

    /// Deepest level reached so far (only counts expanded states).
    pub fn max_depth(&self) -> Option<usize> {
        self.visited_states.len().checked_sub(1)
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node.dist)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.visited_states, node.dist)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node.dist)
    }

    /// Returns true if this is the first state at `depth`.
    fn add(counts: &mut Vec<u64>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        // while because depths can be skipped in the duplicates vec
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    fn at(counts: &[u64], depth: usize) -> u64 {
        counts.get(depth).cloned().unwrap_or(0)
    }
}

/// Short summary used while the search is running
impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "total created / unique visited / reached duplicates:")?;
        writeln!(
            f,
            "{:<16}{:<17}{}",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        // the search stops as soon as it finds a solution so not everything gets reached
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Unique"),
            Cell::new("Duplicates"),
            Cell::new("Unknown (not reached)"),
        ]));

        // created is always the longest - a state is created before it's reached
        for depth in 0..self.created_states.len() {
            let created = self.created_states[depth];
            let visited = Self::at(&self.visited_states, depth);
            let duplicates = Self::at(&self.duplicate_states, depth);
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&created.separated_string()),
                Cell::new(&visited.separated_string()),
                Cell::new(&duplicates.separated_string()),
                Cell::new(&(created - visited - duplicates).separated_string()),
            ]));
        }
        write!(f, "{}", table)
    }
}

/// One push as it happened during the search.
///
/// `player_pos` is where the player actually stood before walking to the box,
/// not the normalized position stored in states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Push {
    pub(crate) player_pos: Pos,
    pub(crate) box_pos: Pos,
    pub(crate) dir: Dir,
}

/// Persistent list of pushes - nodes share their common prefix.
#[derive(Debug)]
pub(crate) struct PushEvent<'a> {
    pub(crate) prev: Option<&'a PushEvent<'a>>,
    pub(crate) push: Push,
}

impl<'a> PushEvent<'a> {
    /// All pushes from the initial state up to and including this one.
    pub(crate) fn pushes(&self) -> Vec<Push> {
        let mut pushes = Vec::new();
        let mut cur = Some(self);
        while let Some(event) = cur {
            pushes.push(event.push);
            cur = event.prev;
        }
        pushes.reverse();
        pushes
    }
}

#[derive(Debug)]
pub(crate) struct SearchNode<'a> {
    /// Normalized - the key in the closed set
    pub(crate) state: &'a State,
    /// Where the player really is after the last push
    pub(crate) player_pos: Pos,
    pub(crate) history: Option<&'a PushEvent<'a>>,
    pub(crate) dist: u32,
    pub(crate) cost: u32,
    /// Insertion counter, nodes with equal cost are expanded in FIFO order
    pub(crate) order: u64,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(
        state: &'a State,
        player_pos: Pos,
        history: Option<&'a PushEvent<'a>>,
        dist: u32,
        heuristic: u32,
        order: u64,
    ) -> Self {
        SearchNode {
            state,
            player_pos,
            history,
            dist,
            cost: dist + heuristic,
            order,
        }
    }
}

// the order doesn't look at the state at all,
// the insertion counter alone makes any two nodes unequal

impl<'a> Ord for SearchNode<'a> {
    fn cmp(&self, other: &Self) -> Ordering {
        // use with Reverse - smaller is better
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.order.cmp(&other.order))
    }
}

impl<'a> PartialOrd for SearchNode<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> PartialEq for SearchNode<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.order == other.order
    }
}

impl<'a> Eq for SearchNode<'a> {}
