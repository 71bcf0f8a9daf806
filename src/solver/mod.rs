mod a_star;
mod backtracking;
mod deadlocks;
mod heuristic;
mod preprocessing;
mod reachability;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::{debug, info, trace};
use typed_arena::Arena;

use crate::config::Config;
use crate::data::{Pos, DIRECTIONS};
use crate::level::Level;
use crate::map::GoalMap;
use crate::moves::Moves;
use crate::state::State;
use crate::vec2d::Vec2d;
use crate::Solve;

use self::a_star::{Push, PushEvent, SearchNode};
use self::deadlocks::is_freeze_deadlock;
use self::heuristic::matching_lower_bound;
use self::preprocessing::{find_dead_cells, DistanceMaps};
use self::reachability::{box_grid, canonical_player_pos, PlayerArea};

pub use self::a_star::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    /// Gave up after expanding this many unique states
    StateLimit(usize),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::StateLimit(cnt) => write!(
                f,
                "State limit reached - visited {} states without finding a solution",
                cnt
            ),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// `None` if the level has no solution
    pub moves: Option<Moves>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats) -> Self {
        Self { moves, stats }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => {
                writeln!(f, "{}", moves)?;
                writeln!(f, "Moves: {}", moves.move_cnt())?;
                writeln!(f, "Pushes: {}", moves.push_cnt())?;
            }
        }
        write!(f, "{}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, config: &Config) -> Result<SolverOk, SolverErr> {
        debug!("Processing level...");
        let solver = Solver::new(&self.map);
        debug!("Processed level");

        solver.search(&self.state, config)
    }
}

/// Everything about the level that doesn't change during the search.
struct Solver<'a> {
    map: &'a GoalMap,
    dead_cells: Vec2d<bool>,
    dist_maps: DistanceMaps,
}

impl<'a> Solver<'a> {
    fn new(map: &'a GoalMap) -> Self {
        let dead_cells = find_dead_cells(map);
        trace!("Dead cells:\n{}", dead_cells);
        Solver {
            map,
            dead_cells,
            dist_maps: DistanceMaps::new(map),
        }
    }

    fn heuristic(&self, boxes: &[Pos]) -> u32 {
        matching_lower_bound(&self.dist_maps, boxes)
    }

    fn canonical_state(&self, player_pos: Pos, boxes: Vec<Pos>) -> State {
        let grid = box_grid(self.map, &boxes);
        let player_pos = canonical_player_pos(self.map, &grid, player_pos);
        State::new(player_pos, boxes)
    }

    fn search(&self, initial: &State, config: &Config) -> Result<SolverOk, SolverErr> {
        debug!("Search called");

        let mut stats = Stats::new();

        let states = Arena::new();
        let events: Arena<PushEvent<'_>> = Arena::new();
        let mut closed: FnvHashSet<&State> = FnvHashSet::default();
        let mut to_visit = BinaryHeap::new();
        let mut order = 0;

        let start_state: &State =
            states.alloc(self.canonical_state(initial.player_pos, initial.boxes.clone()));
        let start = SearchNode::new(
            start_state,
            initial.player_pos,
            None,
            0,
            self.heuristic(&start_state.boxes),
            order,
        );
        order += 1;
        stats.add_created(&start);
        to_visit.push(Reverse(start));

        while let Some(Reverse(cur_node)) = to_visit.pop() {
            if closed.contains(cur_node.state) {
                stats.add_reached_duplicate(&cur_node);
                continue;
            }
            if stats.add_unique_visited(&cur_node) {
                debug!("Visited new depth: {}", cur_node.dist);
                if config.print_status {
                    println!("Visited new depth: {}", cur_node.dist);
                    println!("{:?}", stats);
                }
            }

            // insert here and not as soon as we discover it
            // otherwise a longer path could close it first
            closed.insert(cur_node.state);

            if self.map.is_solved(cur_node.state) {
                debug!("Solved, backtracking path");
                let pushes = cur_node.history.map(PushEvent::pushes).unwrap_or_default();
                let moves = backtracking::reconstruct_moves(self.map, initial, &pushes);
                info!(
                    "Found solution with {} pushes after visiting {} states",
                    moves.push_cnt(),
                    stats.total_unique_visited()
                );
                return Ok(SolverOk::new(Some(moves), stats));
            }

            // a solved state is still accepted when popped at the limit
            if let Some(max_visited) = config.max_visited {
                if closed.len() > max_visited {
                    info!("Reached the state limit ({})", max_visited);
                    return Err(SolverErr::StateLimit(max_visited));
                }
            }

            let boxes = &cur_node.state.boxes;
            let grid = box_grid(self.map, boxes);
            let area = PlayerArea::new(self.map, &grid, cur_node.player_pos);

            for &box_pos in boxes {
                for &dir in &DIRECTIONS {
                    let push_from = box_pos - dir;
                    let push_to = box_pos + dir;
                    if !area.contains(push_from)
                        || self.map.is_wall(push_to)
                        || grid[push_to]
                        || self.dead_cells[push_to]
                    {
                        continue;
                    }

                    let moved = cur_node.state.with_box_moved(box_pos, push_to);
                    if is_freeze_deadlock(self.map, &moved.boxes) {
                        continue;
                    }

                    let new_state = self.canonical_state(box_pos, moved.boxes);
                    if closed.contains(&new_state) {
                        continue;
                    }

                    let h = self.heuristic(&new_state.boxes);
                    let event: &PushEvent<'_> = events.alloc(PushEvent {
                        prev: cur_node.history,
                        push: Push {
                            player_pos: cur_node.player_pos,
                            box_pos,
                            dir,
                        },
                    });
                    let next_node = SearchNode::new(
                        states.alloc(new_state),
                        box_pos,
                        Some(event),
                        cur_node.dist + 1,
                        h,
                        order,
                    );
                    order += 1;
                    stats.add_created(&next_node);
                    to_visit.push(Reverse(next_node));
                }
            }
        }

        info!(
            "No solution after visiting {} states",
            stats.total_unique_visited()
        );
        Ok(SolverOk::new(None, stats))
    }
}
