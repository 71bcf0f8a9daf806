use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;
use crate::map::{GoalMap, MapFormatter};
use crate::moves::{Move, Moves};
use crate::solution_formatter::SolutionFormatter;
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayErr {
    /// Index of the move that would walk into a wall
    Wall(usize),
    /// Index of the move that would push a box into a wall or another box
    Blocked(usize),
}

impl Display for ReplayErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ReplayErr::Wall(i) => write!(f, "Move {} walks into a wall", i),
            ReplayErr::Blocked(i) => write!(f, "Move {} pushes a box into an obstacle", i),
        }
    }
}

impl Error for ReplayErr {}

#[derive(Clone)]
pub struct Level {
    pub map: GoalMap,
    pub state: State,
}

impl Level {
    pub fn new(map: GoalMap, state: State) -> Self {
        Level { map, state }
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.map.xsb_with_state(&self.state)
    }

    /// Plays `moves` from the initial state.
    ///
    /// The player can push a box directly in front of it if the cell behind it is free.
    /// Whether a move is marked as push is ignored - only the layout decides.
    pub fn replay(&self, moves: &Moves) -> Result<State, ReplayErr> {
        let mut state = self.state.clone();
        for (i, mov) in moves.iter().enumerate() {
            state = self.step(&state, mov.dir).map_err(|err| err.at(i))?.0;
        }
        Ok(state)
    }

    pub fn format_solution<'a>(
        &'a self,
        moves: &'a Moves,
        include_steps: bool,
    ) -> SolutionFormatter<'a> {
        SolutionFormatter::new(self, moves, include_steps)
    }

    /// One move of the player, returns the new state and what the move was.
    pub(crate) fn step(&self, state: &State, dir: Dir) -> Result<(State, Move), ReplayErr> {
        let new_player_pos = state.player_pos + dir;
        if self.map.is_wall(new_player_pos) {
            return Err(ReplayErr::Wall(0));
        }

        if state.boxes.binary_search(&new_player_pos).is_ok() {
            let push_dest = new_player_pos + dir;
            if self.map.is_wall(push_dest) || state.boxes.binary_search(&push_dest).is_ok() {
                return Err(ReplayErr::Blocked(0));
            }
            let new_state = state.with_box_moved(new_player_pos, push_dest);
            Ok((new_state, Move::new(dir, true)))
        } else {
            let new_state = State {
                player_pos: new_player_pos,
                boxes: state.boxes.clone(),
            };
            Ok((new_state, Move::new(dir, false)))
        }
    }
}

impl ReplayErr {
    fn at(self, index: usize) -> ReplayErr {
        match self {
            ReplayErr::Wall(_) => ReplayErr::Wall(index),
            ReplayErr::Blocked(_) => ReplayErr::Blocked(index),
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}
