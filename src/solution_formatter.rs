use std::fmt::{self, Debug, Display, Formatter};

use crate::level::Level;
use crate::moves::Moves;

/// Renders the level after every push (or every move with `include_steps`).
#[derive(Clone, Copy)]
pub struct SolutionFormatter<'a> {
    level: &'a Level,
    moves: &'a Moves,
    include_steps: bool,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(level: &'a Level, moves: &'a Moves, include_steps: bool) -> Self {
        Self {
            level,
            moves,
            include_steps,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.level.map.xsb_with_state(&self.level.state))?;

        let mut last_state = self.level.state.clone();
        for (i, mov) in self.moves.iter().enumerate() {
            let (new_state, real_move) = match self.level.step(&last_state, mov.dir) {
                Ok(res) => res,
                Err(_) => return writeln!(f, "Invalid move {}: {}", i, mov),
            };
            if real_move.is_push || self.include_steps {
                writeln!(f, "{}", self.level.map.xsb_with_state(&new_state))?;
            }
            last_state = new_state;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
