use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Contents, MapCell, Pos};
use crate::state::State;
use crate::vec2d::Vec2d;

/// Renders a map together with a state in XSB format.
#[derive(Clone, Copy)]
pub struct MapFormatter<'a> {
    map: &'a GoalMap,
    state: Option<&'a State>,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(map: &'a GoalMap, state: Option<&'a State>) -> Self {
        Self { map, state }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut state_grid = self.map.grid.scratchpad_with_default(Contents::Empty);
        if let Some(state) = self.state {
            for &b in &state.boxes {
                state_grid[b] = Contents::Box;
            }
            state_grid[state.player_pos] = Contents::Player;
        }
        self.map.write(&state_grid, f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Walls and goals - everything that doesn't change while solving.
#[derive(Clone)]
pub struct GoalMap {
    pub(crate) grid: Vec2d<MapCell>,
    pub(crate) goals: Vec<Pos>,
}

impl GoalMap {
    pub(crate) fn new(grid: Vec2d<MapCell>, goals: Vec<Pos>) -> Self {
        GoalMap { grid, goals }
    }

    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }

    /// Anything outside the grid counts as wall.
    pub fn is_wall(&self, pos: Pos) -> bool {
        self.grid.get(pos).map_or(true, |&cell| cell == MapCell::Wall)
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Goal)
    }

    /// There's the same number of boxes and goals so this also means every goal is covered.
    pub fn is_solved(&self, state: &State) -> bool {
        state.boxes.iter().all(|&b| self.is_goal(b))
    }

    pub fn xsb_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(self, Some(state))
    }

    fn write(&self, state_grid: &Vec2d<Contents>, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.grid.rows() {
            // don't print trailing empty cells to match the input level strings
            let last_non_empty = (0..self.grid.cols())
                .map(|c| Pos::new(r, c))
                .filter(|&pos| {
                    self.grid[pos] != MapCell::Empty || state_grid[pos] != Contents::Empty
                })
                .map(|pos| pos.c + 1)
                .last()
                .unwrap_or(0);

            for c in 0..last_non_empty {
                let pos = Pos::new(r, c);
                let symbol = match (self.grid[pos], state_grid[pos]) {
                    (MapCell::Wall, _) => '#',
                    (MapCell::Empty, Contents::Empty) => ' ',
                    (MapCell::Empty, Contents::Box) => '$',
                    (MapCell::Empty, Contents::Player) => '@',
                    (MapCell::Goal, Contents::Empty) => '.',
                    (MapCell::Goal, Contents::Box) => '*',
                    (MapCell::Goal, Contents::Player) => '+',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(self, None))
    }
}

impl Debug for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Pos;
    use crate::level::Level;

    #[test]
    fn formatting_map() {
        let xsb_level = r"
*###*
#@$.#
*###*#
"
        .trim_start_matches('\n');
        let xsb_map = "
.###.
#  .#
.###.#
"
        .trim_start_matches('\n');

        let level: Level = xsb_level.parse().unwrap();
        assert_eq!(format!("{}", level.map), xsb_map);
        assert_eq!(format!("{:?}", level.map), xsb_map);
        assert_eq!(level.map.xsb_with_state(&level.state).to_string(), xsb_level);
    }

    #[test]
    fn walls_and_goals() {
        let level: Level = "#####\n#@$.#\n#####".parse().unwrap();
        let map = &level.map;
        assert!(map.is_wall(Pos::new(0, 0)));
        assert!(map.is_wall(Pos::new(-1, 2)));
        assert!(map.is_wall(Pos::new(1, 7)));
        assert!(!map.is_wall(Pos::new(1, 2)));
        assert!(map.is_goal(Pos::new(1, 3)));
        assert!(!map.is_solved(&level.state));
    }
}
