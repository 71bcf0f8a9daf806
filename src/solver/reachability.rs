use crate::data::Pos;
use crate::map::GoalMap;
use crate::vec2d::Vec2d;

pub(crate) fn box_grid(map: &GoalMap, boxes: &[Pos]) -> Vec2d<bool> {
    let mut box_grid = map.grid.scratchpad();
    for &b in boxes {
        box_grid[b] = true;
    }
    box_grid
}

/// Cells reachable by the player without pushing any box.
#[derive(Debug)]
pub(crate) struct PlayerArea {
    pub(crate) reachable: Vec2d<bool>,
    /// The top-left reachable cell - all player positions inside the area normalize to it
    pub(crate) canonical_pos: Pos,
}

impl PlayerArea {
    pub(crate) fn new(map: &GoalMap, box_grid: &Vec2d<bool>, player_pos: Pos) -> Self {
        let mut reachable = map.grid.scratchpad();
        reachable[player_pos] = true;
        let mut canonical_pos = player_pos;

        let mut to_visit = vec![player_pos];
        while let Some(cur) = to_visit.pop() {
            if cur < canonical_pos {
                canonical_pos = cur;
            }
            for &next in &cur.neighbors() {
                if map.is_wall(next) || box_grid[next] || reachable[next] {
                    continue;
                }
                reachable[next] = true;
                to_visit.push(next);
            }
        }

        PlayerArea {
            reachable,
            canonical_pos,
        }
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        self.reachable.get(pos) == Some(&true)
    }
}

pub(crate) fn canonical_player_pos(map: &GoalMap, box_grid: &Vec2d<bool>, player_pos: Pos) -> Pos {
    PlayerArea::new(map, box_grid, player_pos).canonical_pos
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::level::Level;

    #[test]
    fn same_area_same_position() {
        let level = r"
#######
#  #  #
#@ # .#
# $#  #
#######";
        let level: Level = level.parse().unwrap();
        let boxes = box_grid(&level.map, &level.state.boxes);

        let canonical = |pos| canonical_player_pos(&level.map, &boxes, pos);
        assert_eq!(canonical(Pos::new(2, 1)), Pos::new(1, 1));
        assert_eq!(canonical(Pos::new(3, 1)), Pos::new(1, 1));
        assert_eq!(canonical(Pos::new(1, 2)), Pos::new(1, 1));

        // separated by a wall
        assert_eq!(canonical(Pos::new(3, 5)), Pos::new(1, 4));
        assert_ne!(canonical(Pos::new(3, 5)), canonical(Pos::new(3, 1)));
    }

    #[test]
    fn boxes_split_areas() {
        let level = r"
#######
#@ $  #
#######
#. # ##
#######";
        let level: Level = level.parse().unwrap();
        let boxes = box_grid(&level.map, &level.state.boxes);

        let left = PlayerArea::new(&level.map, &boxes, Pos::new(1, 2));
        let right = PlayerArea::new(&level.map, &boxes, Pos::new(1, 5));
        assert_eq!(left.canonical_pos, Pos::new(1, 1));
        assert_eq!(right.canonical_pos, Pos::new(1, 4));
        assert!(left.contains(Pos::new(1, 1)));
        assert!(!left.contains(Pos::new(1, 3)));
        assert!(!left.contains(Pos::new(1, 4)));
        assert!(!left.contains(Pos::new(-1, 4)));
        assert!(right.contains(Pos::new(1, 5)));
    }
}
