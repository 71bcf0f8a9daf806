use std::collections::VecDeque;

use crate::data::{Pos, DIRECTIONS};
use crate::map::GoalMap;
use crate::vec2d::Vec2d;

/// Cells from which a box can't be pushed to any goal even if it was the only box.
///
/// Boxes are "pulled" away from each goal - a box can get to a goal from any cell
/// it can be pulled to. Other boxes are ignored so this is only an approximation,
/// but pushing a box onto a dead cell always loses.
#[inline(never)] // this is called only once and this way it's easier to see in callgrind
pub(crate) fn find_dead_cells(map: &GoalMap) -> Vec2d<bool> {
    let mut alive = map.grid.scratchpad();

    for &goal in &map.goals {
        let mut visited = map.grid.scratchpad();
        visited[goal] = true;

        let mut to_visit = VecDeque::new();
        to_visit.push_back(goal);

        while let Some(box_pos) = to_visit.pop_front() {
            for &dir in &DIRECTIONS {
                // the box got here by being pushed in `dir`
                let box_from = box_pos - dir;
                let player_was_at = box_from - dir;
                if map.is_wall(box_from) || map.is_wall(player_was_at) || visited[box_from] {
                    continue;
                }
                visited[box_from] = true;
                to_visit.push_back(box_from);
            }
        }

        for pos in visited.positions() {
            if visited[pos] {
                alive[pos] = true;
            }
        }
    }

    let mut dead_cells = map.grid.scratchpad();
    for pos in dead_cells.positions() {
        dead_cells[pos] = !map.is_wall(pos) && !alive[pos];
    }
    dead_cells
}

/// Distances from every goal to every cell, ignoring boxes.
///
/// Any sequence of pushes moves the box at least this far so it's a lower bound.
/// `None` means the goal can't be reached from that cell at all.
#[derive(Debug, Clone)]
pub(crate) struct DistanceMaps {
    // same order as `GoalMap::goals`
    dists: Vec<Vec2d<Option<u32>>>,
}

impl DistanceMaps {
    #[inline(never)]
    pub(crate) fn new(map: &GoalMap) -> Self {
        let dists = map.goals.iter().map(|&goal| Self::bfs(map, goal)).collect();
        DistanceMaps { dists }
    }

    fn bfs(map: &GoalMap, goal: Pos) -> Vec2d<Option<u32>> {
        let mut dists = map.grid.scratchpad();
        dists[goal] = Some(0);

        let mut to_visit = VecDeque::new();
        to_visit.push_back((goal, 0));

        while let Some((pos, dist)) = to_visit.pop_front() {
            for &next in &pos.neighbors() {
                if map.is_wall(next) || dists[next].is_some() {
                    continue;
                }
                dists[next] = Some(dist + 1);
                to_visit.push_back((next, dist + 1));
            }
        }

        dists
    }

    pub(crate) fn goal_cnt(&self) -> usize {
        self.dists.len()
    }

    pub(crate) fn dist(&self, goal_index: usize, pos: Pos) -> Option<u32> {
        self.dists[goal_index].get(pos).cloned().unwrap_or(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::level::Level;

    #[test]
    fn dead_cells_corridor() {
        let level = r"
#####
##@##
##$##
#  .#
#####";
        let level: Level = level.parse().unwrap();
        let expected = r"
00000
00100
00000
01000
00000
"
        .trim_start_matches('\n');
        assert_eq!(find_dead_cells(&level.map).to_string(), expected);
    }

    #[test]
    fn dead_cells_room_with_goal_in_corner() {
        let level = r"
######
#.   #
#  $ #
#   @#
######";
        let level: Level = level.parse().unwrap();

        // the goal can only be reached by pushing up or left
        // so the right column and the bottom row are dead
        let expected = r"
000000
000010
000010
011110
000000
"
        .trim_start_matches('\n');
        assert_eq!(find_dead_cells(&level.map).to_string(), expected);
    }

    #[test]
    fn dead_cells_outside_walls() {
        let level = r"
  ####
  #@.#
  #$ #
  ####
      ";
        let level: Level = level.parse().unwrap();
        let dead_cells = find_dead_cells(&level.map);

        // empty cells outside the level can never be reached
        assert!(dead_cells[Pos::new(0, 0)]);
        assert!(dead_cells[Pos::new(2, 1)]);
        // walls and goals are never dead
        assert!(!dead_cells[Pos::new(0, 2)]);
        assert!(!dead_cells[Pos::new(1, 4)]);
        // the player can't get behind the box
        assert!(dead_cells[Pos::new(1, 3)]);
    }

    #[test]
    fn distances_one_goal() {
        let level = r"
#######
#  @###
# #$###
#    .#
#######";
        let level: Level = level.parse().unwrap();

        let expected = concat!(
            "None    None    None    None    None    None None \n",
            "None Some(6) Some(5) Some(4)    None    None None \n",
            "None Some(5)    None Some(3)    None    None None \n",
            "None Some(4) Some(3) Some(2) Some(1) Some(0) None \n",
            "None    None    None    None    None    None None \n",
        );

        let dist_maps = DistanceMaps::new(&level.map);
        assert_eq!(dist_maps.goal_cnt(), 1);
        assert_eq!(format!("{:?}", dist_maps.dists[0]), expected);
        assert_eq!(dist_maps.dist(0, Pos::new(2, 3)), Some(3));
        assert_eq!(dist_maps.dist(0, Pos::new(0, 0)), None);
        assert_eq!(dist_maps.dist(0, Pos::new(-1, 0)), None);
    }

    #[test]
    fn distances_separated_rooms() {
        let level = r"
########
#@$ #. #
#  .#$ #
########";
        let level: Level = level.parse().unwrap();
        let dist_maps = DistanceMaps::new(&level.map);

        let left_goal = level.map.goals().iter().position(|&g| g == Pos::new(2, 3)).unwrap();
        let right_goal = level.map.goals().iter().position(|&g| g == Pos::new(1, 5)).unwrap();

        assert_eq!(dist_maps.dist(left_goal, Pos::new(1, 1)), Some(3));
        assert_eq!(dist_maps.dist(left_goal, Pos::new(1, 6)), None);
        assert_eq!(dist_maps.dist(right_goal, Pos::new(2, 5)), Some(1));
        assert_eq!(dist_maps.dist(right_goal, Pos::new(1, 2)), None);
    }
}
