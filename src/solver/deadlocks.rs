use crate::data::{Dir, Pos};
use crate::map::GoalMap;

/// Returns true if some box off goal can never move again.
///
/// A box is frozen along an axis if both its neighbors on that axis are walls or boxes
/// already frozen along the same axis. A box frozen along both axes will never move.
/// This misses a lot of deadlocks (e.g. closed areas) - `false` only means we don't know.
pub(crate) fn is_freeze_deadlock(map: &GoalMap, boxes: &[Pos]) -> bool {
    let mut box_grid = map.grid.scratchpad_with_default(None);
    for (i, &b) in boxes.iter().enumerate() {
        box_grid[b] = Some(i);
    }

    let mut frozen_h = vec![false; boxes.len()];
    let mut frozen_v = vec![false; boxes.len()];

    // fixpoint instead of recursion - frozen boxes can depend on each other in cycles
    let mut changed = true;
    while changed {
        changed = false;
        for (i, &b) in boxes.iter().enumerate() {
            let blocked = |pos: Pos, frozen: &[bool]| {
                map.is_wall(pos) || box_grid[pos].map_or(false, |other| frozen[other])
            };

            if !frozen_h[i] && blocked(b + Dir::Left, &frozen_h[..])
                && blocked(b + Dir::Right, &frozen_h[..])
            {
                frozen_h[i] = true;
                changed = true;
            }
            if !frozen_v[i] && blocked(b + Dir::Up, &frozen_v[..])
                && blocked(b + Dir::Down, &frozen_v[..])
            {
                frozen_v[i] = true;
                changed = true;
            }
        }
    }

    boxes
        .iter()
        .enumerate()
        .any(|(i, &b)| frozen_h[i] && frozen_v[i] && !map.is_goal(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::level::Level;

    fn deadlocked(level: &str) -> bool {
        let level: Level = level.parse().unwrap();
        is_freeze_deadlock(&level.map, &level.state.boxes)
    }

    #[test]
    fn walled_in_box() {
        let level = r"
#######
### @ #
#$#  .#
###   #
#######";
        assert!(deadlocked(level));
    }

    #[test]
    fn walled_in_box_on_goal() {
        let level = r"
#######
### @ #
#*#   #
###   #
#######";
        assert!(!deadlocked(level));
    }

    #[test]
    fn box_in_corridor_can_still_move() {
        let level = r"
#######
### @ #
#$#  .#
# #   #
#######";
        assert!(!deadlocked(level));
    }

    #[test]
    fn free_boxes() {
        let level = r"
#######
#  @  #
# $$  #
#  .. #
#######";
        assert!(!deadlocked(level));
    }
}
