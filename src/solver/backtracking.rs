use std::collections::VecDeque;

use crate::data::Pos;
use crate::map::GoalMap;
use crate::moves::{Move, Moves};
use crate::state::State;

use super::a_star::Push;
use super::reachability::box_grid;

// Terminology:
// move = changing player position by one cell
// push = a move that changes a box position
// step = a move that doesn't change a box position

/// Turns the pushes found by the search into the full list of moves.
///
/// Between pushes the player walks the shortest path to the cell behind the box.
/// Every push came out of the search so such a path must exist, panics otherwise.
pub(crate) fn reconstruct_moves(map: &GoalMap, initial: &State, pushes: &[Push]) -> Moves {
    let mut moves = Moves::default();
    let mut state = initial.clone();

    for push in pushes {
        debug_assert_eq!(
            state.player_pos, push.player_pos,
            "The search and the replay disagree on where the player is"
        );

        let push_from = push.box_pos - push.dir;
        moves.extend(&player_steps(map, &state, push_from));
        moves.add(Move::new(push.dir, true));

        state = state.with_box_moved(push.box_pos, push.box_pos + push.dir);
    }

    moves
}

/// Shortest walk from the player's position to `dest_pos`, boxes are obstacles.
fn player_steps(map: &GoalMap, state: &State, dest_pos: Pos) -> Moves {
    let src_pos = state.player_pos;
    if src_pos == dest_pos {
        return Moves::default();
    }

    let boxes = box_grid(map, &state.boxes);
    let mut prevs = map.grid.scratchpad_with_default(None);
    prevs[src_pos] = Some(src_pos);

    let mut to_visit = VecDeque::new();
    to_visit.push_back(src_pos);

    'bfs: loop {
        let player_pos = to_visit
            .pop_front()
            .expect("Couldn't find a path to dest_pos");

        for &new_player_pos in &player_pos.neighbors() {
            if map.is_wall(new_player_pos)
                || boxes[new_player_pos]
                || prevs[new_player_pos].is_some()
            {
                continue;
            }

            prevs[new_player_pos] = Some(player_pos);
            if new_player_pos == dest_pos {
                break 'bfs;
            }
            to_visit.push_back(new_player_pos);
        }
    }

    let mut path = vec![dest_pos];
    let mut cur = dest_pos;
    while cur != src_pos {
        cur = prevs[cur].expect("Every visited cell has a predecessor");
        path.push(cur);
    }
    path.reverse();

    let steps = path
        .windows(2)
        .map(|pair| Move::new(pair[0].dir_to(pair[1]), false))
        .collect();
    Moves::new(steps)
}
