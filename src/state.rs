use crate::data::Pos;

/// Player position and box positions.
///
/// Boxes are kept sorted so two states with the same boxes compare (and hash) equal
/// no matter in which order the boxes were moved. Inside the solver `player_pos`
/// is normalized to the top-left cell of the player's reachable area.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub player_pos: Pos,
    pub boxes: Vec<Pos>,
}

impl State {
    pub fn new(player_pos: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort();
        State { player_pos, boxes }
    }

    /// A new state after pushing the box at `box_pos` to `dest` - `self` stays untouched.
    /// The player ends up where the box was.
    pub(crate) fn with_box_moved(&self, box_pos: Pos, dest: Pos) -> State {
        let mut boxes = self.boxes.clone();
        let index = boxes
            .binary_search(&box_pos)
            .expect("Moved box must be part of the state");
        boxes[index] = dest;
        boxes.sort();
        State {
            player_pos: box_pos,
            boxes,
        }
    }
}
