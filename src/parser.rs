use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{MapCell, Pos};
use crate::level::Level;
use crate::map::GoalMap;
use crate::state::State;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    MultiplePlayers,
    NoPlayer,
    BoxesGoals { boxes: usize, goals: usize },
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
            ParserErr::BoxesGoals { boxes, goals } => write!(
                f,
                "Different number of boxes and goals: {} boxes, {} goals",
                boxes, goals
            ),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches(|c: char| c == '\n' || c == '\r').trim_end();

    let mut grid = Vec::new();
    let mut goals = Vec::new();
    let mut boxes = Vec::new();
    let mut player_pos = None;

    for (r, line) in level.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        let mut line_tiles = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            let pos = Pos::new(r as i32, c as i32);

            let tile = match cur_char {
                '#' => MapCell::Wall,
                'p' | '@' => {
                    if player_pos.is_some() {
                        return Err(ParserErr::MultiplePlayers);
                    }
                    player_pos = Some(pos);
                    MapCell::Empty
                }
                'P' | '+' => {
                    if player_pos.is_some() {
                        return Err(ParserErr::MultiplePlayers);
                    }
                    player_pos = Some(pos);
                    goals.push(pos);
                    MapCell::Goal
                }
                'b' | '$' => {
                    boxes.push(pos);
                    MapCell::Empty
                }
                'B' | '*' => {
                    boxes.push(pos);
                    goals.push(pos);
                    MapCell::Goal
                }
                '.' => {
                    goals.push(pos);
                    MapCell::Goal
                }
                ' ' | '-' | '_' => MapCell::Empty,
                _ => return Err(ParserErr::Pos(r, c)),
            };
            line_tiles.push(tile);
        }
        grid.push(line_tiles);
    }

    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;
    if boxes.len() != goals.len() {
        return Err(ParserErr::BoxesGoals {
            boxes: boxes.len(),
            goals: goals.len(),
        });
    }

    let grid = Vec2d::new(&grid, MapCell::Empty);
    Ok(Level::new(
        GoalMap::new(grid, goals),
        State::new(player_pos, boxes),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_empty() {
        assert_failure("", ParserErr::NoPlayer);
    }

    #[test]
    fn fail_no_player() {
        let level = r"
#####
# $.#
#####
";
        assert_failure(level, ParserErr::NoPlayer);
    }

    #[test]
    fn fail_multiple_players() {
        let level = r"
######
#@$.+#
######
";
        assert_failure(level, ParserErr::MultiplePlayers);
    }

    #[test]
    fn fail_pos() {
        let level = r"
#####
#@X.#
#####
";
        assert_failure(level, ParserErr::Pos(1, 2));
    }

    #[test]
    fn fail_boxes_goals() {
        let level = r"
######
#@$$.#
######
";
        assert_failure(level, ParserErr::BoxesGoals { boxes: 2, goals: 1 });
    }

    #[test]
    fn simplest() {
        let level = r"
#####
#@$.#
#####
";
        let parsed = assert_success(level);
        assert_eq!(parsed.state.player_pos, Pos::new(1, 1));
        assert_eq!(parsed.state.boxes, vec![Pos::new(1, 2)]);
        assert_eq!(parsed.map.goals(), &[Pos::new(1, 3)]);
        assert_eq!((parsed.map.rows(), parsed.map.cols()), (3, 5));
    }

    #[test]
    fn player_and_boxes_on_goals() {
        let level = r"
*###*
#+$ #
*###*
";
        let parsed = assert_success(level);
        assert_eq!(parsed.state.boxes.len(), 5);
        assert_eq!(parsed.map.goals().len(), 5);
        assert!(parsed.map.is_goal(parsed.state.player_pos));
    }

    #[test]
    fn windows_line_endings() {
        let level: Level = "#####\r\n#@$.#\r\n#####\r\n".parse().unwrap();
        assert_eq!(level.to_string(), "#####\n#@$.#\n#####\n");
    }

    #[test]
    fn classic_level_1() {
        let level = r"
    #####
    #   #
    #$  #
  ###  $##
  #  $ $ #
### # ## #   ######
#   # ## #####  ..#
# $  $          ..#
##### ### #@##  ..#
    #     #########
    #######
";
        let parsed = assert_success(level);
        assert_eq!(parsed.state.boxes.len(), 6);
    }

    fn assert_failure(input_level: &str, expected_err: ParserErr) {
        assert_eq!(input_level.parse::<Level>().unwrap_err(), expected_err);
    }

    fn assert_success(input_level: &str) -> Level {
        let level: Level = input_level.parse().unwrap();
        assert_eq!(level.to_string(), input_level.trim_start_matches('\n'));
        level
    }
}
