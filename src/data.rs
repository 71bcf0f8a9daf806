use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MapCell {
    Empty,
    Wall,
    Goal,
}

impl Display for MapCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MapCell::Empty => write!(f, " "),
            MapCell::Wall => write!(f, "#"),
            MapCell::Goal => write!(f, "."),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Box,
    Player,
}

/// Grid coordinates. The derived ordering is by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }

    /// In the same order as `DIRECTIONS`
    pub(crate) fn neighbors(self) -> [Pos; 4] {
        [
            self + DIRECTIONS[0],
            self + DIRECTIONS[1],
            self + DIRECTIONS[2],
            self + DIRECTIONS[3],
        ]
    }

    pub(crate) fn dir_to(self, other: Pos) -> Dir {
        match (other.r - self.r, other.c - self.c) {
            (-1, 0) => Dir::Up,
            (1, 0) => Dir::Down,
            (0, -1) => Dir::Left,
            (0, 1) => Dir::Right,
            _ => panic!("Positions {:?} and {:?} are not adjacent", self, other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Every loop over directions uses this order so results are deterministic.
pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    pub fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }
}

impl Dir {
    /// Lowercase LURD letter
    pub(crate) fn to_char(self) -> char {
        match self {
            Dir::Up => 'u',
            Dir::Down => 'd',
            Dir::Left => 'l',
            Dir::Right => 'r',
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos::new(self.r + dr, self.c + dc)
    }
}

impl Sub<Dir> for Pos {
    type Output = Pos;

    fn sub(self, dir: Dir) -> Pos {
        self + dir.inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let mut positions = vec![Pos::new(2, 0), Pos::new(1, 5), Pos::new(1, 1)];
        positions.sort();
        assert_eq!(positions, vec![Pos::new(1, 1), Pos::new(1, 5), Pos::new(2, 0)]);
    }

    #[test]
    fn moving_around() {
        let pos = Pos::new(3, 3);
        for &dir in &DIRECTIONS {
            assert_eq!(pos + dir - dir, pos);
            assert_eq!(pos.dir_to(pos + dir), dir);
            assert_eq!(pos + dir.inverse(), pos - dir);
        }
        assert_eq!(
            DIRECTIONS.iter().map(|d| d.to_string()).collect::<String>(),
            "udlr"
        );
        assert_eq!(
            pos.neighbors(),
            [Pos::new(2, 3), Pos::new(4, 3), Pos::new(3, 2), Pos::new(3, 4)]
        );
    }
}
