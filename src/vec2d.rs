use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: i32,
    cols: i32,
}

impl<T> Vec2d<T> {
    pub(crate) fn rows(&self) -> i32 {
        self.rows
    }

    pub(crate) fn cols(&self) -> i32 {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.c >= 0 && pos.r < self.rows && pos.c < self.cols
    }

    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self[pos])
        } else {
            None
        }
    }

    /// Row-major, doesn't borrow the grid so it's fine to mutate it while iterating.
    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |r| (0..cols).map(move |c| Pos::new(r, c)))
    }

    pub(crate) fn scratchpad<U: Default + Clone>(&self) -> Vec2d<U> {
        self.scratchpad_with_default(U::default())
    }

    pub(crate) fn scratchpad_with_default<U: Clone>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn index_of(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{:?} is out of bounds", pos);
        pos.r as usize * self.cols as usize + pos.c as usize
    }
}

impl<T: Clone> Vec2d<T> {
    /// Pads shorter rows with `pad`.
    pub(crate) fn new(grid: &[Vec<T>], pad: T) -> Self {
        let max_cols = grid.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut data = Vec::with_capacity(grid.len() * max_cols);
        for row in grid {
            data.extend_from_slice(row);
            for _ in row.len()..max_cols {
                data.push(pad.clone());
            }
        }
        Vec2d {
            data,
            rows: grid.len() as i32,
            cols: max_cols as i32,
        }
    }
}

impl Display for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for row in self.data.chunks(self.cols as usize) {
            for &cell in row {
                write!(f, "{}", if cell { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }

        // align columns so distance maps are readable
        let cells: Vec<String> = self.data.iter().map(|cell| format!("{:?}", cell)).collect();
        let mut widths = vec![0; self.cols as usize];
        for (i, cell) in cells.iter().enumerate() {
            let col = i % self.cols as usize;
            widths[col] = widths[col].max(cell.len());
        }

        for row in cells.chunks(self.cols as usize) {
            for (cell, width) in row.iter().zip(&widths) {
                write!(f, "{:>width$} ", cell, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &Self::Output {
        let index = self.index_of(pos);
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        let index = self.index_of(pos);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_ragged_rows() {
        let grid = Vec2d::new(&[vec![true], vec![true, true, true], vec![]], false);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.to_string(), "100\n111\n000\n");
    }

    #[test]
    fn bounds() {
        let grid = Vec2d::new(&[vec![1, 2], vec![3, 4]], 0);
        assert_eq!(grid.get(Pos::new(1, 0)), Some(&3));
        assert_eq!(grid.get(Pos::new(-1, 0)), None);
        assert_eq!(grid.get(Pos::new(0, 2)), None);
        assert_eq!(grid.positions().count(), 4);
    }

    #[test]
    fn debug_alignment() {
        let grid = Vec2d::new(&[vec![Some(10), None], vec![Some(1), Some(2)]], None);
        let expected = "Some(10)    None \n Some(1) Some(2) \n";
        assert_eq!(format!("{:?}", grid), expected);
    }
}
