use crate::data::Pos;

use super::preprocessing::DistanceMaps;

/// Cost of a box that can't reach a goal, also returned when no assignment avoids such pairs.
pub(crate) const INFINITE: u32 = 1_000_000_000;

/// Square matrix, rows are boxes and columns are goals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CostMatrix {
    data: Vec<u32>,
    size: usize,
}

impl CostMatrix {
    pub(crate) fn new(size: usize) -> Self {
        CostMatrix {
            data: vec![INFINITE; size * size],
            size,
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> u32 {
        debug_assert!(row < self.size && col < self.size);
        self.data[row * self.size + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cost: u32) {
        debug_assert!(row < self.size && col < self.size);
        self.data[row * self.size + col] = cost;
    }
}

/// Lower bound on the number of pushes needed to solve the level from this box configuration.
///
/// Each box gets its own goal (min-cost perfect matching), the cost of a pair
/// is the push distance ignoring other boxes.
pub(crate) fn matching_lower_bound(dist_maps: &DistanceMaps, boxes: &[Pos]) -> u32 {
    debug_assert_eq!(boxes.len(), dist_maps.goal_cnt());

    let mut costs = CostMatrix::new(boxes.len());
    for (bi, &b) in boxes.iter().enumerate() {
        for gi in 0..dist_maps.goal_cnt() {
            if let Some(dist) = dist_maps.dist(gi, b) {
                costs.set(bi, gi, dist);
            }
        }
    }

    let assignment = hungarian(&costs);
    let mut total = 0;
    for (row, &col) in assignment.iter().enumerate() {
        let cost = costs.get(row, col);
        if cost >= INFINITE {
            return INFINITE;
        }
        total += cost;
    }
    total
}

/// Min-cost perfect matching, returns the column assigned to each row.
///
/// Kuhn-Munkres with potentials, O(n^3). Internally 1-indexed with a dummy 0th row/column.
pub(crate) fn hungarian(costs: &CostMatrix) -> Vec<usize> {
    const INF: i64 = i64::max_value() / 4;

    let n = costs.size();

    let mut u = vec![0i64; n + 1];
    let mut v = vec![0i64; n + 1];
    // p[j] = row matched to column j
    let mut p = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];

    for i in 1..=n {
        p[0] = i;
        let mut j0 = 0;
        let mut minv = vec![INF; n + 1];
        let mut used = vec![false; n + 1];

        loop {
            used[j0] = true;
            let i0 = p[j0];
            let mut delta = INF;
            let mut j1 = 0;

            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let cur = i64::from(costs.get(i0 - 1, j - 1)) - u[i0] - v[j];
                if cur < minv[j] {
                    minv[j] = cur;
                    way[j] = j0;
                }
                if minv[j] < delta {
                    delta = minv[j];
                    j1 = j;
                }
            }

            for j in 0..=n {
                if used[j] {
                    u[p[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }

            j0 = j1;
            if p[j0] == 0 {
                break;
            }
        }

        // augment along the alternating path
        loop {
            let j1 = way[j0];
            p[j0] = p[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0; n];
    for j in 1..=n {
        assignment[p[j] - 1] = j - 1;
    }
    assignment
}
