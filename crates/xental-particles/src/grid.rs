//! Uniform bucket grid for neighbor lookups on large particle counts.

use std::collections::HashMap;

use xental_core::Vec2;

/// Buckets particle indices by cell.
///
/// With `cell_size` at least the query distance, every point closer than
/// that distance lies in the 3x3 block of cells around the query point.
#[derive(Debug)]
pub struct SpatialGrid {
    cell_size: f32,
    cells: HashMap<(i32, i32), Vec<usize>>,
}

impl SpatialGrid {
    /// Build a grid over the given positions.
    pub fn build(positions: impl IntoIterator<Item = Vec2>, cell_size: f32) -> Self {
        let mut cells: HashMap<(i32, i32), Vec<usize>> = HashMap::new();
        for (index, position) in positions.into_iter().enumerate() {
            cells
                .entry(cell_of(position, cell_size))
                .or_default()
                .push(index);
        }
        Self { cell_size, cells }
    }

    /// Collect, in ascending order, the indices greater than `after` that
    /// share a cell neighborhood with `point`.
    pub fn candidates_after(&self, point: Vec2, after: usize, out: &mut Vec<usize>) {
        out.clear();
        let (cx, cy) = cell_of(point, self.cell_size);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if let Some(bucket) = self.cells.get(&(cx + dx, cy + dy)) {
                    out.extend(bucket.iter().copied().filter(|&i| i > after));
                }
            }
        }
        out.sort_unstable();
    }
}

fn cell_of(p: Vec2, cell_size: f32) -> (i32, i32) {
    (
        (p.x / cell_size).floor() as i32,
        (p.y / cell_size).floor() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_cover_neighbors() {
        let points = [
            Vec2::new(5.0, 5.0),
            Vec2::new(95.0, 5.0),
            Vec2::new(105.0, 5.0),
            Vec2::new(350.0, 350.0),
            Vec2::new(-20.0, 5.0),
        ];
        let grid = SpatialGrid::build(points, 100.0);
        let mut out = Vec::new();

        grid.candidates_after(points[0], 0, &mut out);
        assert_eq!(out, vec![1, 2, 4]);

        grid.candidates_after(points[3], 3, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_candidates_skip_earlier_indices() {
        let points = [Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0)];
        let grid = SpatialGrid::build(points, 100.0);
        let mut out = Vec::new();
        grid.candidates_after(points[1], 1, &mut out);
        assert_eq!(out, vec![2]);
    }
}
