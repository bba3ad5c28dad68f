/// The sentinel for "no usable connection".
///
/// Infinity is absorbing under addition, which is exactly what the relaxation
/// steps of both path engines need.
pub const NO_EDGE: f64 = f64::INFINITY;

/// A dense square matrix of edge weights.
///
/// Cells hold the finite weight of the edge joining the row's and the column's
/// vertices, or [`NO_EDGE`] when there is none. Row and column numbers are the
/// positions of vertices in the graph's insertion-ordered sequence, not vertex
/// ids.
///
/// This is a derived view: it is rebuilt from the current vertices and edges
/// by [`Graph::adjacency_matrix`](super::Graph::adjacency_matrix) on every use
/// and never answers "does this edge exist" questions — an edge without a
/// weight is real topologically but infinite here.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl AdjacencyMatrix {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![NO_EDGE; size * size],
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.cells[row * self.size + column]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, value: f64) {
        self.cells[row * self.size + column] = value;
    }

    /// Sets both `(row, column)` and `(column, row)`.
    pub(crate) fn set_symmetric(&mut self, row: usize, column: usize, value: f64) {
        self.set(row, column, value);
        self.set(column, row, value);
    }
}

impl std::ops::Index<(usize, usize)> for AdjacencyMatrix {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &f64 {
        &self.cells[row * self.size + column]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_infinite() {
        let m = AdjacencyMatrix::new(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], NO_EDGE);
            }
        }
    }

    #[test]
    fn symmetric_set_touches_both_cells() {
        let mut m = AdjacencyMatrix::new(2);
        m.set_symmetric(0, 1, 4.0);
        assert_eq!(m[(0, 1)], 4.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m[(0, 0)], NO_EDGE);
    }

    #[test]
    fn rows_are_contiguous() {
        let mut m = AdjacencyMatrix::new(2);
        m.set(1, 0, 7.0);
        m.set(1, 1, 0.0);
        assert_eq!(m.row(1), &[7.0, 0.0]);
    }

    #[test]
    fn empty_matrix() {
        let m = AdjacencyMatrix::new(0);
        assert!(m.is_empty());
        assert_eq!(m.size(), 0);
    }
}
