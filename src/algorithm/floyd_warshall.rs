use crate::graph::AdjacencyMatrix;
use ahash::RandomState;
use std::collections::HashMap;

/// All-pairs shortest paths by Floyd-Warshall.
///
/// The distance table starts as a copy of the adjacency matrix and is relaxed
/// through every intermediate row `k`; `k` must be the outermost loop. A
/// next-hop table tracks reconstruction: `next[i][j]` is the row that follows
/// `i` on the best known path to `j`.
///
/// Edge weights are non-negative by construction, so there is no negative
/// cycle to detect.
///
/// The path map holds every ordered pair `(i, j)` with `i != j` and a finite
/// distance; there are no self-paths.
#[derive(Debug, Clone)]
pub struct FloydWarshall {
    distances: Vec<Vec<f64>>,
    paths: HashMap<(usize, usize), Vec<usize>, RandomState>,
}

impl Default for FloydWarshall {
    fn default() -> Self {
        Self::new()
    }
}

impl FloydWarshall {
    pub fn new() -> Self {
        Self {
            distances: vec![],
            paths: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// The full distance table, row-major, indexed like the matrix.
    pub fn distances(&self) -> &[Vec<f64>] {
        &self.distances
    }

    pub fn distance(&self, source: usize, target: usize) -> Option<f64> {
        self.distances.get(source)?.get(target).copied()
    }

    pub fn path(&self, source: usize, target: usize) -> Option<&[usize]> {
        self.paths.get(&(source, target)).map(|p| p.as_slice())
    }

    pub fn paths(&self) -> &HashMap<(usize, usize), Vec<usize>, RandomState> {
        &self.paths
    }

    pub fn reset(&mut self) {
        self.distances.clear();
        self.paths.clear();
    }

    /// Recomputes the distance table and all paths over `matrix`.
    pub fn find_path(&mut self, matrix: &AdjacencyMatrix) {
        self.reset();
        let n = matrix.size();
        self.distances = (0..n).map(|i| matrix.row(i).to_vec()).collect();
        let mut next: Vec<Vec<Option<usize>>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if matrix[(i, j)].is_finite() {
                            Some(j)
                        } else {
                            None
                        }
                    })
                    .collect()
            })
            .collect();

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let via = self.distances[i][k] + self.distances[k][j];
                    if via < self.distances[i][j] {
                        self.distances[i][j] = via;
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                if let Some(path) = walk(&next, i, j) {
                    self.paths.insert((i, j), path);
                }
            }
        }
    }
}

/// Follows the next-hop table from `source` to `target`.
///
/// The walk is bounded by the table size; a longer walk means the table is
/// malformed and the pair is treated as having no path.
fn walk(next: &[Vec<Option<usize>>], source: usize, target: usize) -> Option<Vec<usize>> {
    next[source][target]?;
    let mut path = vec![source];
    let mut cursor = source;
    while cursor != target {
        cursor = next[cursor][target]?;
        path.push(cursor);
        if path.len() > next.len() {
            return None;
        }
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Dijkstra;
    use crate::graph::Clicks;
    use quickcheck_macros::quickcheck;

    fn matrix_of(clicks: &Clicks) -> AdjacencyMatrix {
        clicks.build().0.adjacency_matrix()
    }

    #[test]
    fn triangle_takes_the_detour() {
        let m = matrix_of(&Clicks {
            vertex_count: 3,
            edges: vec![(0, 1, Some(1)), (1, 2, Some(2)), (0, 2, Some(5))],
        });
        let mut engine = FloydWarshall::new();
        engine.find_path(&m);
        assert_eq!(engine.distance(0, 2), Some(3.0));
        assert_eq!(engine.path(0, 2), Some(&[0, 1, 2][..]));
        assert_eq!(engine.path(2, 0), Some(&[2, 1, 0][..]));
        for i in 0..3 {
            assert_eq!(engine.distance(i, i), Some(0.0));
        }
    }

    #[test]
    fn long_chains_reconstruct_hop_by_hop() {
        let m = matrix_of(&Clicks {
            vertex_count: 4,
            edges: vec![(0, 1, Some(1)), (1, 2, Some(1)), (2, 3, Some(1))],
        });
        let mut engine = FloydWarshall::new();
        engine.find_path(&m);
        assert_eq!(engine.distance(0, 3), Some(3.0));
        assert_eq!(engine.path(0, 3), Some(&[0, 1, 2, 3][..]));
    }

    #[test]
    fn there_are_no_self_paths() {
        let m = matrix_of(&Clicks {
            vertex_count: 2,
            edges: vec![(0, 1, Some(1))],
        });
        let mut engine = FloydWarshall::new();
        engine.find_path(&m);
        assert_eq!(engine.path(0, 0), None);
        assert_eq!(engine.path(1, 1), None);
        assert_eq!(engine.paths().len(), 2);
    }

    #[test]
    fn disconnected_pairs_have_no_path() {
        let m = matrix_of(&Clicks {
            vertex_count: 3,
            edges: vec![(0, 1, Some(4))],
        });
        let mut engine = FloydWarshall::new();
        engine.find_path(&m);
        assert_eq!(engine.distance(0, 2), Some(f64::INFINITY));
        assert_eq!(engine.path(0, 2), None);
    }

    #[test]
    fn empty_matrix_yields_an_empty_result() {
        let mut engine = FloydWarshall::new();
        engine.find_path(&AdjacencyMatrix::new(0));
        assert!(engine.distances().is_empty());
        assert!(engine.paths().is_empty());
    }

    #[test]
    fn reset_clears_a_previous_run() {
        let m = matrix_of(&Clicks {
            vertex_count: 2,
            edges: vec![(0, 1, Some(1))],
        });
        let mut engine = FloydWarshall::new();
        engine.find_path(&m);
        engine.reset();
        assert!(engine.distances().is_empty());
        assert!(engine.paths().is_empty());
    }

    #[quickcheck]
    fn agrees_with_dijkstra_from_every_source(clicks: Clicks) {
        let (graph, _) = clicks.build();
        let m = graph.adjacency_matrix();
        let mut all_pairs = FloydWarshall::new();
        all_pairs.find_path(&m);
        for source in 0..m.size() {
            let mut single = Dijkstra::new();
            single.find_path(source, &m);
            // The diagonal is left out: Dijkstra pins its source at 0 while
            // the table keeps the matrix diagonal, which is infinite for a
            // vertex without any weighted edge.
            for target in (0..m.size()).filter(|&t| t != source) {
                assert_eq!(
                    all_pairs.distance(source, target),
                    single.distance(target),
                    "source {} target {}",
                    source,
                    target
                );
            }
        }
    }

    #[quickcheck]
    fn every_path_costs_its_distance(clicks: Clicks) {
        let (graph, _) = clicks.build();
        let m = graph.adjacency_matrix();
        let mut engine = FloydWarshall::new();
        engine.find_path(&m);
        for (&(source, target), path) in engine.paths() {
            assert_eq!(path.first(), Some(&source));
            assert_eq!(path.last(), Some(&target));
            let cost: f64 = path.windows(2).map(|hop| m[(hop[0], hop[1])]).sum();
            assert_eq!(cost, engine.distance(source, target).unwrap());
        }
    }
}
