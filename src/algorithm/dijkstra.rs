use crate::graph::AdjacencyMatrix;
use ahash::RandomState;
use std::collections::HashMap;

/// Single-source shortest paths over a dense adjacency matrix.
///
/// This is the classic $O(n^2)$ formulation with a linear scan for the next
/// vertex to settle. The input is already a dense matrix, so a priority queue
/// would buy nothing.
///
/// Results are indexed like the matrix: `distances()[i]` is the cost of
/// reaching row `i` from the source (infinite when unreachable), and the path
/// map holds, per reachable target, the row sequence from source to target
/// inclusive. Unreachable targets appear in the distance array but not in the
/// path map.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    source: Option<usize>,
    distances: Vec<f64>,
    paths: HashMap<usize, Vec<usize>, RandomState>,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Dijkstra {
    pub fn new() -> Self {
        Self {
            source: None,
            distances: vec![],
            paths: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// The source row of the last run.
    pub fn source(&self) -> Option<usize> {
        self.source
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn distance(&self, target: usize) -> Option<f64> {
        self.distances.get(target).copied()
    }

    pub fn path(&self, target: usize) -> Option<&[usize]> {
        self.paths.get(&target).map(|p| p.as_slice())
    }

    pub fn paths(&self) -> &HashMap<usize, Vec<usize>, RandomState> {
        &self.paths
    }

    pub fn reset(&mut self) {
        self.source = None;
        self.distances.clear();
        self.paths.clear();
    }

    /// Recomputes distances and paths from the `source` row of `matrix`.
    ///
    /// An out-of-range source or an empty matrix leaves an empty result.
    pub fn find_path(&mut self, source: usize, matrix: &AdjacencyMatrix) {
        self.reset();
        let n = matrix.size();
        if source >= n {
            return;
        }
        self.source = Some(source);

        // Seed distances with the source row and predecessors with the source
        // wherever a direct connection exists.
        let mut distances: Vec<f64> = (0..n)
            .map(|i| if i == source { 0.0 } else { matrix[(source, i)] })
            .collect();
        let mut predecessors: Vec<Option<usize>> = (0..n)
            .map(|i| {
                if matrix[(source, i)].is_finite() {
                    Some(source)
                } else {
                    None
                }
            })
            .collect();
        let mut settled = vec![false; n];
        settled[source] = true;

        for _ in 1..n {
            // Unsettled vertex at minimum distance; the ascending scan with a
            // strict comparison settles ties on the lowest row number.
            let mut next = None;
            let mut best = f64::INFINITY;
            for (i, &d) in distances.iter().enumerate() {
                if !settled[i] && d < best {
                    best = d;
                    next = Some(i);
                }
            }
            let w = match next {
                Some(w) => w,
                None => break, // everything left is unreachable
            };
            settled[w] = true;
            for v in 0..n {
                if settled[v] {
                    continue;
                }
                let via = distances[w] + matrix[(w, v)];
                if via < distances[v] {
                    distances[v] = via;
                    predecessors[v] = Some(w);
                }
            }
        }

        self.paths = build_paths(&predecessors, source);
        self.distances = distances;
    }
}

fn build_paths(
    predecessors: &[Option<usize>],
    source: usize,
) -> HashMap<usize, Vec<usize>, RandomState> {
    let mut paths = HashMap::with_hasher(RandomState::new());
    for target in 0..predecessors.len() {
        if let Some(path) = walk_back(predecessors, source, target) {
            paths.insert(target, path);
        }
    }
    paths
}

/// Walks the predecessor chain from `target` back to `source`.
///
/// A chain that revisits a row is truncated on the spot, and any walk that
/// does not land on the source is discarded; both count as "no valid path".
fn walk_back(
    predecessors: &[Option<usize>],
    source: usize,
    target: usize,
) -> Option<Vec<usize>> {
    let mut path = vec![];
    let mut seen = vec![false; predecessors.len()];
    let mut cursor = Some(target);
    while let Some(i) = cursor {
        if seen[i] {
            break;
        }
        seen[i] = true;
        path.push(i);
        cursor = predecessors[i];
    }
    path.reverse();
    if path.first() == Some(&source) {
        Some(path)
    } else {
        None
    }
}
