use crate::algorithm::{Dijkstra, FloydWarshall};
use crate::graph::*;
use ahash::RandomState;
use bimap::BiHashMap;
use std::collections::BTreeSet;

/// What the canvas is currently doing.
///
/// One mode at a time; the four booleans the mouse handlers used to juggle
/// collapse into this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    AddingVertex,
    AddingEdge,
    RunningDijkstra,
    RunningFloyd,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Idle
    }
}

/// The graph a user draws: vertices, edges, the pending first click of an
/// edge, and one engine of each kind.
///
/// The vertex sequence is kept in insertion order and doubles as the index
/// space of the adjacency matrix and of both engines' results. Vertex ids are
/// handed out as `max(existing) + 1`, or `1` for the first vertex, so deleting
/// vertices leaves gaps.
///
/// Everything here is single-threaded by design: one mutation or one full
/// engine run at a time. Callers that want to share a `Graph` across threads
/// must put it behind their own mutual-exclusion boundary.
#[derive(Clone)]
pub struct Graph<P = ()> {
    vertices: Vec<Vertex<P>>,
    edges: Vec<Edge>,
    pending: Option<VertexId>,
    eid_factory: EdgeIdFactory,
    mode: Mode,
    dijkstra: Dijkstra,
    floyd: FloydWarshall,
}

impl<P> Default for Graph<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Graph<P> {
    pub fn new() -> Self {
        Self {
            vertices: vec![],
            edges: vec![],
            pending: None,
            eid_factory: EdgeIdFactory::new(),
            mode: Mode::Idle,
            dijkstra: Dijkstra::new(),
            floyd: FloydWarshall::new(),
        }
    }

    /// Vertices in insertion order. Positions in this slice are the row and
    /// column numbers of the adjacency matrix.
    pub fn vertices(&self) -> &[Vertex<P>] {
        &self.vertices
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// The vertex buffered by the first click of the two-click edge protocol.
    pub fn pending_selection(&self) -> Option<VertexId> {
        self.pending
    }

    /// Drops the buffered first click, if any.
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    pub fn vertex(&self, v: VertexId) -> Option<&Vertex<P>> {
        self.vertices.iter().find(|x| x.id() == v)
    }

    fn vertex_mut(&mut self, v: VertexId) -> Option<&mut Vertex<P>> {
        self.vertices.iter_mut().find(|x| x.id() == v)
    }

    pub fn edge(&self, e: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|x| x.id() == e)
    }

    fn edge_mut(&mut self, e: EdgeId) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|x| x.id() == e)
    }

    /// The matrix row/column number of `v`.
    pub fn index_of(&self, v: VertexId) -> Option<usize> {
        self.vertices.iter().position(|x| x.id() == v)
    }

    /// Incident-edge count of `v`.
    pub fn degree(&self, v: VertexId) -> Option<usize> {
        self.vertex(v).map(|x| x.degree())
    }

    /// The stored edge joining `a` and `b`, in either click order.
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        let probe = Endpoints::new(a, b);
        self.edges
            .iter()
            .find(|e| e.endpoints() == probe)
            .map(|e| e.id())
    }

    fn index_map(&self) -> BiHashMap<VertexId, usize, RandomState, RandomState> {
        let mut map = BiHashMap::with_capacity_and_hashers(
            self.vertices.len(),
            RandomState::new(),
            RandomState::new(),
        );
        for (index, v) in self.vertices.iter().enumerate() {
            map.insert(v.id(), index);
        }
        map
    }

    fn next_vertex_id(&self) -> VertexId {
        match self.vertices.last() {
            Some(v) => v.id().next(),
            None => VertexId::new(1),
        }
    }

    /// Places a new vertex and returns its id.
    pub fn create_vertex(&mut self, position: P) -> VertexId {
        let id = self.next_vertex_id();
        self.vertices.push(Vertex::new(id, position));
        id
    }

    /// One click of the two-click edge protocol.
    ///
    /// The first click buffers `v` and returns `None`. The second click joins
    /// the buffered vertex to `v` and returns the new edge, leaving the buffer
    /// empty. A second click that would duplicate an existing edge, or that
    /// names the buffered vertex itself, is discarded with the buffer left
    /// empty and returns `None`.
    pub fn create_edge(&mut self, v: VertexId) -> Option<EdgeId> {
        self.index_of(v)?;
        let first = match self.pending.take() {
            None => {
                self.pending = Some(v);
                return None;
            }
            Some(first) => first,
        };
        if first == v || self.edge_between(first, v).is_some() {
            return None;
        }
        let eid = self.eid_factory.one_more();
        self.edges.push(Edge::new(eid, first, v));
        for vid in [first, v] {
            if let Some(vertex) = self.vertex_mut(vid) {
                vertex.attach_edge(eid);
            }
        }
        Some(eid)
    }

    /// Assigns or unsets the weight of `e`. Weights arrive pre-validated;
    /// `None` takes the edge back out of path-finding.
    pub fn set_edge_weight(&mut self, e: EdgeId, weight: Option<u64>) -> bool {
        match self.edge_mut(e) {
            Some(edge) => {
                edge.set_weight(weight);
                true
            }
            None => false,
        }
    }

    pub fn select_vertex(&mut self, v: VertexId, selected: bool) {
        if let Some(vertex) = self.vertex_mut(v) {
            vertex.set_selected(selected);
        }
    }

    pub fn select_edge(&mut self, e: EdgeId, selected: bool) {
        if let Some(edge) = self.edge_mut(e) {
            edge.set_selected(selected);
        }
    }

    /// Clears every selection mark and the pending first click.
    pub fn unselect_all(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.set_selected(false);
        }
        for edge in self.edges.iter_mut() {
            edge.set_selected(false);
        }
        self.pending = None;
    }

    /// Removes every selected vertex, cascading over its incident edges, then
    /// every selected edge still standing. A no-op when nothing is selected.
    pub fn delete_selected(&mut self) {
        let doomed_vertices: Vec<VertexId> = self
            .vertices
            .iter()
            .filter(|v| v.is_selected())
            .map(|v| v.id())
            .collect();
        for v in doomed_vertices {
            self.remove_vertex(v);
        }
        let doomed_edges: Vec<EdgeId> = self
            .edges
            .iter()
            .filter(|e| e.is_selected())
            .map(|e| e.id())
            .collect();
        for e in doomed_edges {
            self.remove_edge(e);
        }
    }

    fn remove_vertex(&mut self, v: VertexId) {
        let incident: Vec<EdgeId> = match self.vertex(v) {
            Some(vertex) => vertex.incident_edges().collect(),
            None => return,
        };
        for e in incident {
            self.remove_edge(e);
        }
        self.vertices.retain(|x| x.id() != v);
        if self.pending == Some(v) {
            self.pending = None;
        }
    }

    fn remove_edge(&mut self, e: EdgeId) {
        let endpoints = match self.edge(e) {
            Some(edge) => edge.endpoints(),
            None => return,
        };
        for vid in [endpoints.start, endpoints.end] {
            if let Some(vertex) = self.vertex_mut(vid) {
                vertex.detach_edge(&e);
            }
        }
        self.edges.retain(|x| x.id() != e);
    }

    /// Empties the whole model and resets the mode and both engines.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.pending = None;
        self.mode = Mode::Idle;
        self.dijkstra.reset();
        self.floyd.reset();
    }

    /// Builds the adjacency matrix from the current vertices and edges.
    ///
    /// Cells start at [`NO_EDGE`]. Every edge with a finite weight fills both
    /// symmetric cells and zeroes the diagonal cells of its two endpoints.
    /// Edges without a weight leave their cells infinite: they exist
    /// topologically but do not take part in path-finding yet.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let mut matrix = AdjacencyMatrix::new(self.vertices.len());
        let index = self.index_map();
        for edge in &self.edges {
            let weight = match edge.weight() {
                Some(w) => w as f64,
                None => continue,
            };
            if let (Some(&a), Some(&b)) = (
                index.get_by_left(&edge.start()),
                index.get_by_left(&edge.end()),
            ) {
                matrix.set_symmetric(a, b, weight);
                matrix.set(a, a, 0.0);
                matrix.set(b, b, 0.0);
            }
        }
        matrix
    }

    /// Replaces the edge set with its complement.
    ///
    /// Every vertex ends up joined to exactly the vertices it was not joined
    /// to before, never to itself. Where two vertices' complements name the
    /// same pair, the edge object built for the first is reused for the
    /// second. All complement edges carry no weight: the complement describes
    /// structure, not cost.
    pub fn complement(&mut self) {
        let neighbors: Vec<(VertexId, BTreeSet<VertexId>)> = self
            .vertices
            .iter()
            .map(|v| {
                let set = v
                    .incident_edges()
                    .filter_map(|e| self.edge(e).map(|edge| edge.opposite(v.id())))
                    .collect();
                (v.id(), set)
            })
            .collect();
        let order: Vec<VertexId> = self.vertices.iter().map(|v| v.id()).collect();
        self.edges.clear();
        for (v, adjacent) in neighbors {
            let mut rebuilt = vec![];
            for &w in &order {
                if w == v || adjacent.contains(&w) {
                    continue;
                }
                let eid = match self.edge_between(v, w) {
                    Some(existing) => existing,
                    None => {
                        let eid = self.eid_factory.one_more();
                        self.edges.push(Edge::new(eid, v, w));
                        eid
                    }
                };
                rebuilt.push(eid);
            }
            if let Some(vertex) = self.vertex_mut(v) {
                vertex.replace_edges(rebuilt);
            }
        }
    }

    /// Runs single-source shortest paths from `source` over a freshly built
    /// matrix. Returns `false` when `source` is not in the graph.
    pub fn run_dijkstra(&mut self, source: VertexId) -> bool {
        let start = match self.index_of(source) {
            Some(index) => index,
            None => return false,
        };
        let matrix = self.adjacency_matrix();
        self.floyd.reset();
        self.dijkstra.find_path(start, &matrix);
        self.mode = Mode::RunningDijkstra;
        true
    }

    /// Runs all-pairs shortest paths over a freshly built matrix.
    pub fn run_floyd(&mut self) {
        let matrix = self.adjacency_matrix();
        self.dijkstra.reset();
        self.floyd.find_path(&matrix);
        self.mode = Mode::RunningFloyd;
    }

    pub fn dijkstra(&self) -> &Dijkstra {
        &self.dijkstra
    }

    pub fn floyd(&self) -> &FloydWarshall {
        &self.floyd
    }

    pub fn reset_dijkstra(&mut self) {
        self.dijkstra.reset();
        if self.mode == Mode::RunningDijkstra {
            self.mode = Mode::Idle;
        }
    }

    pub fn reset_floyd(&mut self) {
        self.floyd.reset();
        if self.mode == Mode::RunningFloyd {
            self.mode = Mode::Idle;
        }
    }

    /// The Dijkstra path from the last run's source to `target`, as vertex
    /// ids. `None` when the target is unknown or unreachable.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        let t = self.index_of(target)?;
        self.ids_of(self.dijkstra.path(t)?)
    }

    /// The Floyd-Warshall path between two vertices, as vertex ids.
    pub fn path_between(&self, source: VertexId, target: VertexId) -> Option<Vec<VertexId>> {
        let s = self.index_of(source)?;
        let t = self.index_of(target)?;
        self.ids_of(self.floyd.path(s, t)?)
    }

    /// The Dijkstra distance to `target`; infinite when unreachable, `None`
    /// when the target is not in the graph.
    pub fn distance_to(&self, target: VertexId) -> Option<f64> {
        let t = self.index_of(target)?;
        self.dijkstra.distance(t)
    }

    /// The Floyd-Warshall distance between two vertices.
    pub fn distance_between(&self, source: VertexId, target: VertexId) -> Option<f64> {
        let s = self.index_of(source)?;
        let t = self.index_of(target)?;
        self.floyd.distance(s, t)
    }

    fn ids_of(&self, indices: &[usize]) -> Option<Vec<VertexId>> {
        let map = self.index_map();
        indices
            .iter()
            .map(|i| map.get_by_right(i).copied())
            .collect()
    }

    /// Marks the vertices of `path` and the edges joining its consecutive
    /// vertices as highlighted.
    pub fn highlight_path(&mut self, path: &[VertexId]) {
        for &v in path {
            if let Some(vertex) = self.vertex_mut(v) {
                vertex.set_highlighted(true);
            }
        }
        for pair in path.windows(2) {
            if let Some(eid) = self.edge_between(pair[0], pair[1]) {
                if let Some(edge) = self.edge_mut(eid) {
                    edge.set_highlighted(true);
                }
            }
        }
    }

    pub fn clear_highlights(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.set_highlighted(false);
        }
        for edge in self.edges.iter_mut() {
            edge.set_highlighted(false);
        }
    }
}

impl<P> std::fmt::Debug for Graph<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph {{")?;
        for v in self.vertices.iter() {
            writeln!(f, "{:?}:", v.id())?;
            for e in v.incident_edges() {
                if let Some(edge) = self.edge(e) {
                    writeln!(f, "  -- {:?} by {:?}", edge.opposite(v.id()), e)?;
                }
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}
