use super::EdgeId;

/// ID for vertices, which are essentially `usize`.
///
/// Within one graph, ids are unique and increase with creation order. Deleting
/// vertices can leave gaps; a gap is only ever refilled when the vertex with
/// the largest id is the one that was deleted.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

/// A vertex placed on the canvas.
///
/// The position tag `P` is opaque to the model; the renderer decides what it
/// means. The incident-edge list is kept in insertion order.
#[derive(Debug, Clone)]
pub struct Vertex<P> {
    id: VertexId,
    position: P,
    edges: Vec<EdgeId>,
    selected: bool,
    highlighted: bool,
}

impl<P> Vertex<P> {
    pub(crate) fn new(id: VertexId, position: P) -> Self {
        Self {
            id,
            position,
            edges: vec![],
            selected: false,
            highlighted: false,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn position(&self) -> &P {
        &self.position
    }

    pub fn set_position(&mut self, position: P) {
        self.position = position;
    }

    /// Number of incident edges.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub fn incident_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().copied()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub(crate) fn attach_edge(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    pub(crate) fn detach_edge(&mut self, edge: &EdgeId) {
        self.edges.retain(|e| e != edge);
    }

    pub(crate) fn replace_edges(&mut self, edges: Vec<EdgeId>) {
        self.edges = edges;
    }
}
