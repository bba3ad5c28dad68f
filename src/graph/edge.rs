use super::VertexId;

/// ID for edges, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A factory to generate `EdgeId` uniquely.
#[derive(Debug, Clone)]
pub struct EdgeIdFactory(usize);

impl Default for EdgeIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }
}

impl EdgeId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

/// An unordered pair of endpoints.
///
/// `start` and `end` remember the order the user clicked in, which is what the
/// renderer draws the arrowhead from, but two pairs are equal whenever they
/// join the same two vertices.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Endpoints {
    pub start: VertexId,
    pub end: VertexId,
}

impl PartialEq for Endpoints {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

impl Endpoints {
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self { start, end }
    }

    pub fn touches(&self, v: VertexId) -> bool {
        self.start == v || self.end == v
    }

    /// The endpoint opposite to `v`. Callers must pass one of the two
    /// endpoints.
    pub fn opposite(&self, v: VertexId) -> VertexId {
        if v == self.start {
            self.end
        } else {
            self.start
        }
    }
}

/// A weighted edge between two vertices.
///
/// Equality ignores the id, the weight and the display flags: two edges are
/// equal exactly when their endpoint sets match. The graph relies on this for
/// duplicate suppression.
///
/// A `None` weight means the edge exists topologically but carries no cost
/// yet; the adjacency matrix reports it as infinite, so it stays invisible to
/// both path engines until a finite weight is assigned.
#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    endpoints: Endpoints,
    weight: Option<u64>,
    selected: bool,
    highlighted: bool,
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints == other.endpoints
    }
}

impl Edge {
    pub(crate) fn new(id: EdgeId, start: VertexId, end: VertexId) -> Self {
        Self {
            id,
            endpoints: Endpoints::new(start, end),
            weight: None,
            selected: false,
            highlighted: false,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
    }

    pub fn start(&self) -> VertexId {
        self.endpoints.start
    }

    pub fn end(&self) -> VertexId {
        self.endpoints.end
    }

    pub fn touches(&self, v: VertexId) -> bool {
        self.endpoints.touches(v)
    }

    pub fn opposite(&self, v: VertexId) -> VertexId {
        self.endpoints.opposite(v)
    }

    pub fn weight(&self) -> Option<u64> {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Option<u64>) {
        self.weight = weight;
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_equality_ignores_order() {
        let a = VertexId::new(1);
        let b = VertexId::new(2);
        assert_eq!(Endpoints::new(a, b), Endpoints::new(b, a));
        assert_eq!(Edge::new(EdgeId::new(0), a, b), Edge::new(EdgeId::new(1), b, a));
    }

    #[test]
    fn endpoint_equality_distinguishes_pairs() {
        let a = VertexId::new(1);
        let b = VertexId::new(2);
        let c = VertexId::new(3);
        assert_ne!(Endpoints::new(a, b), Endpoints::new(a, c));
        assert_ne!(Edge::new(EdgeId::new(0), a, b), Edge::new(EdgeId::new(1), b, c));
    }

    #[test]
    fn equality_ignores_weight_and_flags() {
        let a = VertexId::new(1);
        let b = VertexId::new(2);
        let mut lhs = Edge::new(EdgeId::new(0), a, b);
        let rhs = Edge::new(EdgeId::new(1), a, b);
        lhs.set_weight(Some(7));
        lhs.set_highlighted(true);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn opposite_returns_the_other_endpoint() {
        let a = VertexId::new(4);
        let b = VertexId::new(9);
        let e = Edge::new(EdgeId::new(0), a, b);
        assert_eq!(e.opposite(a), b);
        assert_eq!(e.opposite(b), a);
    }
}
