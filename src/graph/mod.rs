//! The drawing model: vertices, edges and the graph that owns them.
//!
//! Vertices and edges are kept in arenas and addressed by lightweight ID's,
//! which are essentially `usize`. A vertex knows its incident edges and an
//! edge knows its two endpoints, but both sides hold ID's rather than
//! references, so there is no ownership cycle.
//!
//! Edge equality is order-independent over the endpoint pair; the graph uses
//! it to suppress duplicate edges. The adjacency matrix is a derived view
//! rebuilt from the current vertices and edges on every request.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod matrix;
pub use self::matrix::*;
mod model;
pub use self::model::*;

#[cfg(test)]
pub(crate) use self::tests::*;
