//! Shortest-path engines over the adjacency matrix.
//!
//! Both engines take the matrix as an immutable snapshot and index their
//! results by matrix row/column number. Mapping those numbers back to vertex
//! ids is the graph's business.

mod dijkstra;
pub use self::dijkstra::*;
mod floyd_warshall;
pub use self::floyd_warshall::*;
