//! Core model of an interactive graph-drawing canvas.
//!
//! # The model and the engines
//!
//! A [`graph::Graph`] owns the vertices and edges a user draws: vertices are
//! placed one click at a time, edges are completed by a two-click protocol,
//! and both can be selected and deleted. Positions are opaque tags; what a
//! position means is entirely the renderer's business, the model only keeps
//! it next to the vertex.
//!
//! Vertices and edges live in arenas addressed by lightweight ID's, which are
//! essentially `usize`. Callers may feel free to copy and store these ID's;
//! there is no reference cycle to manage even though every vertex knows its
//! incident edges and every edge knows its endpoints.
//!
//! The [`graph::AdjacencyMatrix`] is a derived view recomputed from the
//! current vertices and edges on demand. The two engines in [`algorithm`]
//! consume that matrix: [`algorithm::Dijkstra`] for single-source shortest
//! paths and [`algorithm::FloydWarshall`] for all pairs, both with full path
//! reconstruction. An edge participates in path-finding only once it has been
//! given a finite weight.

pub mod algorithm;
pub mod graph;
