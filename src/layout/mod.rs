// src/layout/mod.rs

//! Deterministic 2-D placement of the leveled graph.

pub mod engine;

pub use engine::{GraphEdge, GraphLayout, GraphNode};
