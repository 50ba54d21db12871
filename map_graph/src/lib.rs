//! # Map Graph
//!
//! The "World Atlas" crate - node and route data for the world map.
//! This crate is the contract between the world-bible data layer and the
//! procedural map engine: it defines what the data layer produces and the
//! engine consumes, and contains no generation or rendering logic.

pub mod geometry;
pub mod graph;
pub mod nodes;

pub use geometry::*;
pub use graph::*;
pub use nodes::*;
