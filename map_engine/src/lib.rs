//! # Map Engine (The Atlas)
//!
//! The procedural map subsystem of the world bible. This crate consumes the
//! read-only node/route graph from `map_graph`, synthesizes organic map
//! geometry from stable seeds, and drives an interactive pan/zoom viewport.
//!
//! ## Core Components
//!
//! - **generator**: Deterministic shape, path, and road synthesis from seeds
//! - **viewport**: Pan/zoom state machine with cursor-anchored zooming
//! - **scene**: Per-frame render model (sprites, paths, tooltip) for hosts
//! - **style**: Tunable generation aesthetics, loadable from TOML
//!
//! ## Design Philosophy
//!
//! - **Seed-Driven**: Geometry is a pure function of ids and style; nothing
//!   generated is ever stored, re-rendering reproduces it exactly
//! - **Host-Agnostic**: Pointer events come in as plain values, render data
//!   goes out as plain values; no toolkit types cross the boundary
//! - **Intent-Based**: Node activation yields an intent for the host to act
//!   on, the engine never navigates by itself

pub mod generator;
pub mod scene;
pub mod style;
pub mod viewport;

pub use generator::*;
pub use scene::*;
pub use style::*;
pub use viewport::*;
