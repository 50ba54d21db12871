//! Procedural generation of map geometry.
//!
//! Nothing in this module keeps state and nothing touches an entropy source:
//! every function is a pure mapping from `(seed, parameters)` to geometry.
//! Generated shapes and roads are therefore never persisted; the engine
//! recomputes them each render pass and the same seeds reproduce them
//! bit-for-bit.

mod path;
mod rng;
mod road;
mod shape;

pub use path::*;
pub use rng::*;
pub use road::*;
pub use shape::*;
