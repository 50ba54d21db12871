//! Plane geometry primitives shared by the atlas and the map engine.

use serde::{Deserialize, Serialize};

/// A point on the world canvas, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// The point halfway between this point and another.
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Linear interpolation towards another point; `t = 0` is `self`,
    /// `t = 1` is `other`.
    pub fn lerp(&self, other: Point, t: f32) -> Point {
        Point::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Default canvas width in world units.
pub const DEFAULT_CANVAS_WIDTH: f32 = 1000.0;

/// Default canvas height in world units.
pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

/// The extents of the world-map drawing surface.
///
/// Every node coordinate is expressed relative to this canvas, and the
/// viewport's zoom limits are derived from its width. Hosts pass an explicit
/// canvas to the engine rather than relying on a baked-in size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldCanvas {
    pub width: f32,
    pub height: f32,
}

impl WorldCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The canvas center point.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for WorldCanvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}
