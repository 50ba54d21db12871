//! Path compilation - turning point sequences into drawable path data.

use map_graph::Point;
use serde::{Deserialize, Serialize};

/// Seed stride separating per-segment straight-vs-curved decisions.
pub const DECISION_SEED_STRIDE: u64 = 31;

/// A single drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic curve to `to` with control point `ctrl`.
    QuadTo {
        ctrl: Point,
        to: Point,
    },
    /// Straight line back to the subpath start.
    Close,
}

impl PathCmd {
    /// The point this command draws to, if any.
    fn endpoint(&self) -> Option<Point> {
        match self {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) => Some(*p),
            PathCmd::QuadTo { to, .. } => Some(*to),
            PathCmd::Close => None,
        }
    }
}

impl std::fmt::Display for PathCmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // f32 Display keeps integral values short ("100", not "100.0000").
        match self {
            PathCmd::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            PathCmd::LineTo(p) => write!(f, "L {} {}", p.x, p.y),
            PathCmd::QuadTo { ctrl, to } => {
                write!(f, "Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)
            }
            PathCmd::Close => write!(f, "Z"),
        }
    }
}

/// A compiled path: the engine's currency for shape outlines and roads.
///
/// Non-empty paths always begin with a move to the first point. Closed
/// outlines end with [`PathCmd::Close`]; open roads do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PathData {
    commands: Vec<PathCmd>,
}

impl PathData {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an explicit command sequence.
    pub fn from_commands(commands: Vec<PathCmd>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether the path ends with a close instruction.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCmd::Close))
    }

    /// The first point moved to.
    pub fn start(&self) -> Option<Point> {
        self.commands.first().and_then(PathCmd::endpoint)
    }

    /// The last point drawn to; a trailing close returns the start.
    pub fn end(&self) -> Option<Point> {
        for cmd in self.commands.iter().rev() {
            match cmd {
                PathCmd::Close => return self.start(),
                other => {
                    if let Some(p) = other.endpoint() {
                        return Some(p);
                    }
                }
            }
        }
        None
    }

    /// Render the path in SVG `d`-attribute syntax.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for PathData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cmd)?;
        }
        Ok(())
    }
}

/// Compile a closed outline from polygon vertices.
///
/// Each segment is drawn straight or curved by a seeded decision:
/// `(seed + i * 31) % 10 < straight_percent / 10` (integer division, so the
/// percentage is effective in steps of ten). Curved segments are quadratics
/// ending at the current vertex with the control point midway between the
/// current and next vertex, which rounds corners without leaving the hull.
/// The wrap-around segment back to the first vertex is the close instruction
/// when straight.
///
/// Fewer than two points compile to the empty path.
pub fn points_to_path(points: &[Point], seed: u64, straight_percent: u32) -> PathData {
    let n = points.len();
    if n < 2 {
        return PathData::new();
    }

    let threshold = (straight_percent / 10) as u64;
    let mut commands = Vec::with_capacity(n + 2);
    commands.push(PathCmd::MoveTo(points[0]));

    // Segment i targets points[i % n]; i == n wraps back to the start.
    for i in 1..=n {
        let draw = seed.wrapping_add((i as u64).wrapping_mul(DECISION_SEED_STRIDE)) % 10;
        let straight = draw < threshold;
        let current = points[i % n];
        let next = points[(i + 1) % n];

        if i == n {
            if !straight {
                commands.push(PathCmd::QuadTo {
                    ctrl: current.midpoint(next),
                    to: current,
                });
            }
            commands.push(PathCmd::Close);
        } else if straight {
            commands.push(PathCmd::LineTo(current));
        } else {
            commands.push(PathCmd::QuadTo {
                ctrl: current.midpoint(next),
                to: current,
            });
        }
    }

    PathData::from_commands(commands)
}
