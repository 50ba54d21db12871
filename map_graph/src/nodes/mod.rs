//! Map node definitions - the places drawn on the world map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::geometry::Point;

/// Unique identifier for map nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for residents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResidentId(pub Uuid);

impl ResidentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for ResidentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ResidentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A character associated with a map node, shown in its tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resident {
    pub id: ResidentId,
    pub name: String,
}

impl Resident {
    /// Create a new resident with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ResidentId::new(),
            name: name.into(),
        }
    }
}

/// Narrative categories of map locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LocationKind {
    City,
    #[default]
    Town,
    Village,
    Fortress,
    Port,
    Ruin,
    Wilderness,
    Landmark,
}

impl LocationKind {
    /// The glyph drawn for this kind when the node does not override it.
    pub fn default_glyph(&self) -> &'static str {
        match self {
            LocationKind::City => "\u{1F3D9}",
            LocationKind::Town => "\u{1F3D8}",
            LocationKind::Village => "\u{1F6D6}",
            LocationKind::Fortress => "\u{1F3F0}",
            LocationKind::Port => "\u{2693}",
            LocationKind::Ruin => "\u{1F3DA}",
            LocationKind::Wilderness => "\u{1F332}",
            LocationKind::Landmark => "\u{1F5FA}",
        }
    }
}

/// A place drawn on the world map.
///
/// Nodes are produced by the world-bible data layer and consumed read-only by
/// the map engine; position and identity never change during a render pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapNode {
    pub id: NodeId,
    pub name: String,

    /// Position on the world canvas, in world units.
    pub x: f32,
    pub y: f32,

    /// Characters who live here, shown in the hover tooltip.
    pub residents: Vec<Resident>,

    /// Icon glyph drawn at the node center.
    pub icon_glyph: String,
    pub kind: LocationKind,

    // Additional data-layer fields carried through untouched
    #[serde(default)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl MapNode {
    /// Create a new node with the given name and position.
    pub fn new(name: impl Into<String>, x: f32, y: f32) -> Self {
        let kind = LocationKind::default();
        Self {
            id: NodeId::new(),
            name: name.into(),
            x,
            y,
            residents: Vec::new(),
            icon_glyph: kind.default_glyph().to_string(),
            kind,
            extra: HashMap::new(),
        }
    }

    /// Set the location kind and adopt its default glyph.
    pub fn with_kind(mut self, kind: LocationKind) -> Self {
        self.kind = kind;
        self.icon_glyph = kind.default_glyph().to_string();
        self
    }

    /// Override the icon glyph.
    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.icon_glyph = glyph.into();
        self
    }

    /// Add a resident.
    pub fn with_resident(mut self, resident: Resident) -> Self {
        self.residents.push(resident);
        self
    }

    /// The node position as a point.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node() {
        let node = MapNode::new("Neo Seoul", 120.0, 340.0);

        assert_eq!(node.name, "Neo Seoul");
        assert_eq!(node.position(), Point::new(120.0, 340.0));
        assert_eq!(node.kind, LocationKind::Town);
        assert!(node.residents.is_empty());
    }

    #[test]
    fn test_node_builders() {
        let node = MapNode::new("Harbor of Veles", 40.0, 80.0)
            .with_kind(LocationKind::Port)
            .with_resident(Resident::new("Captain Ilsa"))
            .with_resident(Resident::new("Dockmaster Bren"));

        assert_eq!(node.kind, LocationKind::Port);
        assert_eq!(node.icon_glyph, LocationKind::Port.default_glyph());
        assert_eq!(node.residents.len(), 2);
        assert_eq!(node.residents[0].name, "Captain Ilsa");
    }

    #[test]
    fn test_glyph_override_survives() {
        let node = MapNode::new("Atelier 9", 0.0, 0.0)
            .with_kind(LocationKind::Landmark)
            .with_glyph("\u{2699}");

        assert_eq!(node.icon_glyph, "\u{2699}");
    }

    #[test]
    fn test_kind_default_glyphs_distinct() {
        let kinds = [
            LocationKind::City,
            LocationKind::Town,
            LocationKind::Village,
            LocationKind::Fortress,
            LocationKind::Port,
            LocationKind::Ruin,
            LocationKind::Wilderness,
            LocationKind::Landmark,
        ];

        for (i, a) in kinds.iter().enumerate() {
            for b in kinds.iter().skip(i + 1) {
                assert_ne!(a.default_glyph(), b.default_glyph());
            }
        }
    }

    #[test]
    fn test_node_serde_extra_defaults() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "Neo Seoul",
            "x": 1.0,
            "y": 2.0,
            "residents": [],
            "icon_glyph": "X",
            "kind": "City"
        }"#;

        let node: MapNode = serde_json::from_str(json).expect("node should parse");
        assert!(node.extra.is_empty());
        assert_eq!(node.kind, LocationKind::City);
    }
}
