//! Scene assembly - the render model handed to the host each pass.
//!
//! A scene is a plain data snapshot: sprite lists with precompiled path
//! strings plus the current viewport. Hosts draw it with whatever toolkit
//! they have (SVG, canvas, immediate mode) and feed pointer events back to
//! the viewport controller; nothing in a scene needs to be kept between
//! passes because generation is deterministic per node id.

use map_graph::{LocationKind, MapGraph, MapNode, NodeId, Point};
use serde::Serialize;

use crate::generator::{hash_str, organic_shape, points_to_path, road_path};
use crate::style::MapStyle;
use crate::viewport::{ViewportController, ViewportState};

/// A node ready to draw: disc, glyph, and territory outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSprite {
    pub id: NodeId,
    pub name: String,
    pub center: Point,
    pub glyph: String,
    pub kind: LocationKind,

    /// Disc radius in world units.
    pub radius: f32,

    /// Territory outline in SVG path syntax.
    pub territory: String,

    /// Whether the pointer is over this node.
    pub highlighted: bool,
}

/// A road ready to draw between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadSprite {
    pub from: NodeId,
    pub to: NodeId,

    /// Road geometry in SVG path syntax.
    pub path: String,
}

/// Hover tooltip content for a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub title: String,

    /// Comma-joined resident names, or the no-residents label.
    pub residents: String,
}

/// Label shown when a node has no residents.
pub const NO_RESIDENTS_LABEL: &str = "No residents";

/// Build the tooltip for a node.
pub fn tooltip_for(node: &MapNode) -> Tooltip {
    let residents = if node.residents.is_empty() {
        NO_RESIDENTS_LABEL.to_string()
    } else {
        node.residents
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    Tooltip {
        title: node.name.clone(),
        residents,
    }
}

/// Everything the host needs to draw one frame of the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderScene {
    pub nodes: Vec<NodeSprite>,
    pub roads: Vec<RoadSprite>,
    pub view: ViewportState,

    /// The viewport as an SVG `viewBox` value, for SVG hosts.
    pub view_box: String,

    /// Tooltip for the hovered node, if any.
    pub tooltip: Option<Tooltip>,
}

impl RenderScene {
    /// Serialize the scene for web-view hosts.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Generation seed for a node, derived from its id string.
///
/// Hashing the id rather than the name keeps a node's territory stable when
/// it is renamed.
fn node_seed(id: NodeId) -> u64 {
    hash_str(&id.to_string()) as u64
}

/// Generation seed for a link, packing both endpoint hashes.
fn link_seed(from: NodeId, to: NodeId) -> u64 {
    ((hash_str(&from.to_string()) as u64) << 32) | hash_str(&to.to_string()) as u64
}

/// Assemble the render scene for the current graph, style, and viewport.
///
/// Links whose endpoints are missing from the graph are skipped; the scene
/// renders what resolves rather than failing the whole pass.
pub fn build_scene(
    graph: &MapGraph,
    style: &MapStyle,
    controller: &ViewportController,
) -> RenderScene {
    let hovered = controller.hovered();

    let nodes = graph
        .nodes()
        .iter()
        .map(|node| {
            let seed = node_seed(node.id);
            let outline = organic_shape(
                node.position(),
                style.territory_radius,
                style.shape_sides,
                style.shape_randomness,
                seed,
            );
            NodeSprite {
                id: node.id,
                name: node.name.clone(),
                center: node.position(),
                glyph: node.icon_glyph.clone(),
                kind: node.kind,
                radius: style.node_radius,
                territory: points_to_path(&outline, seed, style.straight_percent).to_svg(),
                highlighted: hovered == Some(node.id),
            }
        })
        .collect::<Vec<_>>();

    let mut skipped_links = 0usize;
    let roads = graph
        .links()
        .iter()
        .filter_map(|link| match graph.resolve(*link) {
            Some((from, to)) => Some(RoadSprite {
                from: link.from,
                to: link.to,
                path: road_path(
                    from.position(),
                    to.position(),
                    link_seed(link.from, link.to),
                    style.road_curviness,
                    style.road_segments,
                )
                .to_svg(),
            }),
            None => {
                skipped_links += 1;
                None
            }
        })
        .collect::<Vec<_>>();

    let tooltip = hovered.and_then(|id| graph.node(id)).map(tooltip_for);
    let view = controller.view();

    tracing::debug!(
        target: "map_engine::scene",
        nodes = nodes.len(),
        roads = roads.len(),
        skipped_links,
        "scene.assembled"
    );

    RenderScene {
        nodes,
        roads,
        view_box: view.view_box(),
        view,
        tooltip,
    }
}
