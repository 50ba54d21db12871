//! Map graph - the read-only node/route structure handed to the engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::nodes::{MapNode, NodeId};

/// Errors raised while assembling a map graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A link referenced a node id that has not been added to the graph.
    #[error("unknown node {0} referenced by link")]
    UnknownNode(NodeId),
}

/// A route between two map nodes.
///
/// Links are directional as stored (from -> to) and duplicates are kept; the
/// engine draws one road per link, so the data layer decides multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLink {
    pub from: NodeId,
    pub to: NodeId,
}

impl MapLink {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

/// The node-link structure rendered by the map engine.
///
/// Nodes and links keep their insertion order so render output is stable.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MapGraph {
    /// All nodes, in insertion order.
    nodes: Vec<MapNode>,

    /// All links, in insertion order.
    links: Vec<MapLink>,

    /// Index: node id -> position in `nodes`.
    #[serde(skip)]
    index: HashMap<NodeId, usize>,
}

impl MapGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph.
    ///
    /// Returns the node ID for reference. Adding a node with an id already
    /// present replaces the earlier entry.
    pub fn add_node(&mut self, node: MapNode) -> NodeId {
        let id = node.id;
        match self.index.get(&id) {
            Some(&slot) => self.nodes[slot] = node,
            None => {
                self.index.insert(id, self.nodes.len());
                self.nodes.push(node);
            }
        }
        id
    }

    /// Add a link between two existing nodes.
    ///
    /// Both endpoints must already be in the graph. Duplicate links are
    /// stored as given.
    pub fn add_link(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        if !self.index.contains_key(&from) {
            return Err(GraphError::UnknownNode(from));
        }
        if !self.index.contains_key(&to) {
            return Err(GraphError::UnknownNode(to));
        }
        self.links.push(MapLink::new(from, to));
        Ok(())
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&MapNode> {
        self.index.get(&id).map(|&slot| &self.nodes[slot])
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[MapNode] {
        &self.nodes
    }

    /// All links, in insertion order.
    pub fn links(&self) -> &[MapLink] {
        &self.links
    }

    /// Resolve a link to its endpoint nodes, if both still exist.
    pub fn resolve(&self, link: MapLink) -> Option<(&MapNode, &MapNode)> {
        Some((self.node(link.from)?, self.node(link.to)?))
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links in the graph.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Rebuild the id index after deserialization.
    ///
    /// The index is skipped by serde; call this after decoding a graph
    /// received from the data layer.
    pub fn reindex(&mut self) {
        self.index = self
            .nodes
            .iter()
            .enumerate()
            .map(|(slot, node)| (node.id, slot))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> (MapGraph, NodeId, NodeId) {
        let mut graph = MapGraph::new();
        let seoul = graph.add_node(MapNode::new("Neo Seoul", 100.0, 100.0));
        let atelier = graph.add_node(MapNode::new("Atelier 9", 400.0, 250.0));
        (graph, seoul, atelier)
    }

    #[test]
    fn test_add_and_lookup() {
        let (graph, seoul, _) = sample_graph();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node(seoul).map(|n| n.name.as_str()), Some("Neo Seoul"));
        assert!(graph.node(NodeId::nil()).is_none());
    }

    #[test]
    fn test_link_requires_known_endpoints() {
        let (mut graph, seoul, atelier) = sample_graph();

        assert!(graph.add_link(seoul, atelier).is_ok());

        let ghost = NodeId::new();
        assert_eq!(
            graph.add_link(seoul, ghost),
            Err(GraphError::UnknownNode(ghost))
        );
        assert_eq!(
            graph.add_link(ghost, atelier),
            Err(GraphError::UnknownNode(ghost))
        );
        assert_eq!(graph.link_count(), 1);
    }

    #[test]
    fn test_duplicate_links_kept() {
        let (mut graph, seoul, atelier) = sample_graph();

        graph.add_link(seoul, atelier).unwrap();
        graph.add_link(seoul, atelier).unwrap();
        graph.add_link(atelier, seoul).unwrap();

        assert_eq!(graph.link_count(), 3);
    }

    #[test]
    fn test_resolve_link() {
        let (mut graph, seoul, atelier) = sample_graph();
        graph.add_link(seoul, atelier).unwrap();

        let (from, to) = graph.resolve(graph.links()[0]).unwrap();
        assert_eq!(from.name, "Neo Seoul");
        assert_eq!(to.name, "Atelier 9");
    }

    #[test]
    fn test_replacing_node_keeps_order() {
        let (mut graph, seoul, _) = sample_graph();

        let mut moved = graph.node(seoul).unwrap().clone();
        moved.x = 999.0;
        graph.add_node(moved);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.nodes()[0].x, 999.0);
    }

    #[test]
    fn test_reindex_after_deserialization() {
        let (mut graph, seoul, atelier) = sample_graph();
        graph.add_link(seoul, atelier).unwrap();

        let json = serde_json::to_string(&graph).unwrap();
        let mut decoded: MapGraph = serde_json::from_str(&json).unwrap();
        decoded.reindex();

        assert_eq!(decoded.node(seoul).map(|n| n.name.as_str()), Some("Neo Seoul"));
        assert!(decoded.resolve(decoded.links()[0]).is_some());
    }
}
