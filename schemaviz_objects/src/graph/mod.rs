
pub mod column_graph;
pub mod element;
pub mod schema_graph;

use std::collections::HashSet;

use serde::{Serialize, Deserialize};

pub use element::{Edge, EdgeKind, GraphElement, Node, NodeKind, TargetResolution};

/// Flat, ordered sequence of nodes and edges produced by one builder call.
///
/// The element order is the insertion order of the builder, so identical
/// catalog rows always serialize to identical output. A `Graph` is never
/// modified once built.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct Graph {
    elements: Vec<GraphElement>,
}

impl Graph {
    pub(crate) fn from_elements(elements: Vec<GraphElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[GraphElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.elements.iter().filter_map(GraphElement::as_node)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.elements.iter().filter_map(GraphElement::as_edge)
    }

    pub fn node_ids(&self) -> HashSet<&str> {
        self.nodes().map(|node| node.id.as_str()).collect()
    }

    /// Edges whose target is not a node of this graph.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges().filter(|edge| edge.is_dangling())
    }
}
