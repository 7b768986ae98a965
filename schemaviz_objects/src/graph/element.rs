
use serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Table,
    Column,
}

impl core::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Column => write!(f, "column"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    Relationship,
    ColumnRelationship,
}

impl core::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Relationship => write!(f, "relationship"),
            Self::ColumnRelationship => write!(f, "column-relationship"),
        }
    }
}

/// Whether an edge target names a node emitted in the same graph.
///
/// `Unresolved` marks a foreign key whose referenced table was not part of
/// the fetched table set. The target then carries the raw table name instead
/// of a node id, and clients may render it as an external reference.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum TargetResolution {
    #[default]
    Resolved,
    Unresolved,
}

impl TargetResolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: String, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id,
            label: label.into(),
            kind,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    #[serde(default, skip_serializing_if = "TargetResolution::is_resolved")]
    pub target_resolution: TargetResolution,
}

impl Edge {
    pub fn is_dangling(&self) -> bool {
        !self.target_resolution.is_resolved()
    }
}

/// A node or an edge. On the wire every element is wrapped as
/// `{"data": {...}}`, the shape graph rendering clients consume directly.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(into = "ElementEnvelope", from = "ElementEnvelope")]
pub enum GraphElement {
    Node(Node),
    Edge(Edge),
}

impl GraphElement {
    pub fn id(&self) -> &str {
        match self {
            Self::Node(node) => &node.id,
            Self::Edge(edge) => &edge.id,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Self::Edge(edge) => Some(edge),
            Self::Node(_) => None,
        }
    }
}

impl From<Node> for GraphElement {
    fn from(value: Node) -> Self {
        Self::Node(value)
    }
}

impl From<Edge> for GraphElement {
    fn from(value: Edge) -> Self {
        Self::Edge(value)
    }
}

#[derive(Serialize, Deserialize)]
struct ElementEnvelope {
    data: ElementData,
}

// Nodes always carry `label` and edges never do, so untagged matching is
// unambiguous.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ElementData {
    Node(Node),
    Edge(Edge),
}

impl From<GraphElement> for ElementEnvelope {
    fn from(value: GraphElement) -> Self {
        let data = match value {
            GraphElement::Node(node) => ElementData::Node(node),
            GraphElement::Edge(edge) => ElementData::Edge(edge),
        };
        Self { data }
    }
}

impl From<ElementEnvelope> for GraphElement {
    fn from(value: ElementEnvelope) -> Self {
        match value.data {
            ElementData::Node(node) => Self::Node(node),
            ElementData::Edge(edge) => Self::Edge(edge),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn node_wire_shape() {
        let node: GraphElement = Node::new("table_users".to_string(), "users", NodeKind::Table).into();
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"data": {"id": "table_users", "label": "users", "type": "table"}})
        );
    }

    #[test]
    fn resolved_edge_wire_shape() {
        let edge: GraphElement = Edge {
            id: "edge_table_users_to_users_id".to_string(),
            source: "table_users".to_string(),
            target: "users_id".to_string(),
            kind: EdgeKind::ColumnRelationship,
            target_resolution: TargetResolution::Resolved,
        }.into();
        assert_eq!(
            serde_json::to_value(&edge).unwrap(),
            json!({"data": {
                "id": "edge_table_users_to_users_id",
                "source": "table_users",
                "target": "users_id",
                "type": "column-relationship"
            }})
        );
    }

    #[test]
    fn dangling_edge_is_tagged_on_the_wire() {
        let edge = Edge {
            id: "edge_table_orders_to_ghost".to_string(),
            source: "table_orders".to_string(),
            target: "ghost".to_string(),
            kind: EdgeKind::Relationship,
            target_resolution: TargetResolution::Unresolved,
        };
        let value = serde_json::to_value(GraphElement::from(edge.clone())).unwrap();
        assert_eq!(value["data"]["target_resolution"], "unresolved");
        assert_eq!(value["data"]["type"], "relationship");

        let back: GraphElement = serde_json::from_value(value).unwrap();
        assert_eq!(back, GraphElement::Edge(edge));
    }

    #[test]
    fn untagged_data_is_told_apart() {
        let node: GraphElement = serde_json::from_value(
            json!({"data": {"id": "users_id", "label": "id", "type": "column"}})
        ).unwrap();
        assert!(node.as_node().is_some());

        let edge: GraphElement = serde_json::from_value(
            json!({"data": {"id": "e", "source": "a", "target": "b", "type": "relationship"}})
        ).unwrap();
        let edge = edge.as_edge().unwrap();
        assert!(!edge.is_dangling());
    }
}
