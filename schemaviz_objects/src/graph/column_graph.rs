
use crate::naming::{column_node_id, edge_id, table_node_id};
use crate::schema::Column;

use super::{Edge, EdgeKind, Graph, GraphElement, Node, NodeKind, TargetResolution};

/// Builds the column graph of one table: every column node, then every
/// table -> column edge. The table node itself is not emitted; it is already
/// part of the schema graph the client holds.
pub fn build_column_graph(table_name: &str, columns: &[Column]) -> Graph {
    let table_id = table_node_id(table_name);
    let mut nodes: Vec<GraphElement> = Vec::with_capacity(columns.len() * 2);
    let mut edges: Vec<GraphElement> = Vec::with_capacity(columns.len());

    for column in columns {
        let column_id = column_node_id(table_name, &column.column_name);
        edges.push(Edge {
            id: edge_id(&table_id, &column_id),
            source: table_id.clone(),
            target: column_id.clone(),
            kind: EdgeKind::ColumnRelationship,
            target_resolution: TargetResolution::Resolved,
        }.into());
        nodes.push(Node::new(column_id, column.column_name.as_str(), NodeKind::Column).into());
    }

    nodes.append(&mut edges);
    Graph::from_elements(nodes)
}
