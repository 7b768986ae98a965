
use std::collections::{HashMap, HashSet};

use crate::naming::{nth_edge_id, table_node_id};
use crate::schema::{ForeignKey, Table};

use super::{Edge, EdgeKind, Graph, GraphElement, Node, NodeKind, TargetResolution};

/// Builds the table level graph: one `table` node per table followed by one
/// `relationship` edge per foreign key, both in input order.
///
/// A foreign key pointing at a table outside `tables` still produces its
/// edge. The target is then the raw foreign table name and the edge is
/// tagged `Unresolved`. Repeated foreign keys between the same pair of tables
/// are all kept: each edge takes the first [`nth_edge_id`] candidate not
/// already used in this graph.
pub fn build_schema_graph(tables: &[Table], foreign_keys: &[ForeignKey]) -> Graph {
    let mut elements: Vec<GraphElement> = Vec::with_capacity(tables.len() + foreign_keys.len());
    let mut table_nodes: HashMap<&str, String> = HashMap::with_capacity(tables.len());

    for table in tables {
        let id = table_node_id(&table.table_name);
        table_nodes.insert(table.table_name.as_str(), id.clone());
        elements.push(Node::new(id, table.table_name.as_str(), NodeKind::Table).into());
    }

    let mut edge_ids: HashSet<String> = HashSet::with_capacity(foreign_keys.len());
    for fk in foreign_keys {
        let source = table_node_id(&fk.table_name);
        let (target, target_resolution) = match table_nodes.get(fk.foreign_table_name.as_str()) {
            Some(id) => (id.clone(), TargetResolution::Resolved),
            None => (fk.foreign_table_name.clone(), TargetResolution::Unresolved),
        };

        let mut nth = 1;
        let mut id = nth_edge_id(&source, &target, nth);
        while edge_ids.contains(&id) {
            nth += 1;
            id = nth_edge_id(&source, &target, nth);
        }
        edge_ids.insert(id.clone());

        elements.push(Edge {
            id,
            source,
            target,
            kind: EdgeKind::Relationship,
            target_resolution,
        }.into());
    }

    Graph::from_elements(elements)
}
