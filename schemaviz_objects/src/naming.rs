
pub const TABLE_PREFIX: &str = "table_";
pub const EDGE_PREFIX: &str = "edge_";

pub fn table_node_id(table_name: &str) -> String {
    format!("{TABLE_PREFIX}{table_name}")
}

/// Columns are namespaced by their owning table so that `users.id` and
/// `orders.id` never share a node id.
pub fn column_node_id(table_name: &str, column_name: &str) -> String {
    format!("{table_name}_{column_name}")
}

pub fn edge_id(source_id: &str, target_id: &str) -> String {
    format!("{EDGE_PREFIX}{source_id}_to_{target_id}")
}

/// Id for the `nth` candidate (1-based) of an edge between one source/target
/// pair. The first keeps the plain id. A quoted table name may itself contain
/// `#`, so callers check candidates against the ids already emitted.
pub fn nth_edge_id(source_id: &str, target_id: &str, nth: usize) -> String {
    let base = edge_id(source_id, target_id);
    if nth <= 1 {
        base
    } else {
        format!("{base}#{nth}")
    }
}
