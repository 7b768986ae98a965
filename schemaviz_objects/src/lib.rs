pub mod graph;
pub mod naming;
pub mod schema;

pub use graph::{Graph, GraphElement};
pub use graph::column_graph::build_column_graph;
pub use graph::schema_graph::build_schema_graph;
