pub mod column;
pub mod relation;
pub mod table;

pub use column::Column;
pub use relation::ForeignKey;
pub use table::Table;
