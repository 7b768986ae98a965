
use serde::{Serialize, Deserialize};

/// One foreign-key constraint, reduced to the owning table and the table it
/// references.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ForeignKey {
    pub table_name: String,
    pub foreign_table_name: String,
}

impl ForeignKey {
    pub fn new(table_name: impl Into<String>, foreign_table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            foreign_table_name: foreign_table_name.into(),
        }
    }
}

impl core::fmt::Display for ForeignKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.table_name, self.foreign_table_name)
    }
}
