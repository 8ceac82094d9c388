//! Table and column descriptors
//!
//! Column kinds:
//! - id: surrogate integer primary key, assigned by the store
//! - text: UTF-8 string
//! - bool: Boolean flag
//! - foreign key: integer id of a row in another table

/// Column data kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Surrogate primary key
    Id,
    /// UTF-8 string
    Text,
    /// Boolean
    Bool,
    /// Reference to the `id` of another table
    ForeignKey(&'static str),
}

/// Column definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
    /// Whether the column may hold NULL
    pub nullable: bool,
    /// Whether the column is part of the record's wire serialization
    pub exposed: bool,
}

impl Column {
    /// The surrogate `id` column every table carries
    pub const fn id() -> Self {
        Self {
            name: "id",
            kind: ColumnKind::Id,
            nullable: false,
            exposed: true,
        }
    }

    /// A required, exposed text column
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Text,
            nullable: false,
            exposed: true,
        }
    }

    /// A required column that never leaves the store
    pub const fn hidden(name: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            kind,
            nullable: false,
            exposed: false,
        }
    }

    /// A foreign key column
    pub const fn reference(name: &'static str, table: &'static str, nullable: bool) -> Self {
        Self {
            name,
            kind: ColumnKind::ForeignKey(table),
            nullable,
            exposed: true,
        }
    }

    /// Whether a create request has to supply this column
    pub fn is_required_input(&self) -> bool {
        self.kind != ColumnKind::Id && !self.nullable
    }
}

/// Table definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl Table {
    /// Table name quoted for SQL. `user` is reserved in PostgreSQL.
    pub fn quoted_name(&self) -> String {
        format!("\"{}\"", self.name)
    }

    /// Comma-separated list of the exposed columns, in declaration order
    pub fn select_list(&self) -> String {
        self.columns
            .iter()
            .filter(|c| c.exposed)
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Comma-separated list of every column, hidden ones included
    pub fn full_column_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Names of the columns a create request must supply
    pub fn required_inputs(&self) -> Vec<&'static str> {
        self.columns
            .iter()
            .filter(|c| c.is_required_input())
            .map(|c| c.name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Table = Table {
        name: "sample",
        columns: &[
            Column::id(),
            Column::text("label"),
            Column::hidden("secret", ColumnKind::Text),
            Column::reference("owner_id", "owner", true),
        ],
    };

    #[test]
    fn test_select_list_skips_hidden_columns() {
        assert_eq!(SAMPLE.select_list(), "id, label, owner_id");
        assert_eq!(SAMPLE.full_column_list(), "id, label, secret, owner_id");
    }

    #[test]
    fn test_required_inputs() {
        // id is assigned by the store, owner_id is nullable
        assert_eq!(SAMPLE.required_inputs(), vec!["label", "secret"]);
    }

    #[test]
    fn test_quoted_name() {
        assert_eq!(SAMPLE.quoted_name(), "\"sample\"");
    }
}
