/// Column data types for extracted tables.
///
/// Every value crossing the grid boundary is display text, so extraction
/// always declares columns as `Varchar`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColumnType {
    /// Variable-length strings
    #[default]
    Varchar,
}

impl ColumnType {
    /// Returns the string representation of the column type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Varchar => "varchar",
        }
    }
}

/// Represents a column in an extracted table with name and data type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    /// Column name (from the header row, deduplicated)
    pub name: String,
    /// Column data type
    pub kind: ColumnType,
}

impl Column {
    /// Creates a text column with the given name.
    pub fn varchar(name: impl Into<String>) -> Self {
        Column {
            name: name.into(),
            kind: ColumnType::Varchar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn varchar_column() {
        let column = Column::varchar("amount");
        assert_eq!(column.name, "amount");
        assert_eq!(column.kind, ColumnType::Varchar);
        assert_eq!(column.kind.as_str(), "varchar");
    }
}
