use std::fmt;

use crate::{
    identifier::{ColumnIdentifier, Identifier},
    serializer::{serialize_list, Binds, SqlSerializable, TableAliases},
};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexModifier {
    Unique,
}

impl fmt::Display for IndexModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexModifier::Unique => write!(f, "UNIQUE"),
        }
    }
}

impl fmt::Debug for IndexModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexModifier({})", self)
    }
}

impl SqlSerializable for IndexModifier {
    fn serialize_with(&self, _binds: &mut Binds, _aliases: Option<&TableAliases>) -> String {
        self.to_string()
    }
}

/// `CREATE [<modifier>] INDEX <identifier> [ON <table>] (<columns>)`
///
/// The table is taken from the first column; without one there is no `ON`
/// clause. Nothing is validated, an index over no columns renders `()`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndex {
    pub modifier: Option<IndexModifier>,
    pub identifier: Identifier,
    pub columns: Vec<ColumnIdentifier>,
}

impl CreateIndex {
    pub fn new(identifier: Identifier) -> Self {
        Self { modifier: None, identifier, columns: vec![] }
    }

    pub fn modifier(mut self, modifier: IndexModifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    pub fn unique(self) -> Self {
        self.modifier(IndexModifier::Unique)
    }

    pub fn column(mut self, column: ColumnIdentifier) -> Self {
        self.columns.push(column);
        self
    }
}

/// Starts an empty [`CreateIndex`].
pub fn create_index(identifier: Identifier) -> CreateIndex {
    CreateIndex::new(identifier)
}

impl SqlSerializable for CreateIndex {
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String {
        let mut sql: Vec<String> = vec![];
        sql.push("CREATE".to_string());
        if let Some(modifier) = &self.modifier {
            sql.push(modifier.serialize_with(binds, aliases));
        }
        sql.push("INDEX".to_string());
        sql.push(self.identifier.serialize_with(binds, aliases));
        if let Some(table) = self.columns.first().and_then(|column| column.table.as_ref()) {
            sql.push("ON".to_string());
            sql.push(table.serialize_with(binds, aliases));
        }

        let names: Vec<&Identifier> = self.columns.iter().map(|column| &column.identifier).collect();
        sql.push(format!("({})", serialize_list(&names, binds, aliases, ", ")));

        sql.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{create_index, IndexModifier},
        identifier::{column, identifier, table},
        serializer::{Binds, SqlSerializable, TableAliases},
    };

    #[test]
    pub fn test_index_on_table_columns() {
        let t = table(identifier("T"));
        let stmt = create_index(identifier("idx_t"))
            .column(column(Some(t.clone()), identifier("colA")))
            .column(column(Some(t), identifier("colB")));

        let mut binds = Binds::new();
        assert_eq!(stmt.serialize(&mut binds), "CREATE INDEX idx_t ON T (colA, colB)");
    }

    #[test]
    pub fn test_index_without_columns_has_no_on() {
        let stmt = create_index(identifier("idx_empty"));

        let mut binds = Binds::new();
        assert_eq!(stmt.serialize(&mut binds), "CREATE INDEX idx_empty ()");
    }

    #[test]
    pub fn test_index_first_column_without_table() {
        let stmt = create_index(identifier("idx_name")).column(column(None, identifier("name")));

        let mut binds = Binds::new();
        assert_eq!(stmt.serialize(&mut binds), "CREATE INDEX idx_name (name)");
    }

    #[test]
    pub fn test_unique_index() {
        let stmt = create_index(identifier("uq_planet_name"))
            .unique()
            .column(column(Some(table(identifier("planets"))), identifier("name")));

        let mut binds = Binds::new();
        assert_eq!(stmt.serialize(&mut binds), "CREATE UNIQUE INDEX uq_planet_name ON planets (name)");
        assert_eq!(stmt.modifier, Some(IndexModifier::Unique));
    }

    #[test]
    pub fn test_index_table_is_never_aliased() {
        let planets = table(identifier("planets"));
        let stmt = create_index(identifier("idx_planets")).column(column(Some(planets.clone()), identifier("id")));
        let aliases = TableAliases::single(&planets, identifier("p"));

        let mut binds = Binds::new();
        assert_eq!(stmt.serialize_with(&mut binds, Some(&aliases)), "CREATE INDEX idx_planets ON planets (id)");
    }
}
