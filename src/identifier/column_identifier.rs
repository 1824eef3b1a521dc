use std::fmt;

use crate::{
    identifier::{Identifier, SqlTable, TableIdentifier},
    serializer::{Binds, SqlSerializable, TableAliases},
    SqlError,
};

/// A column, optionally qualified by its table.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ColumnIdentifier {
    pub table: Option<TableIdentifier>,
    pub identifier: Identifier,
}

impl ColumnIdentifier {
    pub fn new(table: Option<TableIdentifier>, identifier: Identifier) -> Self {
        Self { table, identifier }
    }

    /// Resolves `property` of entity `T` to a qualified column.
    ///
    /// Fails when the entity has no column for the property; no column is
    /// built in that case.
    pub fn key_path<T: SqlTable>(property: &str) -> Result<Self, SqlError> {
        let table_name = T::sql_table_identifier_string();
        let Some(name) = T::sql_column_name(property) else {
            return SqlError::unresolved(&table_name, property).err();
        };

        Ok(Self::new(
            Some(TableIdentifier::new(Identifier::new(table_name))),
            Identifier::new(name),
        ))
    }
}

/// Builds a [`ColumnIdentifier`].
pub fn column(table: Option<TableIdentifier>, identifier: Identifier) -> ColumnIdentifier {
    ColumnIdentifier::new(table, identifier)
}

impl SqlSerializable for ColumnIdentifier {
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String {
        let Some(table) = &self.table else {
            return self.identifier.serialize_with(binds, aliases);
        };

        let table_name = match aliases.and_then(|aliases| aliases.get(table)) {
            Some(alias) => {
                tracing::trace!(table = %table, alias = %alias, "column table replaced by alias");
                alias.serialize_with(binds, aliases)
            }
            None => table.serialize_with(binds, aliases),
        };

        format!("{}.{}", table_name, self.identifier.serialize_with(binds, aliases))
    }
}

impl fmt::Display for ColumnIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{}.{}", table, self.identifier),
            None => write!(f, "{}", self.identifier),
        }
    }
}

impl fmt::Debug for ColumnIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColumnIdentifier({})", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        identifier::{column, identifier, table, ColumnIdentifier, SqlTable},
        serializer::{Binds, DialectConfig, SqlSerializable, TableAliases},
        SqlError,
    };

    struct Planet;

    impl SqlTable for Planet {
        fn sql_table_identifier_string() -> String {
            "planets".to_string()
        }

        fn sql_properties() -> &'static [&'static str] {
            &["id", "name"]
        }
    }

    #[test]
    pub fn test_column_without_table() {
        let mut binds = Binds::new();
        assert_eq!(column(None, identifier("id")).serialize(&mut binds), "id");
    }

    #[test]
    pub fn test_column_with_table() {
        let col = column(Some(table(identifier("t"))), identifier("c"));

        let mut binds = Binds::new();
        assert_eq!(col.serialize(&mut binds), "t.c");
    }

    #[test]
    pub fn test_column_with_alias() {
        let t = table(identifier("t"));
        let col = column(Some(t.clone()), identifier("c"));
        let aliases = TableAliases::single(&t, identifier("alias"));

        let mut binds = Binds::new();
        assert_eq!(col.serialize_with(&mut binds, Some(&aliases)), "alias.c");
    }

    #[test]
    pub fn test_column_with_unrelated_alias() {
        let col = column(Some(table(identifier("t"))), identifier("c"));
        let aliases = TableAliases::single(&table(identifier("other")), identifier("o"));

        let mut binds = Binds::new();
        assert_eq!(col.serialize_with(&mut binds, Some(&aliases)), "t.c");
    }

    #[test]
    pub fn test_column_alias_and_name_are_quoted() {
        let t = table(identifier("t"));
        let col = column(Some(t.clone()), identifier("first name"));
        let aliases = TableAliases::single(&t, identifier("my alias"));

        let mut binds = Binds::with_config(DialectConfig::sqlite());
        assert_eq!(col.serialize_with(&mut binds, Some(&aliases)), "\"my alias\".\"first name\"");
    }

    #[test]
    pub fn test_column_equality() {
        let a = column(Some(table(identifier("t"))), identifier("c"));
        let b = column(Some(table(identifier("t"))), identifier("c"));
        let c = column(None, identifier("c"));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    pub fn test_key_path() {
        let col = ColumnIdentifier::key_path::<Planet>("name").expect("Failed to resolve column");
        assert_eq!(col, column(Some(table(identifier("planets"))), identifier("name")));
    }

    #[test]
    pub fn test_key_path_unmapped_property() {
        let result = ColumnIdentifier::key_path::<Planet>("moons");

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err, SqlError::unresolved("planets", "moons")),
        }
    }
}
