use indexmap::IndexMap;

use crate::identifier::{Identifier, TableRef};

/// Table name to alias substitutions for one expression scope.
///
/// Keys are table names, so any table reference with the same name finds
/// the entry no matter how it was built. A `Join` installs a fresh
/// single-entry map for its own predicate; `merge` is only for callers that
/// explicitly want one scope to see several aliased tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableAliases {
    entries: IndexMap<String, Identifier>,
}

impl TableAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map holding exactly `table -> alias`.
    pub fn single<T: TableRef + ?Sized>(table: &T, alias: Identifier) -> Self {
        let mut aliases = Self::new();
        aliases.insert(table, alias);
        aliases
    }

    /// Registers an alias, returning the one it replaced.
    pub fn insert<T: TableRef + ?Sized>(&mut self, table: &T, alias: Identifier) -> Option<Identifier> {
        self.entries.insert(table.table_name().to_string(), alias)
    }

    pub fn get<T: TableRef + ?Sized>(&self, table: &T) -> Option<&Identifier> {
        self.entries.get(table.table_name())
    }

    pub fn contains<T: TableRef + ?Sized>(&self, table: &T) -> bool {
        self.entries.contains_key(table.table_name())
    }

    /// Adds every entry of `other`; entries of `other` win on conflict.
    pub fn merge(&mut self, other: TableAliases) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Identifier)> {
        self.entries.iter().map(|(table, alias)| (table.as_str(), alias))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        identifier::{identifier, table, SqlTable, TypedTableIdentifier},
        serializer::TableAliases,
    };

    struct Planet;

    impl SqlTable for Planet {
        fn sql_properties() -> &'static [&'static str] {
            &["id", "name"]
        }
    }

    struct Moon;

    impl SqlTable for Moon {
        fn sql_properties() -> &'static [&'static str] {
            &["id"]
        }
    }

    #[test]
    pub fn test_lookup_by_name_across_table_types() {
        let typed = TypedTableIdentifier::<Planet>::new();
        let aliases = TableAliases::single(&typed, identifier("p"));

        let plain = table(identifier("Planet"));
        assert_eq!(aliases.get(&plain), Some(&identifier("p")));
        assert_eq!(aliases.get("Planet"), Some(&identifier("p")));

        let other_tag = TypedTableIdentifier::<Moon>::with_identifier(identifier("Planet"));
        assert!(aliases.contains(&other_tag));
    }

    #[test]
    pub fn test_missing_table() {
        let aliases = TableAliases::single(&table(identifier("planets")), identifier("p"));
        assert_eq!(aliases.get(&table(identifier("moons"))), None);
        assert_eq!(aliases.len(), 1);
    }

    #[test]
    pub fn test_insert_replaces() {
        let planets = table(identifier("planets"));
        let mut aliases = TableAliases::new();
        assert!(aliases.is_empty());

        assert_eq!(aliases.insert(&planets, identifier("p")), None);
        assert_eq!(aliases.insert(&planets, identifier("pl")), Some(identifier("p")));
        assert_eq!(aliases.get(&planets), Some(&identifier("pl")));
    }

    #[test]
    pub fn test_merge_keeps_order_and_overrides() {
        let mut aliases = TableAliases::single(&table(identifier("planets")), identifier("p"));
        let mut other = TableAliases::single(&table(identifier("moons")), identifier("m"));
        other.insert(&table(identifier("planets")), identifier("p2"));

        aliases.merge(other);

        let entries: Vec<(&str, String)> = aliases
            .iter()
            .map(|(table, alias)| (table, alias.to_string()))
            .collect();
        assert_eq!(entries, vec![("planets", "p2".to_string()), ("moons", "m".to_string())]);
    }
}
