use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use crate::{
    identifier::{Identifier, SqlTable},
    serializer::{Binds, SqlSerializable, TableAliases},
};

/// Anything naming a table. Alias lookups go through this name only.
pub trait TableRef {
    fn table_name(&self) -> &str;
}

impl TableRef for str {
    fn table_name(&self) -> &str {
        self
    }
}

impl TableRef for String {
    fn table_name(&self) -> &str {
        self
    }
}

/// Identifies a table. Equal to any other table identifier with the same name.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TableIdentifier {
    pub identifier: Identifier,
}

impl TableIdentifier {
    pub fn new(identifier: Identifier) -> Self {
        Self { identifier }
    }

    /// Table of an entity type.
    pub fn of<T: SqlTable>() -> Self {
        Self::new(Identifier::new(T::sql_table_identifier_string()))
    }
}

/// Wraps an [`Identifier`] as a [`TableIdentifier`].
pub fn table(identifier: Identifier) -> TableIdentifier {
    TableIdentifier::new(identifier)
}

impl From<&str> for TableIdentifier {
    fn from(name: &str) -> Self {
        TableIdentifier::new(Identifier::from(name))
    }
}

impl TableRef for TableIdentifier {
    fn table_name(&self) -> &str {
        self.identifier.as_str()
    }
}

impl SqlSerializable for TableIdentifier {
    /// A bare table reference always renders its own name; only column
    /// references consult the aliases.
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String {
        self.identifier.serialize_with(binds, aliases)
    }
}

impl fmt::Display for TableIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)
    }
}

impl fmt::Debug for TableIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TableIdentifier({})", self.identifier)
    }
}

/// A table identifier tagged with the entity type it was built for.
///
/// The tag is compile-time only: equality and hashing look at the name, so
/// identifiers with different tags but the same name are interchangeable.
pub struct TypedTableIdentifier<T> {
    table: TableIdentifier,
    _entity: PhantomData<fn() -> T>,
}

impl<T: SqlTable> TypedTableIdentifier<T> {
    pub fn new() -> Self {
        Self::with_identifier(Identifier::new(T::sql_table_identifier_string()))
    }
}

impl<T: SqlTable> Default for TypedTableIdentifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TypedTableIdentifier<T> {
    pub fn with_identifier(identifier: Identifier) -> Self {
        Self {
            table: TableIdentifier::new(identifier),
            _entity: PhantomData,
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.table.identifier
    }

    pub fn untyped(&self) -> &TableIdentifier {
        &self.table
    }

    pub fn into_untyped(self) -> TableIdentifier {
        self.table
    }
}

impl<T> Clone for TypedTableIdentifier<T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T, U> PartialEq<TypedTableIdentifier<U>> for TypedTableIdentifier<T> {
    fn eq(&self, other: &TypedTableIdentifier<U>) -> bool {
        self.table == other.table
    }
}

impl<T> Eq for TypedTableIdentifier<T> {}

impl<T> PartialEq<TableIdentifier> for TypedTableIdentifier<T> {
    fn eq(&self, other: &TableIdentifier) -> bool {
        &self.table == other
    }
}

impl<T> Hash for TypedTableIdentifier<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state)
    }
}

impl<T> From<TypedTableIdentifier<T>> for TableIdentifier {
    fn from(typed: TypedTableIdentifier<T>) -> Self {
        typed.table
    }
}

impl<T> TableRef for TypedTableIdentifier<T> {
    fn table_name(&self) -> &str {
        self.table.table_name()
    }
}

impl<T> SqlSerializable for TypedTableIdentifier<T> {
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String {
        self.table.serialize_with(binds, aliases)
    }
}

impl<T> fmt::Debug for TypedTableIdentifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedTableIdentifier({})", self.table.identifier)
    }
}
