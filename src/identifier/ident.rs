use std::fmt;

use crate::serializer::{Binds, SqlSerializable, TableAliases};

/// A bare SQL name: table, column, index or alias.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// Creates an [`Identifier`] from a raw name.
pub fn identifier(name: impl Into<String>) -> Identifier {
    Identifier::new(name)
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::new(name)
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::new(name)
    }
}

impl SqlSerializable for Identifier {
    fn serialize_with(&self, binds: &mut Binds, _aliases: Option<&TableAliases>) -> String {
        binds.config().quote_identifier(&self.name)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.name)
    }
}
