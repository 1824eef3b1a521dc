use crate::{
    ast::Expression,
    identifier::TableIdentifier,
    serializer::{Binds, SqlSerializable, TableAliases},
};

/// `DELETE FROM <table> [WHERE <predicate>]`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: TableIdentifier,
    /// Rows matching this are deleted. Without it every row is deleted.
    pub predicate: Option<Expression>,
}

impl Delete {
    pub fn new(table: TableIdentifier) -> Self {
        Self { table, predicate: None }
    }

    pub fn predicate(mut self, predicate: Expression) -> Self {
        self.predicate = Some(predicate);
        self
    }
}

/// Starts a [`Delete`] with no predicate.
pub fn delete(table: TableIdentifier) -> Delete {
    Delete::new(table)
}

impl SqlSerializable for Delete {
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String {
        let mut sql: Vec<String> = vec![];
        sql.push("DELETE FROM".to_string());
        sql.push(self.table.serialize_with(binds, aliases));
        if let Some(predicate) = &self.predicate {
            sql.push("WHERE".to_string());
            sql.push(predicate.serialize_with(binds, aliases));
        }
        sql.join(" ")
    }
}
