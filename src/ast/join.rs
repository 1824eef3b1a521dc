use std::fmt;

use crate::{
    ast::Expression,
    identifier::{Identifier, TableIdentifier},
    serializer::{Binds, SqlSerializable, TableAliases},
};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinMethod {
    Inner,
    Left,
    LeftOuter,
    Right,
    RightOuter,
    Full,
    FullOuter,
    Cross,
}

impl fmt::Display for JoinMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinMethod::Inner => write!(f, "INNER"),
            JoinMethod::Left => write!(f, "LEFT"),
            JoinMethod::LeftOuter => write!(f, "LEFT OUTER"),
            JoinMethod::Right => write!(f, "RIGHT"),
            JoinMethod::RightOuter => write!(f, "RIGHT OUTER"),
            JoinMethod::Full => write!(f, "FULL"),
            JoinMethod::FullOuter => write!(f, "FULL OUTER"),
            JoinMethod::Cross => write!(f, "CROSS"),
        }
    }
}

impl fmt::Debug for JoinMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JoinMethod({})", self)
    }
}

impl SqlSerializable for JoinMethod {
    fn serialize_with(&self, _binds: &mut Binds, _aliases: Option<&TableAliases>) -> String {
        self.to_string()
    }
}

/// `<method> JOIN <table> [AS <alias>] ON <expression>`
///
/// With an alias, the expression is rendered under a map holding only
/// `table -> alias`, replacing whatever aliases the caller passed. The
/// map lives for that one expression, so sibling joins and the enclosing
/// statement never see it. A predicate therefore sees at most one aliased
/// table through a join.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub method: JoinMethod,
    pub table: TableIdentifier,
    pub expression: Expression,
    pub alias: Option<Identifier>,
}

impl Join {
    pub fn new(method: JoinMethod, table: TableIdentifier, expression: Expression, alias: Option<Identifier>) -> Self {
        Self { method, table, expression, alias }
    }

    pub fn alias(mut self, alias: Identifier) -> Self {
        self.alias = Some(alias);
        self
    }
}

/// Builds a [`Join`].
pub fn join(method: JoinMethod, table: TableIdentifier, expression: Expression, alias: Option<Identifier>) -> Join {
    Join::new(method, table, expression, alias)
}

impl SqlSerializable for Join {
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String {
        let mut sql: Vec<String> = vec![];
        sql.push(self.method.serialize_with(binds, aliases));
        sql.push("JOIN".to_string());
        sql.push(self.table.serialize_with(binds, aliases));

        match &self.alias {
            Some(alias) => {
                sql.push("AS".to_string());
                sql.push(alias.serialize_with(binds, aliases));
                sql.push("ON".to_string());

                let scope = TableAliases::single(&self.table, alias.clone());
                tracing::debug!(table = %self.table, alias = %alias, "join alias scope installed");
                sql.push(self.expression.serialize_with(binds, Some(&scope)));
            }
            None => {
                sql.push("ON".to_string());
                sql.push(self.expression.serialize_with(binds, aliases));
            }
        }

        sql.join(" ")
    }
}
