use crate::{
    ast::{Expression, ForeignKey},
    identifier::Identifier,
    serializer::{serialize_list, Binds, SqlSerializable, TableAliases},
};

#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraintKind {
    PrimaryKey(Vec<Identifier>),
    Unique(Vec<Identifier>),
    Check(Expression),
    ForeignKey { columns: Vec<Identifier>, references: ForeignKey },
}

/// `[CONSTRAINT <name>] <kind>` listed after the columns of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConstraint {
    pub name: Option<Identifier>,
    pub kind: TableConstraintKind,
}

impl TableConstraint {
    pub fn new(kind: TableConstraintKind) -> Self {
        Self { name: None, kind }
    }

    pub fn named(name: Identifier, kind: TableConstraintKind) -> Self {
        Self { name: Some(name), kind }
    }

    pub fn primary_key(columns: Vec<Identifier>) -> Self {
        Self::new(TableConstraintKind::PrimaryKey(columns))
    }

    pub fn unique(columns: Vec<Identifier>) -> Self {
        Self::new(TableConstraintKind::Unique(columns))
    }

    pub fn check(expr: Expression) -> Self {
        Self::new(TableConstraintKind::Check(expr))
    }

    pub fn foreign_key(columns: Vec<Identifier>, references: ForeignKey) -> Self {
        Self::new(TableConstraintKind::ForeignKey { columns, references })
    }
}

impl SqlSerializable for TableConstraint {
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String {
        let mut sql: Vec<String> = vec![];
        if let Some(name) = &self.name {
            sql.push("CONSTRAINT".to_string());
            sql.push(name.serialize_with(binds, aliases));
        }

        match &self.kind {
            TableConstraintKind::PrimaryKey(columns) => {
                sql.push("PRIMARY KEY".to_string());
                sql.push(format!("({})", serialize_list(columns, binds, aliases, ", ")));
            }
            TableConstraintKind::Unique(columns) => {
                sql.push("UNIQUE".to_string());
                sql.push(format!("({})", serialize_list(columns, binds, aliases, ", ")));
            }
            TableConstraintKind::Check(expr) => {
                sql.push("CHECK".to_string());
                sql.push(format!("({})", expr.serialize_with(binds, aliases)));
            }
            TableConstraintKind::ForeignKey { columns, references } => {
                sql.push("FOREIGN KEY".to_string());
                sql.push(format!("({})", serialize_list(columns, binds, aliases, ", ")));
                sql.push(references.serialize_with(binds, aliases));
            }
        }

        sql.join(" ")
    }
}
