use std::fmt;

use crate::{
    identifier::{Identifier, TableIdentifier},
    serializer::{serialize_list, Binds, SqlSerializable, TableAliases},
};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForeignKeyAction {
    NoAction,
    Restrict,
    SetNull,
    SetDefault,
    Cascade,
}

impl fmt::Display for ForeignKeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForeignKeyAction::NoAction => write!(f, "NO ACTION"),
            ForeignKeyAction::Restrict => write!(f, "RESTRICT"),
            ForeignKeyAction::SetNull => write!(f, "SET NULL"),
            ForeignKeyAction::SetDefault => write!(f, "SET DEFAULT"),
            ForeignKeyAction::Cascade => write!(f, "CASCADE"),
        }
    }
}

impl fmt::Debug for ForeignKeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ForeignKeyAction({})", self)
    }
}

/// `REFERENCES <table> [(<columns>)] [ON DELETE <action>] [ON UPDATE <action>]`
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub table: TableIdentifier,
    pub columns: Vec<Identifier>,
    pub on_delete: Option<ForeignKeyAction>,
    pub on_update: Option<ForeignKeyAction>,
}

impl ForeignKey {
    pub fn new(table: TableIdentifier, columns: Vec<Identifier>) -> Self {
        Self { table, columns, on_delete: None, on_update: None }
    }

    pub fn on_delete(mut self, action: ForeignKeyAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    pub fn on_update(mut self, action: ForeignKeyAction) -> Self {
        self.on_update = Some(action);
        self
    }
}

impl SqlSerializable for ForeignKey {
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String {
        let mut sql: Vec<String> = vec![];
        sql.push("REFERENCES".to_string());
        sql.push(self.table.serialize_with(binds, aliases));
        if !self.columns.is_empty() {
            sql.push(format!("({})", serialize_list(&self.columns, binds, aliases, ", ")));
        }
        if let Some(action) = self.on_delete {
            sql.push(format!("ON DELETE {}", action));
        }
        if let Some(action) = self.on_update {
            sql.push(format!("ON UPDATE {}", action));
        }
        sql.join(" ")
    }
}
