use crate::{
    ast::{CreateIndex, CreateTable, Delete},
    serializer::{Binds, SqlSerializable, TableAliases},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateTable(CreateTable),
    CreateIndex(CreateIndex),
    Delete(Delete),
}

impl From<CreateTable> for Statement {
    fn from(stmt: CreateTable) -> Self {
        Statement::CreateTable(stmt)
    }
}

impl From<CreateIndex> for Statement {
    fn from(stmt: CreateIndex) -> Self {
        Statement::CreateIndex(stmt)
    }
}

impl From<Delete> for Statement {
    fn from(stmt: Delete) -> Self {
        Statement::Delete(stmt)
    }
}

impl SqlSerializable for Statement {
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String {
        match self {
            Statement::CreateTable(stmt) => stmt.serialize_with(binds, aliases),
            Statement::CreateIndex(stmt) => stmt.serialize_with(binds, aliases),
            Statement::Delete(stmt) => stmt.serialize_with(binds, aliases),
        }
    }
}
