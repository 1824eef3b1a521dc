use crate::{
    ast::{ColumnDefinition, TableConstraint},
    identifier::TableIdentifier,
    serializer::{Binds, SqlSerializable, TableAliases},
};

/// `CREATE [TEMPORARY] TABLE [IF NOT EXISTS] <table> (<columns>, <constraints>)`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Create the table in the temporary schema.
    pub temporary: bool,
    /// Do nothing when a table or view with this name already exists.
    pub if_not_exists: bool,
    pub table: TableIdentifier,
    pub columns: Vec<ColumnDefinition>,
    pub table_constraints: Vec<TableConstraint>,
}

impl CreateTable {
    pub fn new(table: TableIdentifier) -> Self {
        Self {
            temporary: false,
            if_not_exists: false,
            table,
            columns: vec![],
            table_constraints: vec![],
        }
    }

    pub fn temporary(mut self) -> Self {
        self.temporary = true;
        self
    }

    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    pub fn column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    pub fn constraint(mut self, constraint: TableConstraint) -> Self {
        self.table_constraints.push(constraint);
        self
    }
}

/// Starts an empty [`CreateTable`].
pub fn create_table(table: TableIdentifier) -> CreateTable {
    CreateTable::new(table)
}

impl SqlSerializable for CreateTable {
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String {
        let mut sql: Vec<String> = vec![];
        sql.push("CREATE".to_string());
        if self.temporary {
            sql.push("TEMPORARY".to_string());
        }
        sql.push("TABLE".to_string());
        if self.if_not_exists {
            sql.push("IF NOT EXISTS".to_string());
        }
        sql.push(self.table.serialize_with(binds, aliases));

        let mut actions: Vec<String> = vec![];
        for column in &self.columns {
            actions.push(column.serialize_with(binds, aliases));
        }
        for constraint in &self.table_constraints {
            actions.push(constraint.serialize_with(binds, aliases));
        }
        sql.push(format!("({})", actions.join(", ")));

        sql.join(" ")
    }
}
