use crate::{
    ast::{DataType, Expression, ForeignKey},
    identifier::Identifier,
    serializer::{Binds, SqlSerializable, TableAliases},
};

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnConstraintKind {
    PrimaryKey { autoincrement: bool },
    NotNull,
    Unique,
    Default(Expression),
    Check(Expression),
    Collate(Identifier),
    References(ForeignKey),
}

/// `[CONSTRAINT <name>] <kind>` attached to a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnConstraint {
    pub name: Option<Identifier>,
    pub kind: ColumnConstraintKind,
}

impl ColumnConstraint {
    pub fn new(kind: ColumnConstraintKind) -> Self {
        Self { name: None, kind }
    }

    pub fn named(name: Identifier, kind: ColumnConstraintKind) -> Self {
        Self { name: Some(name), kind }
    }
}

impl SqlSerializable for ColumnConstraint {
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String {
        let mut sql: Vec<String> = vec![];
        if let Some(name) = &self.name {
            sql.push("CONSTRAINT".to_string());
            sql.push(name.serialize_with(binds, aliases));
        }

        match &self.kind {
            ColumnConstraintKind::PrimaryKey { autoincrement } => {
                sql.push("PRIMARY KEY".to_string());
                if *autoincrement {
                    sql.push("AUTOINCREMENT".to_string());
                }
            }
            ColumnConstraintKind::NotNull => sql.push("NOT NULL".to_string()),
            ColumnConstraintKind::Unique => sql.push("UNIQUE".to_string()),
            ColumnConstraintKind::Default(expr) => {
                sql.push("DEFAULT".to_string());
                sql.push(expr.serialize_with(binds, aliases));
            }
            ColumnConstraintKind::Check(expr) => {
                sql.push("CHECK".to_string());
                sql.push(format!("({})", expr.serialize_with(binds, aliases)));
            }
            ColumnConstraintKind::Collate(collation) => {
                sql.push("COLLATE".to_string());
                sql.push(collation.serialize_with(binds, aliases));
            }
            ColumnConstraintKind::References(foreign_key) => sql.push(foreign_key.serialize_with(binds, aliases)),
        }

        sql.join(" ")
    }
}

/// `<name> <type> [<constraints>...]`
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: Identifier,
    pub data_type: DataType,
    pub constraints: Vec<ColumnConstraint>,
}

impl ColumnDefinition {
    pub fn new(name: Identifier, data_type: DataType) -> Self {
        Self { name, data_type, constraints: vec![] }
    }

    pub fn constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn primary_key(self, autoincrement: bool) -> Self {
        self.constraint(ColumnConstraint::new(ColumnConstraintKind::PrimaryKey { autoincrement }))
    }

    pub fn not_null(self) -> Self {
        self.constraint(ColumnConstraint::new(ColumnConstraintKind::NotNull))
    }

    pub fn unique(self) -> Self {
        self.constraint(ColumnConstraint::new(ColumnConstraintKind::Unique))
    }

    pub fn default_value(self, expr: Expression) -> Self {
        self.constraint(ColumnConstraint::new(ColumnConstraintKind::Default(expr)))
    }

    pub fn check(self, expr: Expression) -> Self {
        self.constraint(ColumnConstraint::new(ColumnConstraintKind::Check(expr)))
    }

    pub fn collate(self, collation: Identifier) -> Self {
        self.constraint(ColumnConstraint::new(ColumnConstraintKind::Collate(collation)))
    }

    pub fn references(self, foreign_key: ForeignKey) -> Self {
        self.constraint(ColumnConstraint::new(ColumnConstraintKind::References(foreign_key)))
    }
}

impl SqlSerializable for ColumnDefinition {
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String {
        let mut sql: Vec<String> = vec![];
        sql.push(self.name.serialize_with(binds, aliases));
        sql.push(self.data_type.serialize_with(binds, aliases));
        for constraint in &self.constraints {
            sql.push(constraint.serialize_with(binds, aliases));
        }
        sql.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        ast::{ColumnConstraint, ColumnConstraintKind, ColumnDefinition, DataType, Expression, ForeignKey, ForeignKeyAction},
        identifier::{column, identifier, table},
        serializer::{Binds, SqlSerializable},
    };

    #[test]
    pub fn test_bare_column() {
        let def = ColumnDefinition::new(identifier("name"), DataType::Text);

        let mut binds = Binds::new();
        assert_eq!(def.serialize(&mut binds), "name TEXT");
    }

    #[test]
    pub fn test_column_constraints_in_declaration_order() {
        let def = ColumnDefinition::new(identifier("id"), DataType::Integer)
            .primary_key(true)
            .not_null()
            .unique();

        let mut binds = Binds::new();
        assert_eq!(def.serialize(&mut binds), "id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL UNIQUE");
    }

    #[test]
    pub fn test_default_and_check() {
        let radius = Expression::column(column(None, identifier("radius")));
        let def = ColumnDefinition::new(identifier("radius"), DataType::Real)
            .default_value(Expression::literal(0))
            .check(radius.gt_eq(Expression::bind_value(json!(0))));

        let mut binds = Binds::new();
        assert_eq!(def.serialize(&mut binds), "radius REAL DEFAULT 0 CHECK (radius >= ?)");
        assert_eq!(binds.into_values(), vec![json!(0)]);
    }

    #[test]
    pub fn test_named_reference() {
        let def = ColumnDefinition::new(identifier("galaxy_id"), DataType::BigInt).constraint(ColumnConstraint::named(
            identifier("fk_galaxy"),
            ColumnConstraintKind::References(
                ForeignKey::new(table(identifier("galaxies")), vec![identifier("id")]).on_delete(ForeignKeyAction::Restrict),
            ),
        ));

        let mut binds = Binds::new();
        assert_eq!(
            def.serialize(&mut binds),
            "galaxy_id BIGINT CONSTRAINT fk_galaxy REFERENCES galaxies (id) ON DELETE RESTRICT"
        );
    }

    #[test]
    pub fn test_collate() {
        let def = ColumnDefinition::new(identifier("name"), DataType::Varchar(Some(64))).collate(identifier("NOCASE"));

        let mut binds = Binds::new();
        assert_eq!(def.serialize(&mut binds), "name VARCHAR(64) COLLATE NOCASE");
    }
}
