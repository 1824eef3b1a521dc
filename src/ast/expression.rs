use serde::Serialize;
use serde_json::Value;

use crate::{
    ast::{BinaryOperator, Literal, NOT_PRECEDENCE},
    identifier::{ColumnIdentifier, Identifier},
    serializer::{serialize_list, Binds, SqlSerializable, TableAliases},
    SqlError,
};

/// A scalar or boolean SQL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Column(ColumnIdentifier),
    Literal(Literal),
    /// Rendered as a placeholder; the value goes to the bind list.
    Bind(Value),
    Binary { left: Box<Expression>, op: BinaryOperator, right: Box<Expression> },
    Not(Box<Expression>),
    IsNull { expr: Box<Expression>, negated: bool },
    InList { expr: Box<Expression>, list: Vec<Expression>, negated: bool },
    Function { name: Identifier, args: Vec<Expression> },
    Group(Box<Expression>),
    /// Inserted verbatim.
    Raw(String),
}

#[allow(clippy::should_implement_trait)]
impl Expression {
    pub fn column(column: ColumnIdentifier) -> Self {
        Self::Column(column)
    }

    pub fn literal(literal: impl Into<Literal>) -> Self {
        Self::Literal(literal.into())
    }

    /// Encodes `value` as a bound value.
    pub fn bind<T: Serialize + ?Sized>(value: &T) -> Result<Self, SqlError> {
        Ok(Self::Bind(serde_json::to_value(value)?))
    }

    pub fn bind_value(value: Value) -> Self {
        Self::Bind(value)
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }

    pub fn function(name: Identifier, args: Vec<Expression>) -> Self {
        Self::Function { name, args }
    }

    pub fn group(expr: Expression) -> Self {
        Self::Group(Box::new(expr))
    }

    pub fn binary(self, op: BinaryOperator, right: Expression) -> Self {
        Self::Binary { left: Box::new(self), op, right: Box::new(right) }
    }

    pub fn eq(self, right: Expression) -> Self {
        self.binary(BinaryOperator::Eq, right)
    }

    pub fn not_eq(self, right: Expression) -> Self {
        self.binary(BinaryOperator::NotEq, right)
    }

    pub fn lt(self, right: Expression) -> Self {
        self.binary(BinaryOperator::Lt, right)
    }

    pub fn lt_eq(self, right: Expression) -> Self {
        self.binary(BinaryOperator::LtEq, right)
    }

    pub fn gt(self, right: Expression) -> Self {
        self.binary(BinaryOperator::Gt, right)
    }

    pub fn gt_eq(self, right: Expression) -> Self {
        self.binary(BinaryOperator::GtEq, right)
    }

    pub fn like(self, pattern: Expression) -> Self {
        self.binary(BinaryOperator::Like, pattern)
    }

    pub fn and(self, right: Expression) -> Self {
        self.binary(BinaryOperator::And, right)
    }

    pub fn or(self, right: Expression) -> Self {
        self.binary(BinaryOperator::Or, right)
    }

    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    pub fn is_null(self) -> Self {
        Self::IsNull { expr: Box::new(self), negated: false }
    }

    pub fn is_not_null(self) -> Self {
        Self::IsNull { expr: Box::new(self), negated: true }
    }

    pub fn in_list(self, list: Vec<Expression>) -> Self {
        Self::InList { expr: Box::new(self), list, negated: false }
    }

    pub fn not_in_list(self, list: Vec<Expression>) -> Self {
        Self::InList { expr: Box::new(self), list, negated: true }
    }

    fn operand(&self, binds: &mut Binds, aliases: Option<&TableAliases>, wrap: bool) -> String {
        let sql = self.serialize_with(binds, aliases);
        if wrap {
            format!("({})", sql)
        } else {
            sql
        }
    }

    /// Binding strength when rendered bare, `None` for atoms.
    fn precedence(&self) -> Option<u8> {
        match self {
            Expression::Binary { op, .. } => Some(op.precedence()),
            Expression::Not(_) => Some(NOT_PRECEDENCE),
            _ => None,
        }
    }

    /// Whether this operand needs parentheses as a child of `parent`.
    fn grouped_under(&self, parent: &BinaryOperator, right: bool) -> bool {
        let Some(precedence) = self.precedence() else {
            return false;
        };

        if let Expression::Binary { op, .. } = self {
            if op.mixes_with(parent) {
                return true;
            }
            if right && precedence == parent.precedence() {
                return !(op == parent && parent.is_associative());
            }
        }

        precedence < parent.precedence()
    }

    /// Operands of `NOT`, `IS NULL` and `IN` are grouped unless atomic.
    fn is_compound(&self) -> bool {
        self.precedence().is_some()
    }
}

impl From<ColumnIdentifier> for Expression {
    fn from(column: ColumnIdentifier) -> Self {
        Expression::Column(column)
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Literal(literal)
    }
}

impl SqlSerializable for Expression {
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String {
        match self {
            Expression::Column(column) => column.serialize_with(binds, aliases),
            Expression::Literal(literal) => literal.serialize_with(binds, aliases),
            Expression::Bind(value) => binds.push(value.clone()),
            Expression::Binary { left, op, right } => {
                let left_wrap = left.grouped_under(op, false);
                let right_wrap = right.grouped_under(op, true);

                let left = left.operand(binds, aliases, left_wrap);
                let right = right.operand(binds, aliases, right_wrap);
                format!("{} {} {}", left, op, right)
            }
            Expression::Not(expr) => {
                let wrap = expr.is_compound();
                format!("NOT {}", expr.operand(binds, aliases, wrap))
            }
            Expression::IsNull { expr, negated } => {
                let wrap = expr.is_compound();
                let expr = expr.operand(binds, aliases, wrap);
                match negated {
                    true => format!("{} IS NOT NULL", expr),
                    false => format!("{} IS NULL", expr),
                }
            }
            Expression::InList { expr, list, negated } => {
                let wrap = expr.is_compound();
                let expr = expr.operand(binds, aliases, wrap);
                let list = serialize_list(list, binds, aliases, ", ");
                match negated {
                    true => format!("{} NOT IN ({})", expr, list),
                    false => format!("{} IN ({})", expr, list),
                }
            }
            Expression::Function { name, args } => {
                let name = name.serialize_with(binds, aliases);
                format!("{}({})", name, serialize_list(args, binds, aliases, ", "))
            }
            Expression::Group(expr) => format!("({})", expr.serialize_with(binds, aliases)),
            Expression::Raw(sql) => sql.clone(),
        }
    }
}
