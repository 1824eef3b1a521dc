use ordered_float::NotNan;
use std::fmt::{self, Display};

use crate::{
    serializer::{Binds, SqlSerializable, TableAliases},
    SqlError,
};

/// A constant inlined into the SQL text.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    String(String),
    Int(i64),
    Float(NotNan<f64>),
    Bool(bool),
    Null,
}

impl Literal {
    /// Only finite values have a SQL spelling.
    pub fn float(value: f64) -> Result<Literal, SqlError> {
        if !value.is_finite() {
            return Err(SqlError::InvalidLiteral(format!("{} has no SQL literal", value)));
        }
        NotNan::new(value)
            .map(Literal::Float)
            .map_err(|_| SqlError::InvalidLiteral("NaN has no SQL literal".to_string()))
    }
}

impl SqlSerializable for Literal {
    fn serialize_with(&self, _binds: &mut Binds, _aliases: Option<&TableAliases>) -> String {
        self.to_string()
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value as i64)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl TryFrom<NotNan<f64>> for Literal {
    type Error = SqlError;

    fn try_from(value: NotNan<f64>) -> Result<Self, Self::Error> {
        Literal::float(value.into_inner())
    }
}

/// The SQL spelling of the constant.
impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Float(n) => write!(f, "{:?}", n.into_inner()),
            Literal::Bool(true) => write!(f, "TRUE"),
            Literal::Bool(false) => write!(f, "FALSE"),
            Literal::Null => write!(f, "NULL"),
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(_) => write!(f, "String({})", self),
            Literal::Int(_) => write!(f, "Int({})", self),
            Literal::Float(_) => write!(f, "Float({})", self),
            Literal::Bool(_) => write!(f, "Bool({})", self),
            Literal::Null => write!(f, "Null"),
        }
    }
}
