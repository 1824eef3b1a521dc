use std::fmt;

use crate::serializer::{Binds, SqlSerializable, TableAliases};

/// Column type in a `CREATE TABLE` column definition.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    Integer,
    BigInt,
    Real,
    Double,
    Text,
    Varchar(Option<u32>),
    Boolean,
    Blob,
    Timestamp,
    /// Any spelling the enum does not cover, rendered verbatim.
    Custom(String),
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Integer => write!(f, "INTEGER"),
            DataType::BigInt => write!(f, "BIGINT"),
            DataType::Real => write!(f, "REAL"),
            DataType::Double => write!(f, "DOUBLE PRECISION"),
            DataType::Text => write!(f, "TEXT"),
            DataType::Varchar(Some(length)) => write!(f, "VARCHAR({})", length),
            DataType::Varchar(None) => write!(f, "VARCHAR"),
            DataType::Boolean => write!(f, "BOOLEAN"),
            DataType::Blob => write!(f, "BLOB"),
            DataType::Timestamp => write!(f, "TIMESTAMP"),
            DataType::Custom(name) => write!(f, "{}", name),
        }
    }
}

impl fmt::Debug for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataType({})", self)
    }
}

impl SqlSerializable for DataType {
    fn serialize_with(&self, _binds: &mut Binds, _aliases: Option<&TableAliases>) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::DataType;

    #[test]
    pub fn test_data_type_text() {
        assert_eq!(DataType::Varchar(Some(255)).to_string(), "VARCHAR(255)");
        assert_eq!(DataType::Varchar(None).to_string(), "VARCHAR");
        assert_eq!(DataType::Double.to_string(), "DOUBLE PRECISION");
        assert_eq!(DataType::Custom("JSONB".to_string()).to_string(), "JSONB");
    }
}
