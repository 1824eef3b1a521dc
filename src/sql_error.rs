use std::fmt::Display;

/// Errors raised while building nodes. Serialization itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlError {
    /// The entity mapping has no column for the requested property.
    UnresolvedProperty { table: String, property: String },
    /// A bound value could not be encoded.
    InvalidBindValue(String),
    /// A literal that has no SQL spelling, such as a NaN float.
    InvalidLiteral(String),
}

impl SqlError {
    pub fn unresolved(table: &str, property: &str) -> Self {
        Self::UnresolvedProperty {
            table: table.to_string(),
            property: property.to_string(),
        }
    }

    pub fn err<T>(self) -> Result<T, SqlError> {
        Err(self)
    }
}

impl Display for SqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlError::UnresolvedProperty { table, property } => write!(
                f,
                "SqlError: could not resolve property '{}' on '{}'",
                property,
                table
            ),
            SqlError::InvalidBindValue(reason) => write!(f, "SqlError: invalid bind value: {}", reason),
            SqlError::InvalidLiteral(reason) => write!(f, "SqlError: invalid literal: {}", reason),
        }
    }
}

impl std::error::Error for SqlError {}

impl From<serde_json::Error> for SqlError {
    fn from(err: serde_json::Error) -> Self {
        SqlError::InvalidBindValue(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::SqlError;

    #[test]
    pub fn test_unresolved_display() {
        let err = SqlError::unresolved("Planet", "moons");
        assert_eq!(err.to_string(), "SqlError: could not resolve property 'moons' on 'Planet'");
    }

    #[test]
    pub fn test_from_serde_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        match SqlError::from(source) {
            SqlError::InvalidBindValue(reason) => assert!(!reason.is_empty()),
            _ => panic!(),
        }
    }
}
