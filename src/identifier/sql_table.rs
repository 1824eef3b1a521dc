/// Maps a persisted entity type to its table and column names.
///
/// Hosts implement this for their model types. The table name defaults to
/// the type's own name and properties map one-to-one to columns unless
/// `sql_column_name` is overridden.
pub trait SqlTable {
    fn sql_table_identifier_string() -> String {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base).to_string()
    }

    /// Properties that are persisted as columns.
    fn sql_properties() -> &'static [&'static str];

    /// Column name for a property, `None` when the property is not mapped.
    fn sql_column_name(property: &str) -> Option<String> {
        Self::sql_properties()
            .iter()
            .find(|candidate| **candidate == property)
            .map(|candidate| candidate.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::identifier::SqlTable;

    struct Planet;

    impl SqlTable for Planet {
        fn sql_properties() -> &'static [&'static str] {
            &["id", "name", "galaxy_id"]
        }
    }

    struct Galaxy;

    impl SqlTable for Galaxy {
        fn sql_table_identifier_string() -> String {
            "galaxies".to_string()
        }

        fn sql_properties() -> &'static [&'static str] {
            &["id", "name"]
        }

        fn sql_column_name(property: &str) -> Option<String> {
            match property {
                "name" => Some("galaxy_name".to_string()),
                "id" => Some("id".to_string()),
                _ => None,
            }
        }
    }

    #[test]
    pub fn test_default_table_name_is_type_name() {
        assert_eq!(Planet::sql_table_identifier_string(), "Planet");
    }

    #[test]
    pub fn test_default_column_lookup() {
        assert_eq!(Planet::sql_column_name("galaxy_id"), Some("galaxy_id".to_string()));
        assert_eq!(Planet::sql_column_name("moons"), None);
    }

    #[test]
    pub fn test_custom_mapping() {
        assert_eq!(Galaxy::sql_table_identifier_string(), "galaxies");
        assert_eq!(Galaxy::sql_column_name("name"), Some("galaxy_name".to_string()));
    }
}
