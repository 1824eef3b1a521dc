use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::serializer::{Binds, DialectConfig, TableAliases};

/// Anything that renders to SQL text.
///
/// Placeholders introduced while rendering push their value into `binds` in
/// the order they appear in the text. When `aliases` is present, column
/// references to a registered table render the alias instead of the table
/// name. Nodes with children must hand the same `aliases` to every child.
pub trait SqlSerializable {
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String;

    /// Serializes with no alias substitution.
    fn serialize(&self, binds: &mut Binds) -> String {
        self.serialize_with(binds, None)
    }
}

impl<T: SqlSerializable + ?Sized> SqlSerializable for &T {
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String {
        (**self).serialize_with(binds, aliases)
    }
}

impl<T: SqlSerializable + ?Sized> SqlSerializable for Box<T> {
    fn serialize_with(&self, binds: &mut Binds, aliases: Option<&TableAliases>) -> String {
        (**self).serialize_with(binds, aliases)
    }
}

/// Serializes every item with the same aliases and joins the fragments.
pub fn serialize_list<T: SqlSerializable>(
    items: &[T],
    binds: &mut Binds,
    aliases: Option<&TableAliases>,
    separator: &str,
) -> String {
    items
        .iter()
        .map(|item| item.serialize_with(binds, aliases))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Entry point used by statement builders and drivers.
pub fn serialize<N: SqlSerializable + ?Sized>(
    node: &N,
    binds: &mut Binds,
    aliases: Option<&TableAliases>,
) -> String {
    node.serialize_with(binds, aliases)
}

/// Rendered SQL text plus the values for its placeholders, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedQuery {
    pub sql: String,
    pub binds: Vec<Value>,
}

/// Renders with the default dialect and no aliases.
pub fn render<N: SqlSerializable + ?Sized>(node: &N) -> RenderedQuery {
    render_with(node, DialectConfig::default())
}

pub fn render_with<N: SqlSerializable + ?Sized>(node: &N, config: DialectConfig) -> RenderedQuery {
    let mut binds = Binds::with_config(config);
    let sql = node.serialize(&mut binds);
    RenderedQuery { sql, binds: binds.into_values() }
}
