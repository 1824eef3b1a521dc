use serde_json::Value;

use crate::serializer::DialectConfig;

/// Ordered accumulator of bound values for one serialization call.
///
/// Pushing a value hands back the placeholder that stands for it, so the Nth
/// value always matches the Nth placeholder as long as nodes serialize their
/// children left to right.
#[derive(Debug, Clone, Default)]
pub struct Binds {
    values: Vec<Value>,
    config: DialectConfig,
}

impl Binds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DialectConfig) -> Self {
        Self { values: vec![], config }
    }

    pub fn config(&self) -> &DialectConfig {
        &self.config
    }

    /// Appends a value and returns its placeholder text.
    pub fn push(&mut self, value: Value) -> String {
        self.values.push(value);
        let position = self.values.len();
        tracing::trace!(position, "bind appended");
        self.config.placeholder(position)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
