//! [`TreeValue`] — the node model the printer renders.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// A nested value the printer knows how to render.
///
/// Containers are `Map` (key insertion order preserved), `List` and `Tuple`;
/// everything else is a scalar rendered via its textual form. Because the
/// tree is owned, reference cycles are unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Map(IndexMap<String, TreeValue>),
    List(Vec<TreeValue>),
    Tuple(Vec<TreeValue>),
}

impl TreeValue {
    /// Build a `Map` from key/value pairs, keeping insertion order.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TreeValue)>,
    {
        TreeValue::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a `List` from an item sequence.
    pub fn list<I: IntoIterator<Item = TreeValue>>(items: I) -> Self {
        TreeValue::List(items.into_iter().collect())
    }

    /// Build a `Tuple` from an item sequence.
    pub fn tuple<I: IntoIterator<Item = TreeValue>>(items: I) -> Self {
        TreeValue::Tuple(items.into_iter().collect())
    }

    pub fn is_container(&self) -> bool {
        matches!(
            self,
            TreeValue::Map(_) | TreeValue::List(_) | TreeValue::Tuple(_)
        )
    }

    /// The line label of this value: the container kind name (`dict`, `list`,
    /// `tuple`), or the scalar's textual form (strings verbatim, no quotes).
    pub fn label(&self) -> String {
        match self {
            TreeValue::Null => "null".to_owned(),
            TreeValue::Bool(b) => b.to_string(),
            TreeValue::Int(n) => n.to_string(),
            TreeValue::UInt(n) => n.to_string(),
            TreeValue::Float(x) => x.to_string(),
            TreeValue::Str(s) => s.clone(),
            TreeValue::Map(_) => "dict".to_owned(),
            TreeValue::List(_) => "list".to_owned(),
            TreeValue::Tuple(_) => "tuple".to_owned(),
        }
    }
}

impl From<JsonValue> for TreeValue {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => TreeValue::Null,
            JsonValue::Bool(b) => TreeValue::Bool(b),
            JsonValue::Number(n) => {
                if let Some(u) = n.as_u64() {
                    TreeValue::UInt(u)
                } else if let Some(i) = n.as_i64() {
                    TreeValue::Int(i)
                } else {
                    TreeValue::Float(n.as_f64().unwrap_or_default())
                }
            }
            JsonValue::String(s) => TreeValue::Str(s),
            JsonValue::Array(items) => {
                TreeValue::List(items.into_iter().map(TreeValue::from).collect())
            }
            // serde_json is built with `preserve_order`, so object iteration
            // order is insertion order.
            JsonValue::Object(entries) => TreeValue::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, TreeValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonValue> for TreeValue {
    fn from(v: &JsonValue) -> Self {
        TreeValue::from(v.clone())
    }
}
