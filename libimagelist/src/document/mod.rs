//! Canonical document tree.
//!
//! YAML and JSON decode into different value types. Both are normalised
//! into [`Document`] at decode time so that traversal only has to deal with
//! one shape.


/// A decoded YAML or JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Ordered key/value entries. Keys are documents because YAML allows
    /// non-string keys; JSON keys are always [`Document::String`].
    Mapping(Vec<(Document, Document)>),
    Sequence(Vec<Document>),
    String(String),
    /// Numbers are kept in their textual form.
    Number(String),
    Bool(bool),
    Null,
}

impl Document {
    /// Returns the string value if this node is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for anything that is not a mapping or a sequence.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Document::Mapping(_) | Document::Sequence(_))
    }
}

impl From<serde_yaml::Value> for Document {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(b),
            Value::Number(n) => Document::Number(n.to_string()),
            Value::String(s) => Document::String(s),
            Value::Sequence(items) => {
                Document::Sequence(items.into_iter().map(Document::from).collect())
            }
            Value::Mapping(map) => Document::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Document::from(k), Document::from(v)))
                    .collect(),
            ),
            // Tags carry no meaning for image discovery
            Value::Tagged(tagged) => Document::from(tagged.value),
        }
    }
}

impl From<serde_json::Value> for Document {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(b),
            Value::Number(n) => Document::Number(n.to_string()),
            Value::String(s) => Document::String(s),
            Value::Array(items) => {
                Document::Sequence(items.into_iter().map(Document::from).collect())
            }
            Value::Object(map) => Document::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Document::String(k), Document::from(v)))
                    .collect(),
            ),
        }
    }
}
