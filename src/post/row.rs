use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(i64),
    String(String),
}

impl FieldValue {
    /// Render the value as text; numbers use their decimal form.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::String(s) => s.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RowError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid sentence index: {0}")]
    InvalidSentenceIndex(String),
    #[error("Row {index}: {source}")]
    AtRow {
        index: usize,
        #[source]
        source: Box<RowError>,
    },
}

impl RowError {
    pub(crate) fn at(self, index: usize) -> Self {
        RowError::AtRow {
            index,
            source: Box::new(self),
        }
    }
}

/// One loosely-typed input row, keyed by column header.
///
/// Lookups through [`Row::field`] ignore header casing and separators, so
/// `Sentence ID`, `sentence_id` and `SENTENCE-ID` all name the same column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    inner: BTreeMap<String, FieldValue>,
}

impl Row {
    pub fn new() -> Self {
        Row {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), FieldValue::String(value.into()));
    }

    pub fn insert_number(&mut self, key: impl Into<String>, value: i64) {
        self.inner.insert(key.into(), FieldValue::Number(value));
    }

    /// Header-insensitive lookup; the first matching column in key order wins.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        let wanted = normalize_header(name);
        self.inner
            .iter()
            .find(|(k, _)| normalize_header(k) == wanted)
            .map(|(_, v)| v)
    }

    /// First column found among `names`, tried in order.
    pub fn field_any(&self, names: &[&str]) -> Option<&FieldValue> {
        names.iter().find_map(|name| self.field(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.inner.iter()
    }
}

/// Lowercase, with `_`, `-` and whitespace runs collapsed to one space.
pub fn normalize_header(header: &str) -> String {
    header
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
