use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::types::record::Record;

/// Opaque post identifier, preserved verbatim.
///
/// Numbers stay numbers and strings stay strings on the way through; no
/// coercion happens in either direction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(n) => write!(f, "{n}"),
            PostId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PostId {
    fn from(value: i64) -> Self {
        PostId::Number(value)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        PostId::Text(value.to_string())
    }
}

impl From<String> for PostId {
    fn from(value: String) -> Self {
        PostId::Text(value)
    }
}

/// Content hash of an ordered record set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSetVersion(String);

impl RecordSetVersion {
    /// Order sensitive. Every field is length-prefixed so that no two distinct
    /// record sets share an input stream.
    pub fn from_records(records: &[Record]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update((records.len() as u64).to_le_bytes());

        for record in records {
            let id_tag: &[u8] = match record.id {
                PostId::Number(_) => b"n",
                PostId::Text(_) => b"s",
            };
            hasher.update(id_tag);
            update_field(&mut hasher, record.id.to_string().as_bytes());
            update_field(&mut hasher, record.context.as_bytes());
            hasher.update((record.sentence_index as u64).to_le_bytes());
            update_field(&mut hasher, record.statement.as_bytes());
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        RecordSetVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn update_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}
