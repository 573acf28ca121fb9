use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::identifiers::PostId;
use super::row::{FieldValue, Row, RowError};

pub const ID_COLUMNS: &[&str] = &["ID", "shortcode"];
pub const CAPTION_COLUMNS: &[&str] = &["Context", "caption"];

/// A single post: an opaque id and its caption.
///
/// Deserializes from canonical (`ID`/`Context`) or raw export
/// (`shortcode`/`caption`) field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "ID", alias = "shortcode", alias = "id")]
    pub id: PostId,
    #[serde(
        rename = "Context",
        alias = "caption",
        alias = "context",
        default,
        deserialize_with = "text_or_missing"
    )]
    pub caption: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CaptionField {
    Text(String),
    Other(IgnoredAny),
}

/// Any non-string caption is read as missing, same as [`Post::from_row`].
fn text_or_missing<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<CaptionField>::deserialize(deserializer)? {
        Some(CaptionField::Text(s)) => Some(s),
        Some(CaptionField::Other(_)) | None => None,
    })
}

impl Post {
    pub fn new(id: impl Into<PostId>, caption: impl Into<String>) -> Self {
        Post {
            id: id.into(),
            caption: Some(caption.into()),
        }
    }

    /// A post whose caption is missing altogether.
    pub fn without_caption(id: impl Into<PostId>) -> Self {
        Post {
            id: id.into(),
            caption: None,
        }
    }

    /// The caption, with a missing one read as empty.
    pub fn caption_text(&self) -> &str {
        self.caption.as_deref().unwrap_or("")
    }

    /// Build a post from a raw row. Columns other than id and caption are
    /// ignored; a non-text caption counts as missing.
    pub fn from_row(row: &Row) -> Result<Self, RowError> {
        let id = match row.field_any(ID_COLUMNS) {
            Some(FieldValue::Number(n)) => PostId::Number(*n),
            Some(FieldValue::String(s)) => PostId::Text(s.clone()),
            None => return Err(RowError::MissingField("ID")),
        };

        let caption = match row.field_any(CAPTION_COLUMNS) {
            Some(FieldValue::String(s)) => Some(s.clone()),
            _ => None,
        };

        Ok(Post { id, caption })
    }
}
