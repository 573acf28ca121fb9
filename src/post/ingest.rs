use crate::types::identifiers::PostId;
use crate::types::record::Record;
use super::post::Post;
use super::row::{FieldValue, Row, RowError};

pub const SENTENCE_INDEX_COLUMN: &str = "Sentence ID";
pub const STATEMENT_COLUMN: &str = "Statement";
pub const CONTEXT_COLUMN: &str = "Context";

impl Record {
    /// Rebuild a record from a pre-tokenized row.
    ///
    /// All four canonical columns are required. The sentence index accepts an
    /// integer or an integer string and must be at least 1.
    pub fn from_row(row: &Row) -> Result<Self, RowError> {
        let id = match row.field("ID") {
            Some(FieldValue::Number(n)) => PostId::Number(*n),
            Some(FieldValue::String(s)) => PostId::Text(s.clone()),
            None => return Err(RowError::MissingField("ID")),
        };

        let context = row
            .field(CONTEXT_COLUMN)
            .ok_or(RowError::MissingField(CONTEXT_COLUMN))?
            .to_text();

        let sentence_index = row
            .field(SENTENCE_INDEX_COLUMN)
            .ok_or(RowError::MissingField(SENTENCE_INDEX_COLUMN))
            .and_then(parse_sentence_index)?;

        let statement = row
            .field(STATEMENT_COLUMN)
            .ok_or(RowError::MissingField(STATEMENT_COLUMN))?
            .to_text();

        Ok(Record {
            id,
            context,
            sentence_index,
            statement,
        })
    }
}

fn parse_sentence_index(value: &FieldValue) -> Result<usize, RowError> {
    let parsed = match value {
        FieldValue::Number(n) => usize::try_from(*n).ok(),
        FieldValue::String(s) => s.trim().parse::<usize>().ok(),
    };

    match parsed {
        Some(index) if index >= 1 => Ok(index),
        _ => Err(RowError::InvalidSentenceIndex(value.to_text())),
    }
}

/// Convert raw export rows into posts, stopping at the first bad row.
pub fn posts_from_rows(rows: &[Row]) -> Result<Vec<Post>, RowError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| Post::from_row(row).map_err(|e| e.at(i)))
        .collect()
}

/// Convert pre-tokenized rows into records, stopping at the first bad row.
pub fn records_from_rows(rows: &[Row]) -> Result<Vec<Record>, RowError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| Record::from_row(row).map_err(|e| e.at(i)))
        .collect()
}
