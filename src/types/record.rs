use serde::{Deserialize, Serialize};

use crate::types::identifiers::{PostId, RecordSetVersion};

/// One output row: a single statement of a post plus its context.
///
/// Field order is the column order of the serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "ID")]
    pub id: PostId,
    #[serde(rename = "Context")]
    pub context: String,
    /// 1-based, unique within a post.
    #[serde(rename = "Sentence ID")]
    pub sentence_index: usize,
    #[serde(rename = "Statement")]
    pub statement: String,
}

/// Metadata describing the outcome of a transformation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformReport {
    pub posts_considered: usize,
    pub posts_emitted: usize,
    /// Posts whose caption produced no statements.
    pub posts_dropped: usize,
    /// Output rows; under post granularity this is one per post, not one
    /// per statement.
    pub rows_emitted: usize,

    pub version: RecordSetVersion,
}

/// The final result of a transformation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformOutput {
    pub records: Vec<Record>,
    pub report: TransformReport,
}
