use std::collections::HashSet;

use indexmap::IndexMap;

use crate::types::identifiers::PostId;
use crate::types::record::Record;

/// Collapse records to one per post id.
///
/// Ids keep first-encounter order. Each output row carries the first context
/// seen for its id, every statement joined by a single space, and sentence
/// index 1.
pub fn aggregate_posts(records: Vec<Record>) -> Vec<Record> {
    let mut groups: IndexMap<PostId, (String, Vec<String>)> = IndexMap::new();

    for record in records {
        groups
            .entry(record.id)
            .or_insert_with(|| (record.context, Vec::new()))
            .1
            .push(record.statement);
    }

    groups
        .into_iter()
        .map(|(id, (context, statements))| Record {
            id,
            context,
            sentence_index: 1,
            statement: statements.join(" "),
        })
        .collect()
}

/// Number of distinct ids, counted the same way [`aggregate_posts`] groups.
pub fn distinct_posts(records: &[Record]) -> usize {
    records.iter().map(|r| &r.id).collect::<HashSet<_>>().len()
}
