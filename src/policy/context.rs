use std::collections::HashMap;

use crate::types::identifiers::PostId;
use crate::types::record::Record;

/// Replace each record's context with the rolling prefix of its own post.
///
/// Row k of an id gets that id's statements 1..=k joined by a single space.
/// Rows stay where they are; interleaved ids do not see each other.
pub fn rolling_context(mut records: Vec<Record>) -> Vec<Record> {
    // Statement count is tracked apart from the text so empty statements
    // still get their separator.
    let mut prefixes: HashMap<PostId, (String, usize)> = HashMap::new();

    for record in &mut records {
        let (prefix, seen) = prefixes.entry(record.id.clone()).or_default();
        if *seen > 0 {
            prefix.push(' ');
        }
        *seen += 1;
        prefix.push_str(&record.statement);
        record.context = prefix.clone();
    }

    records
}
