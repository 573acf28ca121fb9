use crate::post::Post;
use crate::tokenizer::{HashtagSentenceSplitter, StatementSplitter};
use crate::types::identifiers::RecordSetVersion;
use crate::types::record::{Record, TransformOutput, TransformReport};

/// Tokenize every post and emit one record per statement.
///
/// Records keep input post order, then statement order. Sentence indices
/// restart at 1 for each post. Posts with no statements emit nothing.
pub fn transform(posts: &[Post]) -> Vec<Record> {
    transform_with(&HashtagSentenceSplitter, posts)
}

pub fn transform_with<S: StatementSplitter>(splitter: &S, posts: &[Post]) -> Vec<Record> {
    tokenize_posts(splitter, posts).0
}

/// Same records as [`transform`], plus a report of the run.
pub fn transform_with_report(posts: &[Post]) -> TransformOutput {
    let (records, posts_emitted) = tokenize_posts(&HashtagSentenceSplitter, posts);
    let report = build_report(posts.len(), posts_emitted, &records);

    tracing::info!(
        posts_considered = report.posts_considered,
        posts_emitted = report.posts_emitted,
        rows = report.rows_emitted,
        version = report.version.as_str(),
        "Captions tokenized"
    );

    TransformOutput { records, report }
}

/// Records for every post, plus how many posts produced at least one.
pub(crate) fn tokenize_posts<S: StatementSplitter>(
    splitter: &S,
    posts: &[Post],
) -> (Vec<Record>, usize) {
    let mut records = Vec::new();
    let mut posts_emitted = 0;

    for post in posts {
        if append_post(splitter, post, &mut records) > 0 {
            posts_emitted += 1;
        }
    }

    (records, posts_emitted)
}

/// Returns the number of records appended.
fn append_post<S: StatementSplitter>(splitter: &S, post: &Post, out: &mut Vec<Record>) -> usize {
    let context = post.caption_text();
    let statements = splitter.split(context);

    if statements.is_empty() {
        tracing::debug!(post_id = %post.id, "No statements produced, dropping post");
        return 0;
    }

    let count = statements.len();
    out.extend(
        statements
            .into_iter()
            .enumerate()
            .map(|(i, statement)| Record {
                id: post.id.clone(),
                context: context.to_string(),
                sentence_index: i + 1,
                statement,
            }),
    );
    count
}

pub(crate) fn build_report(
    posts_considered: usize,
    posts_emitted: usize,
    records: &[Record],
) -> TransformReport {
    TransformReport {
        posts_considered,
        posts_emitted,
        posts_dropped: posts_considered.saturating_sub(posts_emitted),
        rows_emitted: records.len(),
        version: RecordSetVersion::from_records(records),
    }
}
