pub mod context;
pub mod granularity;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::post::Post;
use crate::tokenizer::{HashtagSentenceSplitter, StatementSplitter};
use crate::transform::{build_report, tokenize_posts};
use crate::types::record::{Record, TransformOutput};
pub use context::rolling_context;
pub use granularity::{aggregate_posts, distinct_posts};

/// Whether output rows are per statement or collapsed per post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
	#[default]
	Sentence,
	Post,
}

/// What each row's context holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextMode {
	/// The full original caption.
	#[default]
	Whole,
	/// The post's statements so far, up to and including the row's own.
	Rolling,
}

#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
	#[error("Unknown statement granularity: {0}")]
	UnknownGranularity(String),

	#[error("Unknown context mode: {0}")]
	UnknownContextMode(String),
}

impl Granularity {
	pub fn as_str(&self) -> &'static str {
		match self {
			Granularity::Sentence => "sentence",
			Granularity::Post => "post",
		}
	}
}

impl ContextMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			ContextMode::Whole => "whole",
			ContextMode::Rolling => "rolling",
		}
	}
}

impl FromStr for Granularity {
	type Err = PolicyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"sentence" => Ok(Granularity::Sentence),
			"post" => Ok(Granularity::Post),
			_ => Err(PolicyError::UnknownGranularity(s.to_string())),
		}
	}
}

impl FromStr for ContextMode {
	type Err = PolicyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"whole" => Ok(ContextMode::Whole),
			"rolling" => Ok(ContextMode::Rolling),
			_ => Err(PolicyError::UnknownContextMode(s.to_string())),
		}
	}
}

impl fmt::Display for Granularity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl fmt::Display for ContextMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
	#[serde(default)]
	pub statement_cut: Granularity,
	#[serde(default)]
	pub context_cut: ContextMode,
}

impl PolicyConfig {
	pub fn new(statement_cut: Granularity, context_cut: ContextMode) -> Self {
		Self {
			statement_cut,
			context_cut,
		}
	}
}

/// Reshape records: granularity first, then context.
pub fn apply_policy(records: Vec<Record>, granularity: Granularity, context: ContextMode) -> Vec<Record> {
	let records = match granularity {
		Granularity::Sentence => records,
		Granularity::Post => aggregate_posts(records),
	};

	match context {
		ContextMode::Whole => records,
		ContextMode::Rolling => rolling_context(records),
	}
}

pub struct Preprocessor<S> {
	config: PolicyConfig,
	splitter: S,
}

impl Preprocessor<HashtagSentenceSplitter> {
	pub fn new(config: PolicyConfig) -> Self {
		Self {
			config,
			splitter: HashtagSentenceSplitter,
		}
	}
}

impl Default for Preprocessor<HashtagSentenceSplitter> {
	fn default() -> Self {
		Self::new(PolicyConfig::default())
	}
}

impl<S> Preprocessor<S>
where
	S: StatementSplitter,
{
	pub fn with_splitter(config: PolicyConfig, splitter: S) -> Self {
		Self { config, splitter }
	}

	pub fn config(&self) -> &PolicyConfig {
		&self.config
	}

	/// Raw path: tokenize captions, then apply the configured policy.
	pub fn process(&self, posts: &[Post]) -> TransformOutput {
		// 1. Tokenization Phase
		let (records, posts_emitted) = tokenize_posts(&self.splitter, posts);

		// 2. Policy Phase
		let records = self.apply(records);

		// 3. Report
		let report = build_report(posts.len(), posts_emitted, &records);

		tracing::info!(
			posts_considered = report.posts_considered,
			posts_emitted = report.posts_emitted,
			posts_dropped = report.posts_dropped,
			rows = report.rows_emitted,
			version = report.version.as_str(),
			"Posts processed"
		);

		TransformOutput { records, report }
	}

	/// Pre-tokenized path: the records already exist, only the policy runs.
	pub fn reshape(&self, records: Vec<Record>) -> TransformOutput {
		let posts = distinct_posts(&records);
		let records = self.apply(records);
		let report = build_report(posts, posts, &records);

		tracing::info!(
			posts = report.posts_considered,
			rows = report.rows_emitted,
			version = report.version.as_str(),
			"Records reshaped"
		);

		TransformOutput { records, report }
	}

	fn apply(&self, records: Vec<Record>) -> Vec<Record> {
		tracing::debug!(
			statement_cut = %self.config.statement_cut,
			context_cut = %self.config.context_cut,
			rows = records.len(),
			"Applying policy"
		);
		apply_policy(records, self.config.statement_cut, self.config.context_cut)
	}
}
