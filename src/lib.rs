//! Deterministic sentence and hashtag tokenization of social-media captions.
//!
//! `caption-core` turns one caption per post into an ordered list of
//! statements (sentences and hashtags), each tagged with a 1-based index that
//! restarts for every post. Records can then be collapsed per post or given a
//! rolling context. All operations are pure: identical inputs always produce
//! identical outputs.

pub mod policy;
pub mod post;
pub mod tokenizer;
pub mod transform;
pub mod types;

pub use policy::{apply_policy, ContextMode, Granularity, PolicyConfig, Preprocessor};
pub use post::Post;
pub use tokenizer::tokenize;
pub use transform::transform;
pub use types::{PostId, Record};
