pub mod row;
pub mod post;
pub mod ingest;

pub use crate::types::identifiers::PostId;
pub use row::{FieldValue, Row, RowError};
pub use post::Post;
pub use ingest::{posts_from_rows, records_from_rows};
