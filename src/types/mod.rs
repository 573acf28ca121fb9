pub mod identifiers;
pub mod record;

pub use identifiers::{PostId, RecordSetVersion};
pub use record::{Record, TransformOutput, TransformReport};
