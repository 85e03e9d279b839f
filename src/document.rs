//! Single-document checks: front matter extraction, field rules, and body
//! conventions.

mod body;
mod frontmatter;
mod metadata;
mod record;

pub use body::{check_body, has_example_block, EXAMPLE_BLOCK_KIND};
pub use frontmatter::{normalize_line_endings, split_front_matter, FrontMatterError, DELIMITER};
pub use metadata::{validate_front_matter, MetadataOutcome, STATUSES};
pub use record::{sequence, Field, RawRecord, RecordError};
