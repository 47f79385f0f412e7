//! # lapse-reviews
//!
//! Turns markdown review files into validated [`ReviewRecord`]s.
//!
//! A review file carries a `---` frontmatter block (`initialScore`,
//! `initialDate`, optional `title`, `category`, `tags`) and an optional
//! `## History` section with one `YYYY-MM-DD | +N` adjustment per line.
//! Malformed files are rejected here, at load time, so the scoring engine
//! only ever sees well-typed records.
//!
//! [`ReviewRecord`]: lapse_core::review::ReviewRecord

pub mod document;
pub mod frontmatter;
pub mod history;
pub mod source;

pub use document::parse_review;
pub use frontmatter::{parse_frontmatter, Frontmatter};
pub use history::{parse_history, History, SkippedLine};
pub use source::{load_review, MarkdownReviewSource};
