//! Content module - acquiring article bodies and topics

mod article;
pub mod fallback;
mod markdown;
pub mod scrape;
pub mod source;
mod topic;

pub use article::{compose_title, Article};
pub use fallback::{select_fallback, FallbackTemplate};
pub use markdown::MarkdownRenderer;
pub use scrape::CleanedSource;
pub use source::{ContentSource, GenerationError, ProcessSource, WorkflowVariant};
pub use topic::TopicSelector;
