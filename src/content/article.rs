//! Article model

use chrono::{DateTime, Local};
use std::path::PathBuf;

/// A single post, built fresh for each run and consumed by the assembler
#[derive(Debug, Clone)]
pub struct Article {
    /// Composite title, e.g. "MCP Research 09: Transport Layers"
    pub title: String,

    /// Topic the title was built from
    pub topic: String,

    /// Markdown or plain text body
    pub body: String,

    /// Publication time
    pub timestamp: DateTime<Local>,

    /// Image shown below the body
    pub image: Option<PathBuf>,
}

impl Article {
    /// Create an article, deriving the title from category, hour and topic
    pub fn new(category: &str, topic: &str, body: String, timestamp: DateTime<Local>) -> Self {
        Self {
            title: compose_title(category, topic, &timestamp),
            topic: topic.to_string(),
            body,
            timestamp,
            image: None,
        }
    }

    /// Attach an image
    pub fn with_image(mut self, image: Option<PathBuf>) -> Self {
        self.image = image;
        self
    }

    /// Slug of the topic, used as the fragment's anchor
    pub fn slug(&self) -> String {
        slug::slugify(&self.topic)
    }
}

/// `"<Category> <HH>: <Topic>"`
pub fn compose_title(category: &str, topic: &str, timestamp: &DateTime<Local>) -> String {
    format!("{} {}: {}", category, timestamp.format("%H"), topic)
}
