//! Cleanup of scraped page text

use lazy_static::lazy_static;
use regex::Regex;

use super::source::{ContentSource, GenerationError};
use crate::helpers::html_escape;

/// Lines kept from a scrape
const MAX_LINES: usize = 10;

/// Lines shorter than this are navigation crumbs, headings or noise
const MIN_LINE_LEN: usize = 30;

const SKIP_PHRASES: [&str; 9] = [
    "menu",
    "navigation",
    "footer",
    "copyright",
    "privacy policy",
    "terms of service",
    "cookie",
    "subscribe",
    "follow us",
];

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"[ \t\x0B\x0C\r]+").unwrap();
    static ref INLINE_MARKUP: Regex = Regex::new(r"[\\`*_\[\]~|]").unwrap();
    static ref BLOCK_MARKER: Regex = Regex::new(r"^(\d+)([.)])|^([#+=-])").unwrap();
}

/// Scraped text is plain prose; keep the renderer from reading it as Markdown
fn escape_markdown(line: &str) -> String {
    let inline = INLINE_MARKUP.replace_all(line, r"\$0");
    BLOCK_MARKER
        .replace(&inline, r"${1}\${2}${3}")
        .into_owned()
}

/// Reduce raw scraped text to at most ten meaningful lines, one paragraph each
pub fn clean_scraped_text(text: &str) -> String {
    text.lines()
        .map(|line| WHITESPACE.replace_all(line, " ").trim().to_string())
        .filter(|line| line.chars().count() > MIN_LINE_LEN)
        .filter(|line| {
            let lower = line.to_lowercase();
            !SKIP_PHRASES.iter().any(|phrase| lower.contains(phrase))
        })
        .take(MAX_LINES)
        .map(|line| escape_markdown(&html_escape(&line)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Wraps a scraper so that its output is cleaned before use
pub struct CleanedSource<S> {
    inner: S,
}

impl<S: ContentSource> CleanedSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: ContentSource> ContentSource for CleanedSource<S> {
    fn fetch(&self) -> Result<String, GenerationError> {
        let raw = self.inner.fetch()?;
        let cleaned = clean_scraped_text(&raw);
        if cleaned.is_empty() {
            return Err(GenerationError::Empty);
        }
        Ok(cleaned)
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl ContentSource for Fixed {
        fn fetch(&self) -> Result<String, GenerationError> {
            Ok(self.0.to_string())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    #[test]
    fn test_drops_short_and_boilerplate_lines() {
        let raw = "Home\n\
                   The protocol   defines\ta client and server handshake.\n\
                   Subscribe to our newsletter for more updates today!\n\
                   Servers expose resources, tools and prompts to hosts.";
        let cleaned = clean_scraped_text(raw);
        assert_eq!(
            cleaned,
            "The protocol defines a client and server handshake.\n\n\
             Servers expose resources, tools and prompts to hosts."
        );
    }

    #[test]
    fn test_keeps_at_most_ten_lines() {
        let raw: Vec<String> = (0..25)
            .map(|i| format!("Paragraph number {i} with enough words to be kept"))
            .collect();
        let cleaned = clean_scraped_text(&raw.join("\n"));
        assert_eq!(cleaned.split("\n\n").count(), 10);
        assert!(cleaned.starts_with("Paragraph number 0 "));
    }

    #[test]
    fn test_escapes_markup() {
        let cleaned = clean_scraped_text("Use <script> tags sparingly in generated pages please");
        assert!(cleaned.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_scraped_lines_render_as_paragraphs() {
        let raw = "1. Initialize the client before sending any requests\n\
                   # Servers expose resources and tools to their hosts\n\
                   - Transports include stdio and streamable HTTP today\n\
                   > Quoted guidance from the protocol documentation page\n\
                   Capabilities like *sampling* and `roots` are negotiated";
        let html = crate::content::MarkdownRenderer::new().render(&clean_scraped_text(raw));

        assert_eq!(html.matches("<p>").count(), 5);
        for tag in ["<ol", "<ul", "<h1", "<blockquote", "<em>", "<code>"] {
            assert!(!html.contains(tag), "scraped text rendered as {tag}");
        }
        assert!(html.contains("<p>1. Initialize the client"));
        assert!(html.contains("<p># Servers expose"));
        assert!(html.contains("<p>- Transports include"));
        assert!(html.contains("*sampling* and `roots`"));
    }

    #[test]
    fn test_cleaned_source_rejects_noise_only_output() {
        let source = CleanedSource::new(Fixed("menu\nfooter\ncookie banner"));
        assert!(matches!(source.fetch(), Err(GenerationError::Empty)));
    }
}
