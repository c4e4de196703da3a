//! Post assembly - turns an article into a self-contained HTML fragment

mod image;

pub use image::{find_first_image, IMAGE_EXTENSIONS};

use chrono::{DateTime, Local};
use std::fmt;
use std::path::Path;

use crate::config::AutopostConfig;
use crate::content::{Article, MarkdownRenderer};
use crate::helpers::{asset_url, html_escape, image_tag, style_tag};
use crate::templates;

/// A rendered post, ready for insertion into the home page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn line_count(&self) -> usize {
        self.0.lines().count()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds fragments: title, metadata, body, optional image, references, stylesheet
pub struct PostAssembler {
    category: String,
    image_url: String,
    renderer: MarkdownRenderer,
}

impl PostAssembler {
    pub fn new(config: &AutopostConfig) -> Self {
        Self {
            category: config.category.clone(),
            image_url: config.image_url.clone(),
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Build the article for `body` and render it, picking the first image in `image_dir`
    pub fn assemble(
        &self,
        body: &str,
        topic: &str,
        timestamp: &DateTime<Local>,
        image_dir: &Path,
    ) -> (Article, Fragment) {
        let article = Article::new(&self.category, topic, body.to_string(), *timestamp)
            .with_image(find_first_image(image_dir));
        let fragment = self.render(&article);
        (article, fragment)
    }

    /// Render an article
    pub fn render(&self, article: &Article) -> Fragment {
        let mut html = Vec::new();

        html.push(format!(
            r#"<article class="post" data-topic="{}">"#,
            article.slug()
        ));
        html.push(format!(
            r#"<h2 class="post-title">{}</h2>"#,
            html_escape(&article.title)
        ));
        html.push(format!(
            r#"<div class="post-meta"><time datetime="{}">{}</time><span class="post-topic">{}</span></div>"#,
            article.timestamp.to_rfc3339(),
            article.timestamp.format("%Y-%m-%d %H:%M:%S"),
            html_escape(&article.topic)
        ));

        html.push(r#"<div class="post-body">"#.to_string());
        html.push(self.renderer.render(&article.body).trim_end().to_string());
        html.push("</div>".to_string());

        if let Some(file_name) = article
            .image
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy())
        {
            html.push(r#"<figure class="post-image">"#.to_string());
            html.push(image_tag(&asset_url(&self.image_url, &file_name), &article.topic));
            html.push("</figure>".to_string());
        }

        html.push(templates::REFERENCES.trim_end().to_string());
        html.push(style_tag(templates::POST_STYLESHEET));
        html.push("</article>".to_string());

        let mut out = html.join("\n");
        out.push('\n');
        Fragment(out)
    }
}
