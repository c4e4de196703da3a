//! Initialize a blog directory for autopost

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::AutopostConfig;
use crate::{templates, CONFIG_FILE};

/// Create the configuration, a starter home page and the image directory
///
/// Existing files are left alone so `init` can be run inside a live blog.
pub fn init_site(target_dir: &Path) -> Result<()> {
    let defaults = AutopostConfig::default();

    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join(&defaults.image_dir))?;

    let topics = defaults
        .topics
        .iter()
        .map(|t| format!("  - {}", t))
        .collect::<Vec<_>>()
        .join("\n");
    let config = templates::fill(
        templates::CONFIG_YML,
        &[("category", defaults.category.as_str()), ("topics", topics.as_str())],
    );
    write_new(&target_dir.join(CONFIG_FILE), &config)?;

    let title = format!("{} Blog", defaults.category);
    let index = templates::fill(templates::INDEX_HTML, &[("title", title.as_str())]);
    write_new(&target_dir.join(&defaults.document), &index)?;

    Ok(())
}

fn write_new(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::info!("Keeping existing {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    tracing::info!("Created: {:?}", path);
    Ok(())
}
