//! Image directory scan

use glob::MatchOptions;
use std::path::{Path, PathBuf};

/// Extensions that qualify as post images
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// First image in `dir` by file name, or `None` if there is none
///
/// A missing directory is treated as empty.
pub fn find_first_image(dir: &Path) -> Option<PathBuf> {
    if !dir.is_dir() {
        return None;
    }

    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };
    let base = glob::Pattern::escape(&dir.to_string_lossy());

    let mut images: Vec<PathBuf> = Vec::new();
    for ext in IMAGE_EXTENSIONS {
        let pattern = format!("{}/*.{}", base, ext);
        let entries = match glob::glob_with(&pattern, options) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Invalid image pattern {}: {}", pattern, e);
                continue;
            }
        };
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => images.push(path),
                Ok(_) => {}
                Err(e) => tracing::warn!("Skipping unreadable image entry: {}", e),
            }
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    images.into_iter().next()
}
