//! Insertion of fragments into the persisted home page

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// The document has no marker line to insert after
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("marker line {marker:?} not found in document")]
pub struct MarkerNotFound {
    pub marker: String,
}

/// Errors from rewriting the document on disk
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error(transparent)]
    MarkerNotFound(#[from] MarkerNotFound),

    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Insert `fragment` right after the first line that closes with `marker`
///
/// A line matches when its trimmed content ends with the trimmed marker, so
/// both a standalone `</header>` and a one-line `<header>..</header>` qualify.
/// Everything else, including earlier fragments, is kept byte for byte.
pub fn insert(document: &str, fragment: &str, marker: &str) -> Result<String, MarkerNotFound> {
    let marker = marker.trim();
    let mut out = String::with_capacity(document.len() + fragment.len() + 1);
    let mut inserted = false;

    for line in document.split_inclusive('\n') {
        out.push_str(line);
        if !inserted && !marker.is_empty() && line.trim().ends_with(marker) {
            if !line.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(fragment);
            if !fragment.ends_with('\n') {
                out.push('\n');
            }
            inserted = true;
        }
    }

    if inserted {
        Ok(out)
    } else {
        Err(MarkerNotFound {
            marker: marker.to_string(),
        })
    }
}

/// Rewrite the document at `path` with `fragment` inserted; the file is untouched on error
pub fn insert_into_file(path: &Path, fragment: &str, marker: &str) -> Result<(), DocumentError> {
    let io_err = |source: io::Error| DocumentError::Io {
        path: path.display().to_string(),
        source,
    };

    let document = fs::read_to_string(path).map_err(io_err)?;
    let updated = insert(&document, fragment, marker)?;
    fs::write(path, updated).map_err(io_err)?;

    tracing::debug!("Inserted {} bytes into {:?}", fragment.len(), path);
    Ok(())
}
