//! autopost: publish one generated blog post per run
//!
//! A run acquires an article body from an external generator or scraper
//! (falling back to a built-in template), renders it into an HTML fragment,
//! inserts the fragment into the blog's home page and pushes the change.

pub mod commands;
pub mod config;
pub mod content;
pub mod document;
pub mod helpers;
pub mod logging;
pub mod post;
pub mod publish;
pub mod templates;
pub mod workflow;

use anyhow::Result;
use std::path::{Path, PathBuf};

use workflow::RunError;

/// Name of the configuration file inside the blog directory
pub const CONFIG_FILE: &str = "_autopost.yml";

/// The blog being published to
#[derive(Debug, Clone)]
pub struct Autopost {
    /// Blog configuration
    pub config: config::AutopostConfig,
    /// Base directory (the git working copy)
    pub base_dir: PathBuf,
    /// Home page document
    pub document_path: PathBuf,
    /// Image directory
    pub image_dir: PathBuf,
    /// Log file
    pub log_path: PathBuf,
}

impl Autopost {
    /// Open a blog directory, loading `_autopost.yml` if it exists
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        if !base_dir.is_dir() {
            return Err(RunError::Precondition(format!(
                "blog directory not found: {:?}",
                base_dir
            ))
            .into());
        }

        let config_path = base_dir.join(CONFIG_FILE);
        let config = if config_path.exists() {
            config::AutopostConfig::load(&config_path)?
        } else {
            config::AutopostConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Build from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::AutopostConfig) -> Self {
        let document_path = base_dir.join(&config.document);
        let image_dir = base_dir.join(&config.image_dir);
        let log_path = base_dir.join(&config.log_file);

        Self {
            config,
            base_dir,
            document_path,
            image_dir,
            log_path,
        }
    }

    /// Check everything a run needs before anything is mutated
    pub fn check_preconditions(&self) -> Result<(), RunError> {
        if !self.base_dir.is_dir() {
            return Err(RunError::Precondition(format!(
                "blog directory not found: {:?}",
                self.base_dir
            )));
        }
        if !self.document_path.is_file() {
            return Err(RunError::Precondition(format!(
                "document not found: {:?}",
                self.document_path
            )));
        }
        Ok(())
    }
}
