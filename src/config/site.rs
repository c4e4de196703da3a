//! Blog configuration (_autopost.yml)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Topics used when the configuration does not list its own
pub const DEFAULT_TOPICS: [&str; 10] = [
    "Protocol Architecture",
    "Security Frameworks",
    "Performance Optimization",
    "Integration Patterns",
    "Context Management",
    "Server Implementation",
    "Client Libraries",
    "Resource Discovery",
    "Transport Layers",
    "Tooling Ecosystem",
];

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopostConfig {
    // Post
    pub category: String,
    pub topics: Vec<String>,

    // Files
    pub document: String,
    pub marker: String,
    pub image_dir: String,
    pub image_url: String,
    pub log_file: String,

    // Content sources
    #[serde(default)]
    pub generator: SourceConfig,
    #[serde(default)]
    pub enhanced_generator: SourceConfig,
    #[serde(default)]
    pub scraper: SourceConfig,

    // Deployment
    #[serde(default)]
    pub git: GitConfig,
}

impl Default for AutopostConfig {
    fn default() -> Self {
        Self {
            category: "MCP Research".to_string(),
            topics: DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect(),

            document: "index.html".to_string(),
            marker: "</header>".to_string(),
            image_dir: "images".to_string(),
            image_url: "images".to_string(),
            log_file: "automation.log".to_string(),

            generator: SourceConfig::script("scripts/mcp_generator.py"),
            enhanced_generator: SourceConfig::script("scripts/enhanced_mcp_generator.py"),
            scraper: SourceConfig::script("scripts/mcp_scraper.py"),

            git: GitConfig::default(),
        }
    }
}

impl AutopostConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AutopostConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no run could succeed with
    pub fn validate(&self) -> Result<()> {
        if self.topics.is_empty() {
            bail!("`topics` must list at least one topic");
        }
        if self.marker.trim().is_empty() {
            bail!("`marker` must not be empty");
        }
        Ok(())
    }
}

/// An external process that prints an article body on stdout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Executable to run
    pub program: String,
    /// Script handed to the program, relative to the blog directory
    pub script: Option<String>,
    /// Extra arguments after the script
    #[serde(default)]
    pub args: Vec<String>,
}

impl SourceConfig {
    fn script(path: &str) -> Self {
        Self {
            script: Some(path.to_string()),
            ..Self::default()
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            script: None,
            args: Vec::new(),
        }
    }
}

/// Git deployment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    pub remote: String,
    pub branch: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            branch: "main".to_string(),
        }
    }
}
