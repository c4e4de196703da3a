//! Content sources - external processes that print an article body

use clap::ValueEnum;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

use crate::config::{AutopostConfig, SourceConfig};

/// Errors from acquiring content; all of them are recovered by a fallback
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("content source not found: {0}")]
    Missing(String),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("content source failed ({status})")]
    Failed { status: String, output: String },

    #[error("content source produced no output")]
    Empty,
}

/// Which content source and fallback template a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WorkflowVariant {
    /// Plain generator script
    Generator,
    /// Enhanced generator script
    Enhanced,
    /// Scraper script
    Scraper,
}

impl WorkflowVariant {
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowVariant::Generator => "generator",
            WorkflowVariant::Enhanced => "enhanced",
            WorkflowVariant::Scraper => "scraper",
        }
    }

    /// The configured process for this variant
    pub fn source_config<'a>(&self, config: &'a AutopostConfig) -> &'a SourceConfig {
        match self {
            WorkflowVariant::Generator => &config.generator,
            WorkflowVariant::Enhanced => &config.enhanced_generator,
            WorkflowVariant::Scraper => &config.scraper,
        }
    }
}

impl fmt::Display for WorkflowVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Something that can produce an article body
pub trait ContentSource {
    /// Fetch the body; any error sends the run to its fallback template
    fn fetch(&self) -> Result<String, GenerationError>;

    /// Human readable name for log lines
    fn describe(&self) -> String;
}

/// Runs an external program and captures its output
#[derive(Debug, Clone)]
pub struct ProcessSource {
    program: String,
    script: Option<PathBuf>,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl ProcessSource {
    /// Create a source from configuration; relative scripts resolve against `working_dir`
    pub fn new(working_dir: &Path, config: &SourceConfig) -> Self {
        Self {
            program: config.program.clone(),
            script: config.script.as_ref().map(|s| working_dir.join(s)),
            args: config.args.clone(),
            working_dir: working_dir.to_path_buf(),
        }
    }

    /// Run `program` directly with the given arguments
    pub fn command(working_dir: &Path, program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            script: None,
            args: args.iter().map(|a| a.to_string()).collect(),
            working_dir: working_dir.to_path_buf(),
        }
    }
}

impl ContentSource for ProcessSource {
    fn fetch(&self) -> Result<String, GenerationError> {
        if let Some(script) = &self.script {
            if !script.is_file() {
                return Err(GenerationError::Missing(script.display().to_string()));
            }
        }

        let mut command = Command::new(&self.program);
        if let Some(script) = &self.script {
            command.arg(script);
        }
        command.args(&self.args).current_dir(&self.working_dir);

        let output = command.output().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => GenerationError::Missing(self.program.clone()),
            _ => GenerationError::Spawn {
                program: self.program.clone(),
                source: e,
            },
        })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(GenerationError::Failed {
                status: output.status.to_string(),
                output: text,
            });
        }

        if text.trim().is_empty() {
            return Err(GenerationError::Empty);
        }

        tracing::debug!("{} produced {} bytes", self.describe(), text.len());
        Ok(text)
    }

    fn describe(&self) -> String {
        match &self.script {
            Some(script) => format!("{} {}", self.program, script.display()),
            None => self.program.clone(),
        }
    }
}
