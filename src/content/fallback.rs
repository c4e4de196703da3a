//! Fallback articles used when no content source succeeds

use chrono::{DateTime, Local};
use std::fmt;

use super::source::{GenerationError, WorkflowVariant};
use crate::templates;

/// Named fallback article, chosen by which acquisition step failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackTemplate {
    GeneratorMissing,
    GeneratorFailed,
    EnhancedFailed,
    ScraperFailed,
}

impl FallbackTemplate {
    pub const ALL: [FallbackTemplate; 4] = [
        FallbackTemplate::GeneratorMissing,
        FallbackTemplate::GeneratorFailed,
        FallbackTemplate::EnhancedFailed,
        FallbackTemplate::ScraperFailed,
    ];

    /// Pick the template for a failed variant
    pub fn for_failure(variant: WorkflowVariant, error: &GenerationError) -> Self {
        match (variant, error) {
            (WorkflowVariant::Generator, GenerationError::Missing(_)) => {
                FallbackTemplate::GeneratorMissing
            }
            (WorkflowVariant::Generator, _) => FallbackTemplate::GeneratorFailed,
            (WorkflowVariant::Enhanced, _) => FallbackTemplate::EnhancedFailed,
            (WorkflowVariant::Scraper, _) => FallbackTemplate::ScraperFailed,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FallbackTemplate::GeneratorMissing => "generator-missing",
            FallbackTemplate::GeneratorFailed => "generator-failed",
            FallbackTemplate::EnhancedFailed => "enhanced-failed",
            FallbackTemplate::ScraperFailed => "scraper-failed",
        }
    }

    /// Raw template text with placeholders
    pub fn source(&self) -> &'static str {
        match self {
            FallbackTemplate::GeneratorMissing => templates::GENERATOR_MISSING,
            FallbackTemplate::GeneratorFailed => templates::GENERATOR_FAILED,
            FallbackTemplate::EnhancedFailed => templates::ENHANCED_FAILED,
            FallbackTemplate::ScraperFailed => templates::SCRAPER_FAILED,
        }
    }

    /// Article body with date and time filled in
    pub fn render(&self, now: &DateTime<Local>) -> String {
        let date = now.format("%Y-%m-%d").to_string();
        let time = now.format("%H:%M:%S").to_string();
        templates::fill(self.source(), &[("date", date.as_str()), ("time", time.as_str())])
    }
}

impl fmt::Display for FallbackTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fallback body for a variant whose source failed with `error`
pub fn select_fallback(
    variant: WorkflowVariant,
    error: &GenerationError,
    now: &DateTime<Local>,
) -> (FallbackTemplate, String) {
    let template = FallbackTemplate::for_failure(variant, error);
    (template, template.render(now))
}
