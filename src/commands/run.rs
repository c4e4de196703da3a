//! Publish one post

use anyhow::Result;
use chrono::Local;

use crate::content::WorkflowVariant;
use crate::publish::GitPublisher;
use crate::workflow::{source_for, ContentOrigin, PublishOutcome, RunOptions, RunReport, Workflow};
use crate::Autopost;

/// Run the full workflow against the blog's git working copy
pub fn run(site: &Autopost, variant: WorkflowVariant, no_push: bool, dry_run: bool) -> Result<RunReport> {
    let workflow = Workflow::new(site)?;
    let source = source_for(site, variant);

    let mut publisher = GitPublisher::new(&site.base_dir, &site.config.git);
    if no_push {
        publisher = publisher.without_push();
    }

    let report = workflow.run(
        RunOptions { variant, dry_run },
        source.as_ref(),
        &publisher,
        &mut rand::rng(),
        &Local::now(),
    )?;

    Ok(report)
}

/// One-line summary for the terminal
pub fn summary(report: &RunReport) -> String {
    let origin = match report.origin {
        ContentOrigin::Source(variant) => format!("{} output", variant),
        ContentOrigin::Fallback(template) => format!("fallback {}", template),
    };
    let publish = match &report.publish {
        PublishOutcome::Published => "published".to_string(),
        PublishOutcome::Failed(e) => format!("not published ({})", e),
        PublishOutcome::Skipped => "dry run".to_string(),
    };
    format!("{} [{}, {}]", report.title, origin, publish)
}
