//! Render a post without touching the document or the repository

use anyhow::Result;
use chrono::Local;

use crate::content::WorkflowVariant;
use crate::workflow::{source_for, Prepared, Workflow};
use crate::Autopost;

/// Acquire content and assemble the fragment the next run would insert
pub fn run(site: &Autopost, variant: WorkflowVariant) -> Result<Prepared> {
    let workflow = Workflow::new(site)?;
    let source = source_for(site, variant);
    Ok(workflow.prepare(variant, source.as_ref(), &mut rand::rng(), &Local::now()))
}
